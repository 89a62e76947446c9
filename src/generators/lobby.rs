//! Lobby-based building layout
//!
//! Fills the building with open floor behind an outer wall, then places
//! a walled lobby according to an edge preference and doors it toward the
//! rest of the floor.

use rand::Rng;
use rand::rngs::StdRng;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Where the lobby may sit inside the building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyPlacement {
    /// Touching the outer wall
    Edge,
    /// Fully inside, clear of the outer wall
    Interior,
    /// No preference
    Anywhere,
}

/// Whether a candidate lobby honours the placement preference
const fn acceptable(lobby: Rect, width: i32, height: i32, placement: LobbyPlacement) -> bool {
    match placement {
        LobbyPlacement::Edge => {
            lobby.x == 0 || lobby.y == 0 || lobby.right() == width || lobby.bottom() == height
        }
        LobbyPlacement::Interior => {
            lobby.x > 0 && lobby.y > 0 && lobby.right() < width && lobby.bottom() < height
        }
        LobbyPlacement::Anywhere => true,
    }
}

/// Generate a building layout around a lobby
///
/// # Errors
///
/// Returns an error when the room size range is empty or the building
/// cannot hold a minimum-size lobby.
pub fn generate(
    width: i32,
    height: i32,
    min_room_size: i32,
    max_room_size: i32,
    placement: LobbyPlacement,
    rng: &mut StdRng,
) -> Result<Map> {
    if min_room_size < 3 || max_room_size <= min_room_size {
        return Err(invalid_parameter(
            "min_room_size/max_room_size",
            &format!("{min_room_size}/{max_room_size}"),
            &"must be an ascending range starting at three",
        ));
    }
    if width <= min_room_size || height <= min_room_size {
        return Err(invalid_parameter(
            "width/height",
            &format!("{width}x{height}"),
            &"the building must be able to hold the lobby",
        ));
    }

    let mut map = Map::new(width, height);
    map.layer(grid::GROUND).fill(tiles::ROOM);
    map.layer(grid::STRUCTURES)
        .rectangle(Rect::new(0, 0, width, height), tiles::WALL, false);

    // Bounded retries; the last candidate stands if the preference
    // cannot be met
    let mut lobby = Rect::new(0, 0, min_room_size, min_room_size);
    for _ in 0..1000 {
        let x = rng.random_range(0..width - min_room_size);
        let y = rng.random_range(0..height - min_room_size);
        let mut w = min_room_size + rng.random_range(0..max_room_size - min_room_size);
        let mut h = min_room_size + rng.random_range(0..max_room_size - min_room_size);
        if x + w >= width {
            w = width - x;
        }
        if y + h >= height {
            h = height - y;
        }
        lobby = Rect::new(x, y, w, h);
        if acceptable(lobby, width, height, placement) {
            break;
        }
    }
    map.layer(grid::STRUCTURES)
        .rectangle(lobby, tiles::WALL, false);

    // Door the lobby toward the surrounding floor
    let (cx, cy) = lobby.center();
    let probes = [
        ((cx, lobby.y), (cx, lobby.y - 1)),
        ((lobby.right() - 1, cy), (lobby.right(), cy)),
        ((cx, lobby.bottom() - 1), (cx, lobby.bottom())),
        ((lobby.x, cy), (lobby.x - 1, cy)),
    ];
    for ((door_x, door_y), (out_x, out_y)) in probes {
        let open = map.is_in(out_x, out_y)
            && map
                .layer_ref(grid::STRUCTURES)
                .is_none_or(|layer| layer.get(out_x, out_y) == tiles::NOTHING);
        if open {
            map.layer(grid::STRUCTURES).set(door_x, door_y, tiles::DOOR);
            break;
        }
    }

    Ok(map)
}
