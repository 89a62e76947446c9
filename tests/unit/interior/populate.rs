//! Tests for distance-scaled population scattering

use rand::SeedableRng;
use rand::rngs::StdRng;

use tilecarve::interior::partition::{Area, Arena, Axis};
use tilecarve::interior::populate::scatter_population;
use tilecarve::spatial::grid;
use tilecarve::spatial::tiles;
use tilecarve::spatial::{Map, Rect};

#[test]
fn test_rooms_gain_distance_minus_one_markers() {
    let mut arena = Arena::default();
    arena.push(Area::root(9, 9));
    let mut map = Map::new(9, 9);
    let mut rng = StdRng::seed_from_u64(1);

    // Distance four yields three markers in the 7x7 interior
    scatter_population(&arena, &[4], &mut map, &mut rng);
    assert_eq!(map.count_symbol(tiles::PERSON), 3);

    // Markers stay off the wall border
    let Some(characters) = map.layer_ref(grid::CHARACTERS) else {
        unreachable!("the standard layer stack holds a character plane");
    };
    for y in 0..9 {
        for x in 0..9 {
            if characters.get(x, y) == tiles::PERSON {
                assert!((1..8).contains(&x) && (1..8).contains(&y));
            }
        }
    }
}

#[test]
fn test_streets_spread_between_their_end_caps() {
    let mut arena = Arena::default();
    arena.push(Area::root(9, 9));
    let street = arena.push(Area::child(Rect::new(4, 0, 1, 9), 0, 1));
    if let Some(area) = arena.get_mut(street) {
        area.street_axis = Some(Axis::Vertical);
    }
    let mut map = Map::new(9, 9);
    let mut rng = StdRng::seed_from_u64(2);

    scatter_population(&arena, &[0, 3], &mut map, &mut rng);
    assert_eq!(map.count_symbol(tiles::PERSON), 2);
    let Some(characters) = map.layer_ref(grid::CHARACTERS) else {
        unreachable!("the standard layer stack holds a character plane");
    };
    for y in 0..9 {
        for x in 0..9 {
            if characters.get(x, y) == tiles::PERSON {
                assert_eq!(x, 4, "street markers stay in the corridor");
                assert!((1..8).contains(&y), "end caps stay clear");
            }
        }
    }
}

#[test]
fn test_areas_on_the_path_stay_quiet() {
    let mut arena = Arena::default();
    arena.push(Area::root(9, 9));
    let mut map = Map::new(9, 9);
    let mut rng = StdRng::seed_from_u64(3);

    // Distance one means on the critical path: no markers at all
    scatter_population(&arena, &[1], &mut map, &mut rng);
    assert_eq!(map.count_symbol(tiles::PERSON), 0);

    // Unlabeled areas place nothing either
    scatter_population(&arena, &[0], &mut map, &mut rng);
    assert_eq!(map.count_symbol(tiles::PERSON), 0);
}
