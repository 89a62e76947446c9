//! Tests for integer rectangle arithmetic and edge contact detection

use tilecarve::spatial::Rect;

#[test]
fn test_extents_and_center() {
    let r = Rect::new(2, 3, 5, 4);
    assert_eq!(r.right(), 7);
    assert_eq!(r.bottom(), 7);
    assert_eq!(r.center(), (4, 5));
}

#[test]
fn test_containment_is_half_open() {
    let r = Rect::new(1, 1, 3, 3);
    assert!(r.contains(1, 1));
    assert!(r.contains(3, 3));
    assert!(!r.contains(4, 3));
    assert!(!r.contains(0, 2));
}

#[test]
fn test_trim_drops_trailing_edges() {
    let r = Rect::new(0, 0, 6, 5).trimmed();
    assert_eq!(r, Rect::new(0, 0, 5, 4));
}

#[test]
fn test_vertical_edge_contact() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(5, 2, 5, 5);
    let contact = a.edge_contact(&b);
    assert!(contact.is_some());
    let Some(contact) = contact else { return };
    assert!(contact.vertical);
    assert_eq!(contact.line, 5);
    assert_eq!((contact.lo, contact.hi), (2, 4));
    assert_eq!(contact.midpoint(), (5, 3));
}

#[test]
fn test_horizontal_edge_contact() {
    let a = Rect::new(0, 0, 4, 3);
    let b = Rect::new(1, 3, 6, 2);
    let contact = a.edge_contact(&b);
    assert!(contact.is_some());
    let Some(contact) = contact else { return };
    assert!(!contact.vertical);
    assert_eq!(contact.line, 3);
    assert_eq!((contact.lo, contact.hi), (1, 3));
    assert_eq!(contact.midpoint(), (2, 3));
}

#[test]
fn test_separated_rectangles_do_not_touch() {
    let a = Rect::new(0, 0, 3, 3);
    assert!(a.edge_contact(&Rect::new(4, 0, 3, 3)).is_none());
    assert!(a.edge_contact(&Rect::new(0, 4, 3, 3)).is_none());
}

#[test]
fn test_corner_contact_has_no_span() {
    // Sharing only a corner leaves an empty span, which is no contact
    let a = Rect::new(0, 0, 3, 3);
    let b = Rect::new(3, 3, 3, 3);
    assert!(a.edge_contact(&b).is_none());
}

#[test]
fn test_one_tile_overlap_becomes_contact_after_trim() {
    // Subdivided sibling rooms overlap on one wall column; trimming both
    // turns the overlap into clean edge contact on that column
    let a = Rect::new(0, 0, 6, 5);
    let b = Rect::new(5, 0, 5, 5);
    assert!(a.edge_contact(&b).is_none());
    let contact = a.trimmed().edge_contact(&b.trimmed());
    assert!(contact.is_some());
    let Some(contact) = contact else { return };
    assert_eq!(contact.line, 5);
    assert_eq!(contact.midpoint(), (5, 1));
}
