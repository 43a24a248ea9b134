use super::*;

#[test]
fn step_stays_inside_grid() {
    let corner = Point::new(0, 0);
    assert_eq!(corner.step(Direction::Up, 3), None);
    assert_eq!(corner.step(Direction::Left, 3), None);
    assert_eq!(corner.step(Direction::Down, 3), Some(Point::new(1, 0)));
    assert_eq!(corner.step(Direction::Right, 3), Some(Point::new(0, 1)));

    let far = Point::new(2, 2);
    assert_eq!(far.step(Direction::Down, 3), None);
    assert_eq!(far.step(Direction::Right, 3), None);
}

#[test]
fn adjacency_excludes_diagonals_and_self() {
    let center = Point::new(1, 1);
    assert!(center.is_adjacent(Point::new(0, 1)));
    assert!(center.is_adjacent(Point::new(1, 2)));
    assert!(!center.is_adjacent(Point::new(0, 0)));
    assert!(!center.is_adjacent(center));
    assert!(!center.is_adjacent(Point::new(1, 3)));
}

#[test]
fn opposite_reverses_offset() {
    for direction in Direction::ALL {
        let (dr, dc) = direction.as_offset();
        let (or, oc) = direction.opposite().as_offset();
        assert_eq!((dr + or, dc + oc), (0, 0), "{direction}");
        assert_eq!(direction.lock_axis(), direction.opposite().lock_axis());
    }
}

#[test]
fn new_tile_uses_one_based_labels() {
    let tile = Tile::new(6, Point::new(1, 2), 5);
    assert_eq!(tile.id, TileId(6));
    assert_eq!(tile.label, "6");
    assert_eq!(tile.boundary.row, "2");
    assert_eq!(tile.boundary.column, "3");
    assert_eq!(tile.array_position.prev_index, None);
    assert!(tile.disabled);
    assert!(!tile.blank);
    assert_eq!(tile.lock_axis, None);
}

#[test]
fn current_boundary_follows_point() {
    let mut tile = Tile::new(1, Point::new(0, 0), 0);
    tile.point = Point::new(2, 1);
    assert_eq!(tile.boundary, Boundary::from_point(Point::new(0, 0)));
    assert_eq!(tile.current_boundary().row, "3");
    assert_eq!(tile.current_boundary().column, "2");
}
