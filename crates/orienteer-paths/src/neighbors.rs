use orienteer_core::Point;

/// The eight neighbor offsets, in enumeration order.
///
/// `dx` varies slowest: `(-1,-1) (-1,0) (-1,1) (0,-1) (0,1) (1,-1) (1,0) (1,1)`.
/// The order never changes the cost of the path found, but it decides which
/// of several equally cheap paths is returned.
pub const OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];
