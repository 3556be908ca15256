use crate::ship::Ship;

pub const GRID_WIDTH: i32 = 10;
pub const GRID_HEIGHT: i32 = 10;
pub const SHIPS_PER_SIDE: usize = 6;

/// The five templates every fleet draws from.
pub const SHIP_CATALOG: [Ship; 5] = [
    Ship::new("Carrier", 5),
    Ship::new("Battleship", 4),
    Ship::new("Cruiser", 3),
    Ship::new("Submarine", 3),
    Ship::new("Destroyer", 2),
];
