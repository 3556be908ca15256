//! Ship templates and catalogue draws.

use rand::Rng;

use crate::config::SHIP_CATALOG;

/// Type of ship: name and hull size in cells. Immutable once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    name: &'static str,
    size: i32,
}

impl Ship {
    /// Create a new ship template.
    pub const fn new(name: &'static str, size: i32) -> Self {
        Self { name, size }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship covers.
    pub fn size(&self) -> i32 {
        self.size
    }
}

/// Draw one ship uniformly from the catalogue. Draws are independent, so a
/// fleet may contain duplicates.
pub fn random_ship<R: Rng>(rng: &mut R) -> Ship {
    SHIP_CATALOG[rng.random_range(0..SHIP_CATALOG.len())]
}

/// Sum of hull sizes over a fleet.
pub fn total_ship_size(ships: &[Ship]) -> i32 {
    ships.iter().map(|ship| ship.size()).sum()
}
