//! Fleet selection, size equalization and random placement.

use rand::Rng;
use thiserror::Error;

use crate::geometry::{Direction, Position};
use crate::grid::Grid;
use crate::ship::{self, Ship};

/// Position samples before placement gives up on a ship. Six max-size ships
/// can genuinely exhaust a small board once the one-cell buffer is counted.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Candidate draws before equalization gives up.
const MAX_EQUALIZE_DRAWS: usize = 10_000;

/// Errors raised while building and placing the fleets.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// No sampled position admitted the ship within the attempt budget.
    #[error("no room left to place a ship of size {size}")]
    NoRoomForShip { size: i32 },
    /// Equalization failed to reach an exact size match within its budget.
    #[error("fleet size equalization stalled at difference {difference}")]
    EqualizationStalled { difference: i32 },
}

/// Draw `amount` ships independently from the catalogue, duplicates allowed.
pub fn select_random_ships<R: Rng>(rng: &mut R, amount: usize) -> Vec<Ship> {
    (0..amount).map(|_| ship::random_ship(rng)).collect()
}

/// Re-draw single slots of `ships` until its total size equals `target`.
///
/// Each round draws one candidate and picks one slot; the candidate replaces
/// the slot only when that moves the running difference strictly closer to
/// zero. Rounds that would not improve change nothing.
pub fn equalize_total_size<R: Rng>(
    rng: &mut R,
    ships: &mut [Ship],
    target: i32,
) -> Result<(), SetupError> {
    let mut difference = target - ship::total_ship_size(ships);
    for _ in 0..MAX_EQUALIZE_DRAWS {
        if difference == 0 {
            return Ok(());
        }
        let candidate = ship::random_ship(rng);
        let slot = rng.random_range(0..ships.len());
        let change = candidate.size() - ships[slot].size();
        if (difference - change).abs() < difference.abs() {
            ships[slot] = candidate;
            difference -= change;
        }
    }
    if difference == 0 {
        Ok(())
    } else {
        Err(SetupError::EqualizationStalled { difference })
    }
}

/// Pick a random legal placement for a ship of `size`: sample positions
/// until one admits at least one direction, then pick uniformly among the
/// valid directions.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    grid: &Grid,
    size: i32,
) -> Result<(Position, Direction), SetupError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let position = grid.random_position(rng);
        let mut directions = grid.valid_directions(position, size);
        if directions.is_empty() {
            continue;
        }
        let direction = directions.swap_remove(rng.random_range(0..directions.len()));
        return Ok((position, direction));
    }
    Err(SetupError::NoRoomForShip { size })
}

/// Place every ship of `ships` at a random legal spot on `grid`.
pub fn place_fleet<R: Rng>(rng: &mut R, grid: &mut Grid, ships: &[Ship]) -> Result<(), SetupError> {
    for ship in ships {
        let (position, direction) = random_placement(rng, grid, ship.size())?;
        grid.place_ship(*ship, position, direction);
        log::debug!(
            "placed {} (size {}) at ({}, {}) {:?}",
            ship.name(),
            ship.size(),
            position.x,
            position.y,
            direction
        );
    }
    Ok(())
}
