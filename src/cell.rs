//! Cell state and the per-cell ship record.

use crate::geometry::{Direction, Position};
use crate::ship::Ship;

/// What a grid square holds and whether it has been attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Water,
    Ship,
    AttackedWater,
    AttackedShip,
}

impl CellKind {
    /// The state this kind moves to when attacked. Attacked kinds are a
    /// fixed point, so repeat attacks change nothing.
    pub fn attacked(self) -> CellKind {
        match self {
            CellKind::Water => CellKind::AttackedWater,
            CellKind::Ship => CellKind::AttackedShip,
            other => other,
        }
    }

    /// Whether an attack on this kind would change it.
    pub fn is_attackable(self) -> bool {
        self.attacked() != self
    }
}

/// Links an occupied cell back to the ship covering it. Every cell of a run
/// carries a copy, so sink checks never search the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipBody {
    pub ship: Ship,
    pub origin: Position,
    pub direction: Direction,
}

impl ShipBody {
    /// Cells of the ship's run, starting at the origin.
    pub fn run(&self) -> impl Iterator<Item = Position> {
        let origin = self.origin;
        let direction = self.direction;
        (0..self.ship.size()).map(move |offset| origin.offset(direction, offset))
    }
}

/// One square of a grid.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    kind: CellKind,
    body: Option<ShipBody>,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            kind: CellKind::Water,
            body: None,
        }
    }
}

impl Cell {
    /// Current state of the cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Ship record for occupied cells, `None` over open water.
    pub fn body(&self) -> Option<&ShipBody> {
        self.body.as_ref()
    }

    /// Whether an attack here would change the cell.
    pub fn is_attackable(&self) -> bool {
        self.kind.is_attackable()
    }

    pub(crate) fn place_ship(&mut self, ship: Ship, origin: Position, direction: Direction) {
        self.body = Some(ShipBody {
            ship,
            origin,
            direction,
        });
        self.kind = CellKind::Ship;
    }

    /// Apply the attack transition. Returns the new kind and whether the
    /// cell changed (`false` when it was attacked before).
    pub(crate) fn attack(&mut self) -> (CellKind, bool) {
        let attacked = self.kind.attacked();
        let changed = attacked != self.kind;
        self.kind = attacked;
        (attacked, changed)
    }
}
