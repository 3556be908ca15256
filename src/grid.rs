//! One side's board: cell storage, placement validation, attack state.

use rand::Rng;

use crate::cell::{Cell, CellKind};
use crate::geometry::{Dimension, Direction, Position};
use crate::ship::Ship;

/// A fixed-size board of cells owned by one side. The opponent attacks it;
/// the owner never does.
#[derive(Debug, Clone)]
pub struct Grid {
    dim: Dimension,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-water grid of `width` by `height` cells.
    pub fn new(width: i32, height: i32) -> Grid {
        Grid {
            dim: Dimension::new(width, height),
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    /// Grid extents.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        self.dim.contains(pos)
    }

    // row-major; callers must bounds-check first
    fn index(&self, pos: Position) -> usize {
        (pos.y * self.dim.width + pos.x) as usize
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            self.cells.get(self.index(pos))
        } else {
            None
        }
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            let index = self.index(pos);
            self.cells.get_mut(index)
        } else {
            None
        }
    }

    /// Kind of the cell at `pos`, or `None` outside the grid.
    pub fn kind(&self, pos: Position) -> Option<CellKind> {
        self.cell(pos).map(|cell| cell.kind())
    }

    /// Whether the cell at `pos` is exactly `kind`. Positions off the grid
    /// match nothing.
    pub fn is_kind(&self, pos: Position, kind: CellKind) -> bool {
        self.kind(pos) == Some(kind)
    }

    /// Whether an attack at `pos` would change the cell.
    pub fn is_attackable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_attackable())
    }

    /// Uniformly random position on the grid.
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.dim.width),
            rng.random_range(0..self.dim.height),
        )
    }

    /// Write a ship's run onto the grid, recording the back-reference on
    /// every covered cell. The placement must have been validated with
    /// [`Grid::valid_directions`]; this performs no checks of its own.
    pub fn place_ship(&mut self, ship: Ship, origin: Position, direction: Direction) {
        let mut pos = origin;
        for _ in 0..ship.size() {
            let index = self.index(pos);
            self.cells[index].place_ship(ship, origin, direction);
            pos = pos.step(direction);
        }
    }

    /// Directions in which a ship of `size` starting at `pos` would stay in
    /// bounds and keep a one-cell buffer from every other ship.
    pub fn valid_directions(&self, pos: Position, size: i32) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_valid_placement(pos, direction, size))
            .collect()
    }

    fn is_valid_placement(&self, pos: Position, direction: Direction, size: i32) -> bool {
        if !self.contains(pos) || !self.contains(pos.offset(direction, size - 1)) {
            return false;
        }
        let mut current = pos;
        for _ in 0..size {
            if !self.cell_and_neighbors_free(current) {
                return false;
            }
            current = current.step(direction);
        }
        true
    }

    /// True when neither `pos` nor any of its eight neighbors carries a ship.
    fn cell_and_neighbors_free(&self, pos: Position) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let neighbor = Position::new(pos.x + dx, pos.y + dy);
                if self.is_kind(neighbor, CellKind::Ship) {
                    return false;
                }
            }
        }
        true
    }

    /// Apply the attack transition at `pos`. Returns the resulting kind and
    /// whether the cell changed, or `None` outside the grid.
    pub fn attack(&mut self, pos: Position) -> Option<(CellKind, bool)> {
        self.cell_mut(pos).map(|cell| cell.attack())
    }

    /// Whether the ship covering `pos` has its whole run attacked. Positions
    /// not holding an attacked ship cell report `false`.
    pub fn is_ship_sunk(&self, pos: Position) -> bool {
        let Some(cell) = self.cell(pos) else {
            return false;
        };
        if cell.kind() != CellKind::AttackedShip {
            return false;
        }
        let Some(body) = cell.body() else {
            return false;
        };
        body.run().all(|run_pos| !self.is_kind(run_pos, CellKind::Ship))
    }

    /// Read-only view for renderers.
    pub fn view(&self) -> GridView<'_> {
        GridView { grid: self }
    }
}

/// Borrowed, render-facing view of a grid: kinds only, no mutation.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl GridView<'_> {
    /// Grid extents.
    pub fn dimension(&self) -> Dimension {
        self.grid.dimension()
    }

    /// Kind of the cell at (`x`, `y`). Off-grid coordinates read as water.
    pub fn kind(&self, x: i32, y: i32) -> CellKind {
        self.grid
            .kind(Position::new(x, y))
            .unwrap_or(CellKind::Water)
    }
}
