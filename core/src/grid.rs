use core::ops::Index;
use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Positions returned by a neighbour query, at most 8.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// Fixed-size board of cells stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDifficulty);
        }
        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
        })
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Cells in the 3x3 block around `coords`, excluding the center and anything outside the board.
    ///
    /// `include_uncovered = false` drops cells that are already uncovered, `include_flagged = false` drops flagged
    /// ones.
    pub fn neighbors(
        &self,
        coords: Coord2,
        include_uncovered: bool,
        include_flagged: bool,
    ) -> Neighbors {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| {
                let cell = &self[pos];
                (include_uncovered || !cell.is_uncovered()) && (include_flagged || !cell.is_flagged())
            })
            .collect()
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.positions().filter(|&pos| self[pos].is_mine())
    }

    /// Marks `coords` as a mine and bumps the mine count of its whole neighbourhood.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        if !self.cell_mut(coords).set_mine() {
            return false;
        }
        for pos in self.cells.iter_neighbors(coords) {
            self.cell_mut(pos).add_adjacent_mine();
        }
        true
    }

    /// Sets or clears a flag and keeps the neighbours' flag counters in step.
    pub(crate) fn set_flag(&mut self, coords: Coord2, flagged: bool) -> bool {
        if !self.cell_mut(coords).set_flagged(flagged) {
            return false;
        }
        for pos in self.cells.iter_neighbors(coords) {
            let cell = self.cell_mut(pos);
            if flagged {
                cell.add_adjacent_flag();
            } else {
                cell.remove_adjacent_flag();
            }
        }
        true
    }

    pub(crate) fn uncover(&mut self, coords: Coord2) -> bool {
        self.cell_mut(coords).uncover()
    }

    pub(crate) fn expose_mines(&mut self) {
        self.cells.iter_mut().for_each(Cell::expose);
    }

    fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
