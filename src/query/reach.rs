// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{CellKind, Direction, Grid, Position};

/// Neighbor exploration order of the search: right, down, left, up.
///
/// The stack pops in reverse push order, so this is pushed back to front.
const EXPLORE_ORDER: [Direction; 4] =
    [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

/// A visited-cell set over one grid, indexed row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    cols: usize,
    bits: Vec<bool>,
}

impl CellSet {
    fn new(grid: &Grid) -> Self {
        Self { cols: grid.cols(), bits: vec![false; grid.len()] }
    }

    pub fn contains(&self, position: Position) -> bool {
        if position.col >= self.cols {
            return false;
        }
        self.bits.get(position.row * self.cols + position.col).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&bit| bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(move |(index, _)| Position::new(index / cols, index % cols))
    }
}

struct Search<'a> {
    grid: &'a Grid,
    visited: Vec<bool>,
    reached: CellSet,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid) -> Self {
        // Walls start out visited so they are never entered.
        let visited = grid.cells().iter().map(|cell| cell.is_wall()).collect();
        Self { grid, visited, reached: CellSet::new(grid) }
    }

    /// Depth-first walk from `start`; stops early when `target` is popped.
    ///
    /// Returns whether a cell of kind `target` was reached.
    fn run(&mut self, start: Position, target: Option<CellKind>) -> bool {
        let mut stack = vec![start];

        while let Some(position) = stack.pop() {
            let Some(index) = self.grid.index_of(position) else {
                continue;
            };
            if self.visited[index] {
                continue;
            }
            self.visited[index] = true;
            self.reached.bits[index] = true;

            if target.is_some_and(|kind| self.grid.cells()[index] == kind) {
                return true;
            }

            for direction in EXPLORE_ORDER.iter().rev() {
                if let Some(next) = self.grid.neighbor(position, *direction) {
                    if self.grid.index_of(next).is_some_and(|next| !self.visited[next]) {
                        stack.push(next);
                    }
                }
            }
        }

        false
    }
}

/// Whether the exit can be reached from the entry through non-wall cells.
///
/// A grid without an entry is not solvable. Each cell is visited at most once.
pub fn is_solvable(grid: &Grid) -> bool {
    let Some(entry) = grid.find(CellKind::Entry) else {
        return false;
    };
    Search::new(grid).run(entry, Some(CellKind::Exit))
}

/// Every non-wall cell 4-connected to `start`.
///
/// Empty when `start` is outside the grid or is a wall.
pub fn reachable_from(grid: &Grid, start: Position) -> CellSet {
    let mut search = Search::new(grid);
    search.run(start, None);
    search.reached
}
