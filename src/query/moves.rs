// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use crate::model::{CellKind, Direction, Grid, Position};

/// Available directions, in [`Direction::ALL`] order.
pub type DirectionSet = SmallVec<[Direction; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub finished: bool,
    pub available_directions: DirectionSet,
}

impl MoveOutcome {
    fn finished() -> Self {
        Self { finished: true, available_directions: DirectionSet::new() }
    }

    pub fn allows(&self, direction: Direction) -> bool {
        self.available_directions.contains(&direction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    PositionOutOfBounds { row: i64, col: i64, rows: usize, cols: usize },
}

impl MoveError {
    pub(crate) fn out_of_bounds(row: i64, col: i64, grid: &Grid) -> Self {
        Self::PositionOutOfBounds { row, col, rows: grid.rows(), cols: grid.cols() }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfBounds { row, col, rows, cols } => write!(
                f,
                "position ({row}, {col}) is outside the {rows}x{cols} maze"
            ),
        }
    }
}

impl std::error::Error for MoveError {}

/// Legal single-step moves from `position`.
///
/// Standing on the exit is terminal: the outcome is finished with no directions, whatever
/// surrounds it. Otherwise every in-bounds neighbor that is not a wall is available.
pub fn available_moves(grid: &Grid, position: Position) -> Result<MoveOutcome, MoveError> {
    let Some(cell) = grid.get(position) else {
        return Err(MoveError::out_of_bounds(
            i64::try_from(position.row).unwrap_or(i64::MAX),
            i64::try_from(position.col).unwrap_or(i64::MAX),
            grid,
        ));
    };

    if cell == CellKind::Exit {
        return Ok(MoveOutcome::finished());
    }

    let available_directions = Direction::ALL
        .into_iter()
        .filter(|&direction| {
            grid.neighbor(position, direction)
                .and_then(|next| grid.get(next))
                .is_some_and(|next| !next.is_wall())
        })
        .collect();

    Ok(MoveOutcome { finished: false, available_directions })
}
