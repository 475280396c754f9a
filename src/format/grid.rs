// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{CellKind, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// No lines, or a zero-length first line.
    Empty,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze definition is empty"),
        }
    }
}

impl std::error::Error for GridError {}

/// Splits uploaded definition text into lines.
///
/// Both `\r` and `\n` terminate a line and empty pieces are dropped, so CRLF, LF and blank
/// separator lines all yield the same result.
pub fn split_definition(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr::memchr2_iter(b'\r', b'\n', bytes) {
        if end > start {
            lines.push(&text[start..end]);
        }
        start = end + 1;
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Builds a rectangular grid from definition lines.
///
/// The first line fixes the column count. Shorter lines are right-padded with walls and
/// longer lines are truncated to that width.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> Result<Grid, GridError> {
    let Some(first) = lines.first() else {
        return Err(GridError::Empty);
    };
    let cols = first.as_ref().chars().count();
    if cols == 0 {
        return Err(GridError::Empty);
    }

    let rows = lines.len();
    let mut cells = Vec::with_capacity(rows * cols);
    for line in lines {
        let before = cells.len();
        cells.extend(line.as_ref().chars().take(cols).map(CellKind::from_char));
        cells.resize(before + cols, CellKind::Wall);
    }

    Ok(Grid::from_cells(rows, cols, cells))
}
