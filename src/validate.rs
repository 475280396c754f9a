// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural validation of uploaded maze definitions.
//!
//! Checks run in a fixed order and stop at the first failure, so callers always see the
//! structural errors before the reachability search runs:
//!
//! 1. duplicate name
//! 2. exactly one entry
//! 3. exactly one exit
//! 4. at least one floor cell
//! 5. exit reachable from entry

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::grid::{normalize, GridError};
use crate::model::{CellKind, Grid};
use crate::query::is_solvable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralViolation {
    EntryCount { found: usize },
    ExitCount { found: usize },
    NoFloor,
}

impl StructuralViolation {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EntryCount { .. } => "Maze must have exactly one entry point.",
            Self::ExitCount { .. } => "Maze must have exactly one exit point.",
            Self::NoFloor => "Maze must have at least one path.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    DuplicateName,
    EmptyInput,
    Structural(StructuralViolation),
    Unsolvable,
}

impl ValidationFailure {
    /// The user-facing reason string.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DuplicateName => "Maze with the same name already exists.",
            Self::EmptyInput => "Maze definition is empty.",
            Self::Structural(violation) => violation.reason(),
            Self::Unsolvable => "Maze is not solvable.",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for ValidationFailure {}

impl From<GridError> for ValidationFailure {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Empty => Self::EmptyInput,
        }
    }
}

impl From<StructuralViolation> for ValidationFailure {
    fn from(violation: StructuralViolation) -> Self {
        Self::Structural(violation)
    }
}

/// Result of a validation request as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self { ok: true, reason: None }
    }

    pub fn failure(failure: ValidationFailure) -> Self {
        Self { ok: false, reason: Some(failure.reason().to_owned()) }
    }
}

impl<T> From<Result<T, ValidationFailure>> for ValidationOutcome {
    fn from(result: Result<T, ValidationFailure>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(failure) => Self::failure(failure),
        }
    }
}

/// Counts markers on an already normalized grid.
pub fn check_structure(grid: &Grid) -> Result<(), StructuralViolation> {
    let entries = grid.count(CellKind::Entry);
    if entries != 1 {
        return Err(StructuralViolation::EntryCount { found: entries });
    }

    let exits = grid.count(CellKind::Exit);
    if exits != 1 {
        return Err(StructuralViolation::ExitCount { found: exits });
    }

    if grid.count(CellKind::Floor) == 0 {
        return Err(StructuralViolation::NoFloor);
    }

    Ok(())
}

/// Runs every check and hands back the normalized grid on success.
pub fn check<S: AsRef<str>>(
    raw_lines: &[S],
    name_exists: bool,
) -> Result<Grid, ValidationFailure> {
    if name_exists {
        return Err(ValidationFailure::DuplicateName);
    }

    let grid = normalize(raw_lines)?;
    check_structure(&grid)?;

    if !is_solvable(&grid) {
        return Err(ValidationFailure::Unsolvable);
    }

    Ok(grid)
}

/// Validates a named definition.
///
/// `name` is carried for diagnostics only; uniqueness is decided by the caller and passed in
/// as `name_exists`.
pub fn validate<S: AsRef<str>>(name: &str, raw_lines: &[S], name_exists: bool) -> ValidationOutcome {
    let result = check(raw_lines, name_exists);
    if let Err(failure) = &result {
        tracing::debug!(maze = name, reason = failure.reason(), "maze definition rejected");
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::{check, validate, StructuralViolation, ValidationFailure, ValidationOutcome};
    use crate::model::fixtures;

    #[test]
    fn valid_maze_succeeds_without_reason() {
        let outcome = validate("Valid Maze", fixtures::OPEN_ROOM, false);
        assert_eq!(outcome, ValidationOutcome { ok: true, reason: None });
    }

    #[test]
    fn duplicate_name_wins_over_everything() {
        let none: [&str; 0] = [];
        let outcome = validate("Maze1", &none, true);
        assert!(!outcome.ok);
        assert_eq!(outcome.reason.as_deref(), Some("Maze with the same name already exists."));
    }

    #[test]
    fn unsolvable_maze_is_reported() {
        let outcome = validate("Valid Maze", fixtures::WALLED_OFF, false);
        assert_eq!(outcome.reason.as_deref(), Some("Maze is not solvable."));
    }

    #[test]
    fn missing_entry_is_reported_first() {
        let outcome = validate("Valid Maze", fixtures::NO_ENTRY, false);
        assert_eq!(outcome.reason.as_deref(), Some("Maze must have exactly one entry point."));
    }

    #[test]
    fn two_entries_are_rejected_before_solving() {
        // Also unsolvable, but the entry count is checked first.
        let result = check(&["SXE", "XXX", "SXX"], false);
        assert_eq!(
            result.unwrap_err(),
            ValidationFailure::Structural(StructuralViolation::EntryCount { found: 2 })
        );
    }

    #[test]
    fn missing_exit_is_reported() {
        let outcome = validate("Valid Maze", &["OOOO", "XXXXX", "OOSO", "OOOO"], false);
        assert_eq!(outcome.reason.as_deref(), Some("Maze must have exactly one exit point."));
    }

    #[test]
    fn two_exits_are_rejected() {
        let result = check(&["SOE", "OOE"], false);
        assert_eq!(
            result.unwrap_err(),
            ValidationFailure::Structural(StructuralViolation::ExitCount { found: 2 })
        );
    }

    #[test]
    fn floorless_maze_is_rejected_even_if_adjacent() {
        let outcome = validate("Tiny", &["SE"], false);
        assert_eq!(outcome.reason.as_deref(), Some("Maze must have at least one path."));
    }

    #[test]
    fn markers_beyond_the_first_row_width_are_ignored() {
        // The second entry sits past column 4 and is truncated away.
        let grid = check(&["SOOO", "OOEOS"], false).unwrap();
        assert_eq!(grid.cols(), 4);
    }

    #[test]
    fn empty_definition_has_its_own_reason() {
        let none: [&str; 0] = [];
        let outcome = validate("Empty", &none, false);
        assert_eq!(outcome.reason.as_deref(), Some("Maze definition is empty."));
    }

    #[test]
    fn lower_case_definition_validates() {
        let grid = check(&["sooo", "oooo", "ooeo"], false).unwrap();
        assert_eq!(grid.rows(), 3);
    }
}
