// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A maze record carries its raw definition text; the enum-typed [`Grid`] is derived from that
//! text on demand and never mutated.

pub mod cell;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod ids;
pub mod maze;

pub use cell::CellKind;
pub use grid::{Direction, Grid, Position};
pub use ids::{MazeId, MazeName, NameError, ParseMazeIdError};
pub use maze::Maze;
