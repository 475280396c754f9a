// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over grids.
//!
//! Queries are pure functions of their inputs; they power validation and navigation.

pub mod moves;
pub mod reach;

pub use moves::{available_moves, DirectionSet, MoveError, MoveOutcome};
pub use reach::{is_solvable, reachable_from, CellSet};
