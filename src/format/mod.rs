// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maze definition text format.
//!
//! A definition is line-based text using `S` (entry), `E` (exit), `O` (floor) and `X` (wall).

pub mod grid;

pub use grid::{normalize, split_definition, GridError};
