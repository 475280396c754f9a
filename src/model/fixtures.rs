// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::grid::Grid;
use crate::format::grid::normalize;

/// Open 4x4 room, entry top-left, exit at (2, 2).
pub(crate) const OPEN_ROOM: &[&str] = &["SOOO", "OOOO", "OOEO", "OOOO"];

/// Entry row cut off from the exit by a full wall row.
pub(crate) const WALLED_OFF: &[&str] = &["SOOO", "XXXX", "OOEO", "OOOO"];

/// No entry marker at all.
pub(crate) const NO_ENTRY: &[&str] = &["OOOO", "XXXX", "OOEO", "OOOO"];

/// A winding corridor that doubles back on itself.
pub(crate) const SERPENTINE: &[&str] = &[
    "SOOOOX",
    "XXXXOX",
    "OOOOOX",
    "OXXXXX",
    "OOOOOE",
];

/// Ragged rows; the short ones are padded with walls.
pub(crate) const RAGGED: &[&str] = &["SOOO", "O", "OOEO"];

pub(crate) fn grid(lines: &[&str]) -> Grid {
    normalize(lines).expect("fixture grid")
}

pub(crate) fn definition(lines: &[&str]) -> String {
    lines.join("\n")
}
