// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// The kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    Floor,
    #[default]
    Wall,
    Entry,
    Exit,
}

impl CellKind {
    /// Maps a definition character to a cell kind.
    ///
    /// Matching is case-insensitive. Anything that is not a known marker is a wall.
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_uppercase() {
            'S' => Self::Entry,
            'E' => Self::Exit,
            'O' => Self::Floor,
            _ => Self::Wall,
        }
    }

    /// The canonical (upper-case) marker for this kind.
    pub fn as_char(self) -> char {
        match self {
            Self::Floor => 'O',
            Self::Wall => 'X',
            Self::Entry => 'S',
            Self::Exit => 'E',
        }
    }

    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }
}
