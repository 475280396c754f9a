// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{MazeId, MazeName};

/// A persisted maze record.
///
/// `definition` is the raw text exactly as uploaded (line endings included); grids are derived
/// from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    id: MazeId,
    name: MazeName,
    definition: String,
}

impl Maze {
    pub fn new(id: MazeId, name: MazeName, definition: impl Into<String>) -> Self {
        Self { id, name, definition: definition.into() }
    }

    pub fn id(&self) -> MazeId {
        self.id
    }

    pub fn name(&self) -> &MazeName {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}
