// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Maze, MazeId, MazeName};

/// In-memory index of maze records, keyed by id with a unique-name constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeCatalog {
    mazes: BTreeMap<MazeId, Maze>,
    names: BTreeMap<MazeName, MazeId>,
    next_id: u64,
}

impl Default for MazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId(MazeId),
    DuplicateName(MazeName),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "maze id {id} already exists"),
            Self::DuplicateName(name) => write!(f, "maze name {:?} already exists", name.as_str()),
        }
    }
}

impl std::error::Error for CatalogError {}

impl MazeCatalog {
    pub fn new() -> Self {
        Self { mazes: BTreeMap::new(), names: BTreeMap::new(), next_id: 1 }
    }

    pub fn len(&self) -> usize {
        self.mazes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mazes.is_empty()
    }

    /// The id the next [`MazeCatalog::allocate`] call will hand out.
    pub fn next_id(&self) -> MazeId {
        MazeId::new(self.next_id)
    }

    pub(crate) fn set_next_id(&mut self, next_id: u64) {
        self.next_id = self.next_id.max(next_id);
    }

    pub fn get(&self, id: MazeId) -> Option<&Maze> {
        self.mazes.get(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Maze> {
        self.names.get(name).and_then(|id| self.mazes.get(id))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Records ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Maze> {
        self.mazes.values()
    }

    /// Builds a record with a fresh id without inserting it.
    ///
    /// The id counter only advances on [`MazeCatalog::insert`], so a failed persist does not
    /// burn an id.
    pub fn allocate(&self, name: MazeName, definition: impl Into<String>) -> Maze {
        Maze::new(self.next_id(), name, definition)
    }

    pub fn insert(&mut self, maze: Maze) -> Result<(), CatalogError> {
        if self.mazes.contains_key(&maze.id()) {
            return Err(CatalogError::DuplicateId(maze.id()));
        }
        if self.names.contains_key(maze.name().as_str()) {
            return Err(CatalogError::DuplicateName(maze.name().clone()));
        }

        self.next_id = self.next_id.max(maze.id().get().saturating_add(1));
        self.names.insert(maze.name().clone(), maze.id());
        self.mazes.insert(maze.id(), maze);
        Ok(())
    }
}
