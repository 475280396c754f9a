// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::catalog::{CatalogError, MazeCatalog};
use crate::model::{Maze, MazeId, MazeName, NameError};

const META_FILE: &str = "mazeway.meta.json";
const MAZES_DIR: &str = "mazes";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidName {
        id: MazeId,
        value: String,
        source: NameError,
    },
    Catalog {
        path: PathBuf,
        source: CatalogError,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl StoreError {
    /// Whether the underlying io error is "no such file".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot access {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "malformed maze meta file {}: {source}", path.display())
            }
            Self::InvalidName { id, value, source } => {
                write!(f, "stored maze {id} has an invalid name {value:?}: {source}")
            }
            Self::Catalog { path, source } => {
                write!(f, "maze meta file {} is inconsistent: {source}", path.display())
            }
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write maze files through symlink {}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidName { source, .. } => Some(source),
            Self::Catalog { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

/// Contents of `mazeway.meta.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMeta {
    pub next_id: u64,
    pub mazes: Vec<MazeMetaEntry>,
}

/// One stored maze; its definition lives at [`MazeFolder::definition_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMetaEntry {
    pub id: MazeId,
    pub name: MazeName,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Temp file plus rename, no fsync.
    #[default]
    BestEffort,
    /// Also fsyncs each written file and the directory holding it.
    Durable,
}

/// A directory holding persisted maze records.
///
/// Layout:
///
/// ```text
/// <root>/mazeway.meta.json      next id plus id and name of every maze
/// <root>/mazes/<id>.maze.txt    raw definition text as uploaded
/// ```
#[derive(Debug, Clone)]
pub struct MazeFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl MazeFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta_path(&self) -> PathBuf {
        self.root.join(META_FILE)
    }

    pub fn mazes_dir(&self) -> PathBuf {
        self.root.join(MAZES_DIR)
    }

    pub fn definition_path(&self, id: MazeId) -> PathBuf {
        self.mazes_dir().join(definition_file_name(id))
    }

    /// Loads the catalog, writing an empty one first if the meta file does not exist yet.
    pub fn load_or_init_catalog(&self) -> Result<MazeCatalog, StoreError> {
        match self.load_meta() {
            Ok(meta) => self.catalog_from_meta(meta),
            Err(err) if err.is_not_found() => {
                let catalog = MazeCatalog::new();
                self.save_catalog(&catalog)?;
                Ok(catalog)
            }
            Err(err) => Err(err),
        }
    }

    pub fn load_catalog(&self) -> Result<MazeCatalog, StoreError> {
        let meta = self.load_meta()?;
        self.catalog_from_meta(meta)
    }

    fn catalog_from_meta(&self, meta: MazeMeta) -> Result<MazeCatalog, StoreError> {
        let mut catalog = MazeCatalog::new();
        for entry in meta.mazes {
            let path = self.definition_path(entry.id);
            let definition = fs::read_to_string(&path).map_err(io_error_at(&path))?;
            catalog
                .insert(Maze::new(entry.id, entry.name, definition))
                .map_err(|source| StoreError::Catalog {
                    path: self.meta_path(),
                    source,
                })?;
        }
        catalog.set_next_id(meta.next_id);
        Ok(catalog)
    }

    /// Persists `catalog`: definitions of records not on disk yet, then the meta file.
    ///
    /// Records are immutable, so a definition file listed in the current meta file is
    /// never rewritten.
    pub fn save_catalog(&self, catalog: &MazeCatalog) -> Result<(), StoreError> {
        let stored: BTreeSet<MazeId> = match self.load_meta() {
            Ok(meta) => meta.mazes.iter().map(|entry| entry.id).collect(),
            Err(err) if err.is_not_found() => BTreeSet::new(),
            Err(err) => return Err(err),
        };

        let pending: Vec<&Maze> = catalog
            .iter()
            .filter(|maze| {
                !(stored.contains(&maze.id()) && self.definition_path(maze.id()).is_file())
            })
            .collect();

        if !pending.is_empty() {
            let mazes_dir = self.ensure_mazes_dir()?;
            for maze in pending {
                self.replace_file(
                    &mazes_dir,
                    &definition_file_name(maze.id()),
                    maze.definition().as_bytes(),
                )?;
            }
        }

        self.save_meta(&MazeMeta {
            next_id: catalog.next_id().get(),
            mazes: catalog
                .iter()
                .map(|maze| MazeMetaEntry {
                    id: maze.id(),
                    name: maze.name().clone(),
                })
                .collect(),
        })
    }

    pub fn load_meta(&self) -> Result<MazeMeta, StoreError> {
        let path = self.meta_path();
        let text = fs::read_to_string(&path).map_err(io_error_at(&path))?;
        let json: MetaJson =
            serde_json::from_str(&text).map_err(|source| StoreError::Json { path, source })?;
        json.into_meta()
    }

    pub fn save_meta(&self, meta: &MazeMeta) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(io_error_at(&self.root))?;
        let json = MetaJson::from_meta(meta);
        let mut text = serde_json::to_string_pretty(&json).map_err(|source| StoreError::Json {
            path: self.meta_path(),
            source,
        })?;
        text.push('\n');
        self.replace_file(&self.root, META_FILE, text.as_bytes())
    }
}

// Meta file json shape and the temp-and-rename writer.
include!("maze_folder/helpers.rs");
