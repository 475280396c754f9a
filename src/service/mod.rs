// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maze handlers shared by the HTTP and MCP surfaces.
//!
//! [`MazeService`] owns the catalog (optionally persisted to a [`MazeFolder`]) and a
//! [`GridCache`]. The engine itself stays pure; this layer does the lookups, locking and
//! persistence around it.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::format::grid::{normalize, split_definition, GridError};
use crate::model::{CellKind, Grid, Maze, MazeId, MazeName, NameError, Position};
use crate::query::{available_moves, reachable_from, MoveError, MoveOutcome};
use crate::store::{CatalogError, GridCache, MazeCatalog, MazeFolder, StoreError};
use crate::validate::{check, ValidationFailure, ValidationOutcome};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_MAX_ROWS: usize = 256;
pub const DEFAULT_MAX_COLS: usize = 256;

/// Upper bound on accepted upload dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_cols: DEFAULT_MAX_COLS,
        }
    }
}

impl GridLimits {
    /// Checks the dimensions the normalizer would produce for `lines`.
    fn check(&self, lines: &[&str]) -> Result<(), ServiceError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows > self.max_rows || cols > self.max_cols {
            return Err(ServiceError::TooLarge { rows, cols, limits: *self });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// How long a navigated grid stays cached.
    pub cache_ttl: Duration,
    pub limits: GridLimits,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            limits: GridLimits::default(),
        }
    }
}

/// How a transport should surface a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    InvalidInput,
    NotFound,
    Internal,
}

#[derive(Debug)]
pub enum ServiceError {
    InvalidName(NameError),
    EmptyUpload,
    TooLarge {
        rows: usize,
        cols: usize,
        limits: GridLimits,
    },
    Rejected(ValidationFailure),
    NotFound(MazeId),
    Move(MoveError),
    CorruptDefinition {
        id: MazeId,
        source: GridError,
    },
    Catalog(CatalogError),
    Store(StoreError),
    SaveTask(tokio::task::JoinError),
}

impl ServiceError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidName(_)
            | Self::EmptyUpload
            | Self::TooLarge { .. }
            | Self::Rejected(_)
            | Self::Move(_) => ErrorClass::InvalidInput,
            Self::NotFound(_) => ErrorClass::NotFound,
            Self::CorruptDefinition { .. }
            | Self::Catalog(_)
            | Self::Store(_)
            | Self::SaveTask(_) => ErrorClass::Internal,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(err) => write!(f, "{err}"),
            Self::EmptyUpload => f.write_str("File is not uploaded"),
            Self::TooLarge { rows, cols, limits } => write!(
                f,
                "Maze is too large: {rows}x{cols} exceeds the {}x{} limit.",
                limits.max_rows, limits.max_cols
            ),
            Self::Rejected(failure) => write!(f, "{failure}"),
            Self::NotFound(id) => write!(f, "Maze {id} not found."),
            Self::Move(err) => write!(f, "{err}"),
            Self::CorruptDefinition { id, source } => {
                write!(f, "stored definition of maze {id} is unusable: {source}")
            }
            Self::Catalog(err) => write!(f, "catalog error: {err}"),
            Self::Store(err) => write!(f, "store error: {err}"),
            Self::SaveTask(err) => write!(f, "maze save task failed: {err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidName(err) => Some(err),
            Self::Rejected(err) => Some(err),
            Self::Move(err) => Some(err),
            Self::CorruptDefinition { source, .. } => Some(source),
            Self::Catalog(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::SaveTask(err) => Some(err),
            Self::EmptyUpload | Self::TooLarge { .. } | Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<ValidationFailure> for ServiceError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Rejected(failure)
    }
}

impl From<MoveError> for ServiceError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

#[derive(Clone)]
pub struct MazeService {
    catalog: Arc<Mutex<MazeCatalog>>,
    maze_folder: Option<Arc<MazeFolder>>,
    cache: GridCache,
    config: ServiceConfig,
}

impl MazeService {
    /// An in-memory service; records are lost when the process exits.
    pub fn new(catalog: MazeCatalog, config: ServiceConfig) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            maze_folder: None,
            cache: GridCache::new(),
            config,
        }
    }

    pub fn new_persistent(
        catalog: MazeCatalog,
        maze_folder: MazeFolder,
        config: ServiceConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            maze_folder: Some(Arc::new(maze_folder)),
            cache: GridCache::new(),
            config,
        }
    }

    /// Loads (or initializes) `maze_folder` and serves from it.
    pub fn open(maze_folder: MazeFolder, config: ServiceConfig) -> Result<Self, StoreError> {
        let catalog = maze_folder.load_or_init_catalog()?;
        tracing::info!(
            root = %maze_folder.root().display(),
            mazes = catalog.len(),
            "maze folder loaded"
        );
        Ok(Self::new_persistent(catalog, maze_folder, config))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn cache(&self) -> &GridCache {
        &self.cache
    }

    /// Validates and stores an uploaded definition.
    ///
    /// The raw text is stored as-is; lines are only split for validation.
    pub async fn create_maze(&self, name: &str, definition: &str) -> Result<Maze, ServiceError> {
        if definition.is_empty() {
            return Err(ServiceError::EmptyUpload);
        }
        let name = MazeName::new(name).map_err(ServiceError::InvalidName)?;
        let lines = split_definition(definition);

        let mut catalog = self.catalog.lock().await;
        let name_exists = catalog.contains_name(name.as_str());
        if !name_exists {
            self.config.limits.check(&lines)?;
        }
        let grid = check(&lines, name_exists).map_err(|failure| {
            tracing::info!(maze = %name, reason = failure.reason(), "maze upload rejected");
            if failure == ValidationFailure::Unsolvable {
                log_reachable_area(&lines);
            }
            ServiceError::Rejected(failure)
        })?;

        let maze = catalog.allocate(name, definition);
        if let Some(maze_folder) = &self.maze_folder {
            let mut candidate = catalog.clone();
            candidate.insert(maze.clone()).map_err(ServiceError::Catalog)?;
            // Filesystem writes stay off the async workers; the lock keeps ids in order.
            let maze_folder = Arc::clone(maze_folder);
            *catalog = tokio::task::spawn_blocking(move || {
                maze_folder.save_catalog(&candidate).map(|()| candidate)
            })
            .await
            .map_err(ServiceError::SaveTask)??;
        } else {
            catalog.insert(maze.clone()).map_err(ServiceError::Catalog)?;
        }
        drop(catalog);

        tracing::info!(
            maze_id = maze.id().get(),
            maze = %maze.name(),
            rows = grid.rows(),
            cols = grid.cols(),
            "maze created"
        );
        self.cache.put(maze.id(), Arc::new(grid), self.config.cache_ttl);
        Ok(maze)
    }

    /// Runs validation without storing anything.
    pub async fn validate_maze(
        &self,
        name: &str,
        definition: &str,
    ) -> Result<ValidationOutcome, ServiceError> {
        let name = MazeName::new(name).map_err(ServiceError::InvalidName)?;
        let lines = split_definition(definition);

        // A reused name is reported ahead of the size limits.
        let name_exists = self.catalog.lock().await.contains_name(name.as_str());
        if !name_exists {
            self.config.limits.check(&lines)?;
        }
        Ok(check(&lines, name_exists).into())
    }

    /// Every stored maze, ordered by id.
    pub async fn list_mazes(&self) -> Vec<Maze> {
        self.catalog.lock().await.iter().cloned().collect()
    }

    pub async fn get_maze(&self, id: MazeId) -> Result<Maze, ServiceError> {
        self.catalog.lock().await.get(id).cloned().ok_or(ServiceError::NotFound(id))
    }

    /// The normalized grid of a stored maze, served from the cache when fresh.
    pub async fn grid(&self, id: MazeId) -> Result<Arc<Grid>, ServiceError> {
        if let Some(grid) = self.cache.get(id) {
            tracing::debug!(maze_id = id.get(), "grid cache hit");
            return Ok(grid);
        }

        let definition = {
            let catalog = self.catalog.lock().await;
            let maze = catalog.get(id).ok_or(ServiceError::NotFound(id))?;
            maze.definition().to_owned()
        };

        tracing::debug!(maze_id = id.get(), "grid cache miss");
        let lines = split_definition(&definition);
        let grid = Arc::new(
            normalize(&lines).map_err(|source| ServiceError::CorruptDefinition { id, source })?,
        );
        self.cache.put(id, grid.clone(), self.config.cache_ttl);
        Ok(grid)
    }

    /// Legal moves for a player standing at row `x`, column `y` of maze `id`.
    pub async fn available_moves(
        &self,
        id: MazeId,
        x: i64,
        y: i64,
    ) -> Result<MoveOutcome, ServiceError> {
        let grid = self.grid(id).await?;
        let Some(position) = Position::from_signed(x, y) else {
            return Err(MoveError::out_of_bounds(x, y, &grid).into());
        };
        let outcome = available_moves(&grid, position)?;
        if outcome.finished {
            tracing::info!(maze_id = id.get(), row = x, col = y, "exit reached");
        }
        Ok(outcome)
    }
}

/// How much of an unsolvable upload the entry can actually reach.
fn log_reachable_area(lines: &[&str]) {
    let Ok(grid) = normalize(lines) else {
        return;
    };
    let Some(entry) = grid.find(CellKind::Entry) else {
        return;
    };
    let open = grid.len() - grid.count(CellKind::Wall);
    tracing::debug!(
        reachable = reachable_from(&grid, entry).len(),
        open,
        "exit not reachable from entry"
    );
}
