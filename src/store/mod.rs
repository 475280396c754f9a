// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maze persistence and caching.
//!
//! [`MazeCatalog`] is the in-memory index of records, [`MazeFolder`] reads/writes it on disk
//! (meta file plus one definition file per maze) and [`GridCache`] keeps recently navigated
//! grids for a bounded time.

pub mod cache;
pub mod catalog;
pub mod maze_folder;

pub use cache::GridCache;
pub use catalog::{CatalogError, MazeCatalog};
pub use maze_folder::{MazeFolder, MazeMeta, MazeMetaEntry, StoreError, WriteDurability};
