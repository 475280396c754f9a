// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::model::{Grid, MazeId};

#[derive(Debug)]
struct CacheEntry {
    grid: Arc<Grid>,
    expires_at: Instant,
}

/// Time-bounded cache of normalized grids keyed by maze id.
///
/// Clones share the same underlying map. Expired entries are dropped lazily on access.
#[derive(Debug, Clone, Default)]
pub struct GridCache {
    entries: Arc<Mutex<HashMap<MazeId, CacheEntry>>>,
}

impl GridCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: MazeId) -> Option<Arc<Grid>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(&id) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.grid.clone()),
            Some(_) => {
                entries.remove(&id);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, id: MazeId, grid: Arc<Grid>, ttl: Duration) {
        let Some(expires_at) = Instant::now().checked_add(ttl) else {
            return;
        };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(id, CacheEntry { grid, expires_at });
    }

    pub fn invalidate(&self, id: MazeId) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(&id);
    }

    /// Drops every expired entry and returns how many are left.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| now < entry.expires_at);
        entries.len()
    }
}
