// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark mazes (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("mazeway_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn side(self) -> usize {
        match self {
            Self::Small => 32,
            Self::Medium => 128,
            Self::Large => 256,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

pub const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

/// Square room of floor, entry top-left, exit bottom-right. CRLF line endings.
pub fn open_room(size: Size) -> String {
    let side = size.side();
    let mut out = String::with_capacity(side * (side + 2));
    for row in 0..side {
        for col in 0..side {
            out.push(match (row, col) {
                (0, 0) => 'S',
                (r, c) if r == side - 1 && c == side - 1 => 'E',
                _ => 'O',
            });
        }
        out.push_str("\r\n");
    }
    out
}

/// Floor rows joined by wall rows with a single gap alternating between the right and left
/// edge, so the only path visits every floor row end to end.
pub fn serpentine(size: Size) -> String {
    let side = size.side();
    let mut out = String::with_capacity(side * (side + 1));
    for row in 0..side {
        for col in 0..side {
            let ch = if row % 2 == 0 {
                'O'
            } else {
                let gap = if row % 4 == 1 { side - 1 } else { 0 };
                if col == gap {
                    'O'
                } else {
                    'X'
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }

    // Markers go on the first and last floor rows.
    let mut bytes = out.into_bytes();
    bytes[0] = b'S';
    let last_floor_row = if side % 2 == 0 { side - 2 } else { side - 1 };
    let exit_at = last_floor_row * (side + 1) + side / 2;
    bytes[exit_at] = b'E';
    String::from_utf8(bytes).expect("ascii maze")
}

/// Open room with a full wall row through the middle: valid markers, no path.
pub fn walled_off(size: Size) -> String {
    let side = size.side();
    let mut out = String::with_capacity(side * (side + 1));
    for row in 0..side {
        for col in 0..side {
            out.push(match (row, col) {
                (0, 0) => 'S',
                (r, c) if r == side - 1 && c == side - 1 => 'E',
                (r, _) if r == side / 2 => 'X',
                _ => 'O',
            });
        }
        out.push('\n');
    }
    out
}
