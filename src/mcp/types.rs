// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MazeSummary {
    pub maze_id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListMazesResponse {
    pub mazes: Vec<MazeSummary>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MazeGetParams {
    pub maze_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpMaze {
    pub maze_id: u64,
    pub name: String,
    /// Raw definition text as uploaded.
    pub definition: String,
    pub rows: u64,
    pub cols: u64,
    /// Normalized grid, one string per row (`S`, `E`, `O`, `X`).
    pub grid: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MazeGetResponse {
    pub maze: McpMaze,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MazeDefinitionParams {
    pub name: String,
    /// Maze rows separated by `\n` or `\r\n`.
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MazeCreateResponse {
    pub maze: MazeSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MazeValidateResponse {
    pub ok: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MazeMovesParams {
    pub maze_id: u64,
    /// Zero-based row.
    pub x: i64,
    /// Zero-based column.
    pub y: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MazeMovesResponse {
    pub is_finished: bool,
    pub moves: Vec<String>,
}
