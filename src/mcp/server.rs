// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};

use crate::model::{Maze, MazeId};
use crate::service::{ErrorClass, MazeService, ServiceError};

use super::types::*;

#[derive(Clone)]
pub struct MazewayMcp {
    service: MazeService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MazewayMcp {
    pub fn new(service: MazeService) -> Self {
        Self { service, tool_router: Self::tool_router() }
    }

    pub fn service(&self) -> &MazeService {
        &self.service
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// List stored mazes ordered by id; start here, then call `maze.get` or `maze.moves`.
    #[tool(name = "maze.list")]
    async fn maze_list(&self) -> Result<Json<ListMazesResponse>, ErrorData> {
        let mazes = self.service.list_mazes().await.iter().map(maze_summary).collect();
        Ok(Json(ListMazesResponse { mazes }))
    }

    /// Read one maze: its raw definition plus the normalized grid used for navigation.
    #[tool(name = "maze.get")]
    async fn maze_get(
        &self,
        params: Parameters<MazeGetParams>,
    ) -> Result<Json<MazeGetResponse>, ErrorData> {
        let maze_id = params.0.maze_id;
        let data = serde_json::json!({ "maze_id": maze_id });
        let id = MazeId::new(maze_id);

        let maze = self.service.get_maze(id).await.map_err(|err| to_error_data(err, &data))?;
        let grid = self.service.grid(id).await.map_err(|err| to_error_data(err, &data))?;

        Ok(Json(MazeGetResponse {
            maze: McpMaze {
                maze_id,
                name: maze.name().as_str().to_owned(),
                definition: maze.definition().to_owned(),
                rows: grid.rows() as u64,
                cols: grid.cols() as u64,
                grid: grid.to_string().lines().map(str::to_owned).collect(),
            },
        }))
    }

    /// Validate and store a maze definition; fails with the validation reason when rejected.
    /// Use `maze.validate` for a dry run.
    #[tool(name = "maze.create")]
    async fn maze_create(
        &self,
        params: Parameters<MazeDefinitionParams>,
    ) -> Result<Json<MazeCreateResponse>, ErrorData> {
        let MazeDefinitionParams { name, definition } = params.0;
        let maze = self
            .service
            .create_maze(&name, &definition)
            .await
            .map_err(|err| to_error_data(err, &serde_json::json!({ "name": name })))?;

        Ok(Json(MazeCreateResponse { maze: maze_summary(&maze) }))
    }

    /// Check a maze definition without storing it; returns `ok` plus the first failed rule.
    #[tool(name = "maze.validate")]
    async fn maze_validate(
        &self,
        params: Parameters<MazeDefinitionParams>,
    ) -> Result<Json<MazeValidateResponse>, ErrorData> {
        let MazeDefinitionParams { name, definition } = params.0;
        let outcome = self
            .service
            .validate_maze(&name, &definition)
            .await
            .map_err(|err| to_error_data(err, &serde_json::json!({ "name": name })))?;

        Ok(Json(MazeValidateResponse { ok: outcome.ok, reason: outcome.reason }))
    }

    /// Legal single-step moves from row `x`, column `y`; `is_finished` is true on the exit.
    #[tool(name = "maze.moves")]
    async fn maze_moves(
        &self,
        params: Parameters<MazeMovesParams>,
    ) -> Result<Json<MazeMovesResponse>, ErrorData> {
        let MazeMovesParams { maze_id, x, y } = params.0;
        let outcome = self
            .service
            .available_moves(MazeId::new(maze_id), x, y)
            .await
            .map_err(|err| {
                to_error_data(err, &serde_json::json!({ "maze_id": maze_id, "x": x, "y": y }))
            })?;

        Ok(Json(MazeMovesResponse {
            is_finished: outcome.finished,
            moves: outcome
                .available_directions
                .iter()
                .map(|direction| direction.as_str().to_owned())
                .collect(),
        }))
    }
}

#[tool_handler]
impl ServerHandler for MazewayMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Mazeway maze server (tools: maze.list, maze.get, maze.create, maze.validate, maze.moves). Mazes use S=entry, E=exit, O=floor, anything else is wall; x is the row and y the column."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn maze_summary(maze: &Maze) -> MazeSummary {
    MazeSummary { maze_id: maze.id().get(), name: maze.name().as_str().to_owned() }
}

fn to_error_data(err: ServiceError, data: &serde_json::Value) -> ErrorData {
    let message = err.to_string();
    let data = Some(data.clone());
    match err.class() {
        ErrorClass::InvalidInput => ErrorData::invalid_params(message, data),
        ErrorClass::NotFound => ErrorData::resource_not_found(message, data),
        ErrorClass::Internal => {
            tracing::error!(error = %err, "maze tool failed");
            ErrorData::internal_error(message, data)
        }
    }
}
