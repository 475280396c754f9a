// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON/multipart HTTP surface over [`MazeService`].
//!
//! Request and response bodies use the camelCase field names existing clients send
//! (`mazeId`, `isFinished`). Failures are answered with a plain-text message.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::model::{Maze, MazeId};
use crate::query::MoveOutcome;
use crate::service::{ErrorClass, MazeService, ServiceError};
use crate::validate::ValidationOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeView {
    pub id: u64,
    pub name: String,
    pub definition: String,
}

impl From<Maze> for MazeView {
    fn from(maze: Maze) -> Self {
        Self {
            id: maze.id().get(),
            name: maze.name().as_str().to_owned(),
            definition: maze.definition().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMazeRequest {
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesRequest {
    pub maze_id: u64,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesResponse {
    pub is_finished: bool,
    pub moves: Vec<String>,
}

impl From<MoveOutcome> for MovesResponse {
    fn from(outcome: MoveOutcome) -> Self {
        Self {
            is_finished: outcome.finished,
            moves: outcome
                .available_directions
                .iter()
                .map(|direction| direction.as_str().to_owned())
                .collect(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    BadRequest(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::BadRequest(err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Service(err) => {
                let status = match err.class() {
                    ErrorClass::InvalidInput => StatusCode::BAD_REQUEST,
                    ErrorClass::NotFound => StatusCode::NOT_FOUND,
                    ErrorClass::Internal => {
                        tracing::error!(error = %err, "maze request failed");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string()).into_response()
            }
        }
    }
}

/// Maze routes; the caller may nest further services (such as `/mcp`) on the result.
pub fn router(service: MazeService) -> Router {
    Router::new()
        .route("/maze", post(create_maze_upload))
        .route("/maze/json", post(create_maze_json))
        .route("/maze/validate", post(validate_maze))
        .route("/maze/all", get(list_mazes))
        .route("/maze/moves", post(available_moves))
        .route("/maze/{id}", get(get_maze))
        .with_state(service)
}

async fn create_maze_upload(
    State(service): State<MazeService>,
    mut multipart: Multipart,
) -> Result<Json<MazeView>, ApiError> {
    let mut name = None;
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => name = Some(field.text().await?),
            Some("file") => {
                let bytes = field.bytes().await?;
                let text = String::from_utf8(bytes.to_vec())
                    .map_err(|_| ApiError::BadRequest("File must be UTF-8 text".to_owned()))?;
                file = Some(text);
            }
            _ => {}
        }
    }

    let definition = file.unwrap_or_default();
    let maze = service.create_maze(name.as_deref().unwrap_or_default(), &definition).await?;
    Ok(Json(maze.into()))
}

async fn create_maze_json(
    State(service): State<MazeService>,
    Json(request): Json<CreateMazeRequest>,
) -> Result<Json<MazeView>, ApiError> {
    let maze = service.create_maze(&request.name, &request.definition).await?;
    Ok(Json(maze.into()))
}

async fn validate_maze(
    State(service): State<MazeService>,
    Json(request): Json<CreateMazeRequest>,
) -> Result<Json<ValidationOutcome>, ApiError> {
    let outcome = service.validate_maze(&request.name, &request.definition).await?;
    Ok(Json(outcome))
}

async fn list_mazes(State(service): State<MazeService>) -> Json<Vec<MazeView>> {
    Json(service.list_mazes().await.into_iter().map(MazeView::from).collect())
}

async fn get_maze(
    State(service): State<MazeService>,
    Path(id): Path<MazeId>,
) -> Result<Json<MazeView>, ApiError> {
    let maze = service.get_maze(id).await?;
    Ok(Json(maze.into()))
}

async fn available_moves(
    State(service): State<MazeService>,
    Json(request): Json<MovesRequest>,
) -> Result<Json<MovesResponse>, ApiError> {
    let outcome =
        service.available_moves(MazeId::new(request.maze_id), request.x, request.y).await?;
    Ok(Json(outcome.into()))
}
