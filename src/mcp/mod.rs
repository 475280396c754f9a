// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! Exposes the maze handlers as tools so agents can upload, validate and walk mazes.

mod server;
mod types;

pub use server::MazewayMcp;
