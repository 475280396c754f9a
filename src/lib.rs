// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mazeway: maze validation and navigation engine.
//!
//! The pure core ([`format`], [`validate`], [`query`]) turns uploaded text into a rectangular
//! grid, checks it, and answers "where can I move from here". [`store`] and [`service`] add
//! persistence and caching; [`http`] and [`mcp`] expose the handlers.

pub mod format;
pub mod http;
pub mod mcp;
pub mod model;
pub mod query;
pub mod service;
pub mod store;
pub mod validate;
