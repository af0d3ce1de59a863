// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! BlueGreen Site - Deployment Slot Identification Page
//!
//! Serves a single home page showing the environment, application name,
//! color, version and database connection string configured for the slot
//! that answered, so operators can tell which deployment is live.
//!
//! ## Modules
//!
//! - `api` - HTTP handlers and router (Axum)
//! - `config` - Environment variables and site configuration loading
//! - `settings` - Lenient settings and strict connection string lookups
//! - `view` - View contexts and template rendering (minijinja)

pub mod api;
pub mod config;
pub mod error;
pub mod settings;
pub mod state;
pub mod telemetry;
pub mod view;
