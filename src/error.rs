// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while loading or reading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required connection string is not registered.
    #[error("connection string '{0}' is not configured")]
    ConfigurationMissing(String),
    #[error("failed to read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised by the view layer.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("view '{0}' does not exist")]
    NotFound(String),
    #[error("failed to render view '{view}': {source}")]
    Render {
        view: String,
        #[source]
        source: minijinja::Error,
    },
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "Configuration error while handling request");
        Self::internal(err.to_string())
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        tracing::error!(error = %err, "View rendering failed");
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
