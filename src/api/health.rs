// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::settings::DATABASE_CONNECTION_STRING;
use crate::state::AppState;

/// Readiness of this slot to serve the home page.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// "ok" when the home page can render, "degraded" when it would 500.
    pub status: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Always "ok" once the router answers.
    pub service: String,
    /// Whether the database connection string is configured
    /// ("ok" or "missing"). The value itself is never reported.
    pub connection_string: String,
}

/// Liveness body, always `{"status":"ok"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Reports whether `DatabaseConnectionString` is configured, since the
/// home page fails without it. 200 when present, 503 when missing.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database connection string is configured", body = ReadyResponse),
        (status = 503, description = "Database connection string is missing; the home page would fail", body = ReadyResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let connection_ok = state
        .config
        .connection_strings
        .contains(DATABASE_CONNECTION_STRING);

    let response = ReadyResponse {
        status: if connection_ok { "ok" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            connection_string: if connection_ok { "ok" } else { "missing" }.to_string(),
        },
    };

    let status = if connection_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Answers 200 whenever the process serves HTTP; configuration is not
/// consulted, so a slot with a missing connection string stays live.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Process is serving requests", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe for the slot swap; same connection string check as [`health`].
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Slot can serve the home page", body = ReadyResponse),
        (status = 503, description = "Slot lacks its database connection string", body = ReadyResponse)
    )
)]
pub async fn readiness(state: State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    health(state).await
}
