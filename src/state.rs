// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{config::SiteConfig, error::ViewError, view::ViewEngine};

/// Shared, read-only state handed to every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub views: Arc<ViewEngine>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self, ViewError> {
        Ok(Self {
            config: Arc::new(config),
            views: Arc::new(ViewEngine::new()?),
        })
    }
}
