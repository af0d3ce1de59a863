// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! View layer: per-request view contexts and the template engine that turns
//! them into HTML.
//!
//! Templates are compiled into the binary. A view identifier such as
//! `home/index` resolves to the template `home/index.html`; the `.html`
//! suffix turns on auto-escaping.

use minijinja::{Environment, ErrorKind};
use serde::Serialize;

use crate::error::ViewError;

/// Default view of the home route.
pub const HOME_INDEX_VIEW: &str = "home/index";

const TEMPLATES: &[(&str, &str)] = &[
    ("_layout.html", include_str!("../templates/_layout.html")),
    ("home/index.html", include_str!("../templates/home/index.html")),
];

/// Values displayed on the home page.
///
/// Settings that are not configured are left out of the serialized context
/// and render as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub database_connection_string: String,
}

/// Render instruction returned by a request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResult {
    pub view: &'static str,
    pub context: ViewContext,
}

impl ViewResult {
    pub fn new(view: &'static str, context: ViewContext) -> Self {
        Self { view, context }
    }
}

pub struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    pub fn new() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        for &(name, template) in TEMPLATES {
            env.add_template(name, template)
                .map_err(|source| ViewError::Render {
                    view: name.to_string(),
                    source,
                })?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, result: &ViewResult) -> Result<String, ViewError> {
        let name = format!("{}.html", result.view);
        let template = self.env.get_template(&name).map_err(|source| {
            if source.kind() == ErrorKind::TemplateNotFound {
                ViewError::NotFound(result.view.to_string())
            } else {
                ViewError::Render {
                    view: result.view.to_string(),
                    source,
                }
            }
        })?;

        template
            .render(&result.context)
            .map_err(|source| ViewError::Render {
                view: result.view.to_string(),
                source,
            })
    }
}

impl std::fmt::Debug for ViewEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEngine")
            .field("templates", &TEMPLATES.len())
            .finish()
    }
}
