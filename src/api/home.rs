// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Home page.

use axum::{extract::State, response::Html};

use crate::{
    error::{ApiError, ConfigError},
    settings::{
        ConnectionStringRegistry, SettingsSource, APPLICATION_NAME_KEY, COLOR_KEY,
        DATABASE_CONNECTION_STRING, ENVIRONMENT_KEY, VERSION_KEY,
    },
    state::AppState,
    view::{ViewContext, ViewResult, HOME_INDEX_VIEW},
};

/// Collect the home page values into a fresh view context.
///
/// Missing settings become absent fields. A missing database connection
/// string fails with [`ConfigError::ConfigurationMissing`].
pub fn handle_home_request(
    settings: &impl SettingsSource,
    connections: &impl ConnectionStringRegistry,
) -> Result<ViewResult, ConfigError> {
    let setting = |key: &str| settings.setting(key).map(str::to_string);

    let context = ViewContext {
        environment: setting(ENVIRONMENT_KEY),
        application_name: setting(APPLICATION_NAME_KEY),
        color: setting(COLOR_KEY),
        version: setting(VERSION_KEY),
        database_connection_string: connections
            .connection_string(DATABASE_CONNECTION_STRING)?
            .to_string(),
    };

    Ok(ViewResult::new(HOME_INDEX_VIEW, context))
}

/// Render the home page for the slot serving this request.
#[utoipa::path(
    get,
    path = "/",
    tag = "Site",
    responses(
        (status = 200, description = "Home page", body = String, content_type = "text/html"),
        (status = 500, description = "Database connection string is not configured")
    )
)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let result = handle_home_request(&*state.config, &*state.config)?;
    let html = state.views.render(&result)?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AppSettings, ConnectionStrings};

    fn full_settings() -> AppSettings {
        [
            (ENVIRONMENT_KEY, "staging"),
            (APPLICATION_NAME_KEY, "Demo"),
            (COLOR_KEY, "blue"),
            (VERSION_KEY, "1.0"),
        ]
        .into_iter()
        .collect()
    }

    fn database() -> ConnectionStrings {
        [(DATABASE_CONNECTION_STRING, "Server=db;Database=x;")]
            .into_iter()
            .collect()
    }

    #[test]
    fn context_mirrors_configuration() {
        let result = handle_home_request(&full_settings(), &database()).unwrap();

        assert_eq!(result.view, HOME_INDEX_VIEW);
        assert_eq!(
            result.context,
            ViewContext {
                environment: Some("staging".to_string()),
                application_name: Some("Demo".to_string()),
                color: Some("blue".to_string()),
                version: Some("1.0".to_string()),
                database_connection_string: "Server=db;Database=x;".to_string(),
            }
        );
    }

    #[test]
    fn each_missing_setting_is_tolerated() {
        for missing in [ENVIRONMENT_KEY, APPLICATION_NAME_KEY, COLOR_KEY, VERSION_KEY] {
            let settings: AppSettings = [
                (ENVIRONMENT_KEY, "staging"),
                (APPLICATION_NAME_KEY, "Demo"),
                (COLOR_KEY, "blue"),
                (VERSION_KEY, "1.0"),
            ]
            .into_iter()
            .filter(|(key, _)| *key != missing)
            .collect();

            let ctx = handle_home_request(&settings, &database()).unwrap().context;
            let fields = [
                (ENVIRONMENT_KEY, &ctx.environment),
                (APPLICATION_NAME_KEY, &ctx.application_name),
                (COLOR_KEY, &ctx.color),
                (VERSION_KEY, &ctx.version),
            ];
            for (key, value) in fields {
                assert_eq!(value.is_none(), key == missing, "field for {key}");
            }
            assert_eq!(ctx.database_connection_string, "Server=db;Database=x;");
        }
    }

    #[test]
    fn empty_settings_still_render() {
        let ctx = handle_home_request(&AppSettings::new(), &database())
            .unwrap()
            .context;
        assert_eq!(ctx.environment, None);
        assert_eq!(ctx.application_name, None);
        assert_eq!(ctx.color, None);
        assert_eq!(ctx.version, None);
    }

    #[test]
    fn missing_connection_string_fails() {
        let err = handle_home_request(&full_settings(), &ConnectionStrings::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConfigurationMissing(ref name) if name == DATABASE_CONNECTION_STRING
        ));
    }

    #[test]
    fn other_connection_strings_do_not_satisfy_lookup() {
        let connections: ConnectionStrings = [("ReportingConnectionString", "Server=r;")]
            .into_iter()
            .collect();
        assert!(handle_home_request(&full_settings(), &connections).is_err());
    }

    #[test]
    fn context_tracks_current_values() {
        let mut settings = full_settings();
        let first = handle_home_request(&settings, &database()).unwrap();
        settings.insert(COLOR_KEY, "green");
        let second = handle_home_request(&settings, &database()).unwrap();

        assert_eq!(first.context.color.as_deref(), Some("blue"));
        assert_eq!(second.context.color.as_deref(), Some("green"));
    }
}
