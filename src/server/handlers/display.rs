//! Display control handlers.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    lcd::Command,
    protocol::{color::Rgb, commands::Autoscroll},
};

use super::super::state::AppState;

/// Form fields accepted by `POST /set`. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetForm {
    /// Decimal 0-255
    pub brightness: Option<String>,
    /// Decimal 0-255
    pub contrast: Option<String>,
    /// Hex color, `#rrggbb` or `#rgb`
    pub background: Option<String>,
    /// `"true"` turns autoscroll on, anything else off
    pub autoscroll: Option<String>,
    /// `"true"` turns the backlight on, anything else off
    pub on: Option<String>,
    /// Replaces the screen contents
    pub txt: Option<String>,
}

impl SetForm {
    /// Collect the known fields from decoded form pairs.
    ///
    /// A key counts only when it appears exactly once; a repeated key is
    /// treated as absent and the other fields still apply. Unknown keys are
    /// ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let single = |key: &str| {
            let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
            match (values.next(), values.next()) {
                (Some(value), None) => Some(value.clone()),
                _ => None,
            }
        };

        Self {
            brightness: single("brightness"),
            contrast: single("contrast"),
            background: single("background"),
            autoscroll: single("autoscroll"),
            on: single("on"),
            txt: single("txt"),
        }
    }

    /// The batch for this form, in a fixed order regardless of field order
    /// in the request. Values that don't parse are skipped.
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();

        if let Some(n) = parse_byte(&self.brightness) {
            commands.push(Command::Brightness(n));
        }
        if let Some(n) = parse_byte(&self.contrast) {
            commands.push(Command::Contrast(n));
        }
        if let Some(color) = self.background.as_deref().and_then(|s| Rgb::from_hex(s).ok()) {
            commands.push(Command::Background(color));
        }
        if let Some(flag) = &self.autoscroll {
            commands.push(Command::Autoscroll(Autoscroll::from(flag == "true")));
        }
        if let Some(flag) = &self.on {
            commands.push(Command::Backlight(flag == "true"));
        }
        if let Some(text) = &self.txt {
            commands.push(Command::Clear);
            commands.push(Command::Home);
            commands.push(Command::text(text.as_str()));
        }

        commands
    }
}

fn parse_byte(field: &Option<String>) -> Option<u8> {
    field.as_deref().and_then(|s| s.trim().parse().ok())
}

/// Body returned by `POST /set`.
#[derive(Debug, Serialize)]
pub struct SetResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handle POST /set - apply form fields to the display.
pub async fn set(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let commands = SetForm::from_pairs(&pairs).commands();
    if commands.is_empty() {
        return success_response();
    }

    match state.display.run_async(commands).await {
        Ok(()) => success_response(),
        Err(e) => {
            tracing::warn!(error = %e, "display update failed");
            error_response(e.to_string())
        }
    }
}

fn success_response() -> Response {
    let body = SetResponse {
        success: true,
        error: None,
    };
    (StatusCode::OK, Json(body)).into_response()
}

fn error_response(error: String) -> Response {
    let body = SetResponse {
        success: false,
        error: Some(error),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
