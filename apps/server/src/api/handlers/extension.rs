//! Extension detail handler

use crate::{state::AppState, Error, Result};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use bazaar_catalog::{get_by_id, ExtensionRecord};
use bazaar_registry_client::ExtensionDetails;
use serde::Serialize;

const MAX_ID_LEN: usize = 100;

/// Full record plus detail fields and install helpers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDetailResponse<'a> {
    #[serde(flatten)]
    pub record: &'a ExtensionRecord,
    #[serde(flatten)]
    pub details: Option<&'a ExtensionDetails>,
    pub install_command: String,
    pub marketplace_url: String,
}

/// `GET /extension/:id`
pub async fn get_extension(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    validate_extension_id(&id)?;
    tracing::debug!(id = %id, "Fetching extension details");

    let snapshot = state.supplier.snapshot().await?;
    let record = get_by_id(snapshot.records(), &id)?;

    let body = ExtensionDetailResponse {
        record,
        details: snapshot.details(&id),
        install_command: format!("npm install {}", record.id),
        marketplace_url: format!(
            "{}/{}",
            state.config.catalog.marketplace_url.trim_end_matches('/'),
            record.id
        ),
    };

    Ok(Json(body).into_response())
}

/// Package-name shaped ids only: `[A-Za-z0-9-_.@/]`, at most 100 characters.
pub fn validate_extension_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidId("id must not be empty".to_string()));
    }
    if id.len() > MAX_ID_LEN {
        return Err(Error::InvalidId(format!(
            "id must be at most {MAX_ID_LEN} characters"
        )));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/')))
    {
        return Err(Error::InvalidId(format!("unexpected character '{c}'")));
    }
    Ok(())
}
