use axum::extract::{Query, State};
use chrono::Utc;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;

/// Query parameters for /getTime
#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    /// Comma-separated abbreviation codes; a missing parameter is treated
    /// as a single empty code
    #[serde(default)]
    pub zones: String,
}

/// Error payload returned when an abbreviation cannot be resolved
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Description of the failed lookup
    #[serde(rename = "Message")]
    pub message: String,
}

/// Look up the current wall-clock time for timezone abbreviations
///
/// Codes are resolved in the order given, deduplicated by first occurrence.
/// The first unknown code aborts the batch: its error payload becomes the
/// whole response body and results computed before it are discarded.
#[utoipa::path(
    get,
    path = "/getTime",
    params(
        ("zones" = Option<String>, Query, description = "Comma-separated timezone abbreviation codes (e.g. 'PST,EST')")
    ),
    responses(
        (status = 200, description = "JSON object mapping each abbreviation to its HH:MM:SS time, or an error payload for the first unknown code", body = ErrorResponse),
    ),
    tag = "Time"
)]
pub async fn handle_get_time(
    State(state): State<AppState>,
    Query(query): Query<TimeQuery>,
) -> Result<String, ApiError> {
    let mut times: BTreeMap<&str, String> = BTreeMap::new();

    for code in query.zones.split(',') {
        if times.contains_key(code) {
            continue;
        }

        let Some(zone_ids) = state.zones.resolve(code) else {
            tracing::debug!(code, "Unknown timezone abbreviation");
            return encode(&ErrorResponse {
                message: format!("Can't find timezone: {code}"),
            });
        };

        times.insert(code, zone_time(zone_ids[0])?);
    }

    if times.is_empty() {
        return Ok(String::new());
    }

    encode(&times)
}

/// Current wall-clock time in the given IANA zone, formatted HH:MM:SS.
///
/// Each call takes its own time reading; codes within one request are not
/// computed against a shared snapshot.
fn zone_time(zone_id: &str) -> Result<String, ApiError> {
    let tz: Tz = zone_id
        .parse()
        .map_err(|_| ApiError::InvalidZone(zone_id.to_string()))?;

    Ok(Utc::now().with_timezone(&tz).format("%H:%M:%S").to_string())
}

/// Serialize a payload as the newline-terminated response body.
fn encode<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{body}\n"))
}
