use crate::ApiResult;
use crate::api::error::ApiError;

use sa_ws::{AppState, BroadcastMessage};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CenterFreqRequest {
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct CenterFreqResponse {
    pub status: &'static str,
    pub center: i64,
}

/// PUT /centerfreq
///
/// Publishes the new center frequency to every live session. Success means
/// "published", not "delivered".
pub async fn update_center_frequency(
    State(state): State<AppState>,
    payload: Result<Json<CenterFreqRequest>, JsonRejection>,
) -> ApiResult<Json<CenterFreqResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected center frequency body: {rejection}");
        ApiError::invalid_json()
    })?;

    let message = BroadcastMessage::center(request.value);
    let message_type = message.message_type();
    let delivered = state.broker.broadcaster().publish(message);
    state.metrics.broadcast_published(message_type, delivered);
    info!(
        "Center frequency set to {} ({delivered} subscribers)",
        request.value
    );

    Ok(Json(CenterFreqResponse {
        status: "center frequency updated",
        center: request.value,
    }))
}
