use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use crate::db::AppState;
use crate::types::{NfProfile, NfType, NrfError, UriList};

#[derive(Debug, Deserialize)]
pub struct NfInstancesQuery {
    #[serde(rename = "nf-type")]
    pub nf_type: NfType,
    pub limit: Option<usize>,
}

/// The registry's own profile with a freshly built summary of served NFs.
pub async fn nrf_profile(State(state): State<AppState>) -> Json<NfProfile> {
    let mut profile = (*state.nrf_profile).clone();
    profile.nrf_info = Some(state.nrf_info.build().await);
    Json(profile)
}

pub async fn list_nf_instances(
    State(state): State<AppState>,
    Query(query): Query<NfInstancesQuery>,
) -> Result<Json<UriList>, AppError> {
    let list = state
        .management
        .instance_locations(&query.nf_type, query.limit)
        .await?;
    Ok(Json(list))
}

pub async fn get_nf_instance(
    State(state): State<AppState>,
    Path(nf_instance_id): Path<String>,
) -> Result<Json<NfProfile>, AppError> {
    state
        .management
        .profile(&nf_instance_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("NF instance {} not found", nf_instance_id)))
}

pub async fn register_nf_instance(
    State(state): State<AppState>,
    Path(nf_instance_id): Path<String>,
    Json(mut payload): Json<NfProfile>,
) -> Result<Response, AppError> {
    payload.nf_instance_id = nf_instance_id;

    let outcome = state.management.register(&payload).await?;

    // Delivery to the subscribers is left to the notification client.
    for uri in &outcome.notification_uris {
        tracing::debug!("NF instance {} change to be notified to {}", outcome.profile.nf_instance_id, uri);
    }

    if outcome.created {
        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, outcome.location)],
            Json(outcome.profile),
        )
            .into_response())
    } else {
        Ok((StatusCode::OK, Json(outcome.profile)).into_response())
    }
}

pub async fn deregister_nf_instance(
    State(state): State<AppState>,
    Path(nf_instance_id): Path<String>,
) -> Result<StatusCode, AppError> {
    match state.management.deregister(&nf_instance_id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("NF instance {} not found", nf_instance_id))),
    }
}

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFound(String),
    StoreError(String),
    InternalError(String),
}

impl From<NrfError> for AppError {
    fn from(err: NrfError) -> Self {
        match err {
            NrfError::Validation(msg) => AppError::ValidationError(msg),
            NrfError::StoreUnavailable(msg) => AppError::StoreError(msg),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::StoreError(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        }

        (status, message).into_response()
    }
}
