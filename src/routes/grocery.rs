use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use weekbasket_grocery::{ComputeGroceryInput, UpdateChecklistInput};
use weekbasket_shared::Requester;

use crate::error::AppError;
use crate::routes::AppState;

/// POST /grocery/compute
pub async fn compute(
    State(app): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<ComputeGroceryInput>,
) -> Result<impl IntoResponse, AppError> {
    let requester = requester_from_headers(&headers)?;
    let list = app.grocery.compute(&requester, input).await?;
    Ok(Json(list))
}

/// GET /grocery/lists/{id}
pub async fn detail(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let requester = requester_from_headers(&headers)?;
    let list = app.grocery.get(&requester, id).await?;
    Ok(Json(list))
}

/// PATCH /grocery/lists/{id}
pub async fn update(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateChecklistInput>,
) -> Result<impl IntoResponse, AppError> {
    let requester = requester_from_headers(&headers)?;
    let list = app
        .grocery
        .apply_checklist_update(&requester, id, input)
        .await?;
    Ok(Json(list))
}

/// The auth layer in front of this service resolves the session and forwards
/// the identity as headers. No identity, no access.
fn requester_from_headers(headers: &HeaderMap) -> Result<Requester, AppError> {
    let user_id = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(AppError::Forbidden)?;

    let household_id = match headers.get("x-household-id") {
        Some(value) => {
            let parsed = value
                .to_str()
                .ok()
                .and_then(|value| Uuid::parse_str(value).ok());
            Some(parsed.ok_or(AppError::Forbidden)?)
        }
        None => None,
    };

    Ok(Requester {
        user_id,
        household_id,
    })
}
