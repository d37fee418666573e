use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use portfolio_db::models::ContactRow;
use portfolio_types::api::{AckResponse, ContactRequest, MessagesResponse};
use portfolio_types::models::{ContactMessage, NewContact};

use crate::error::ApiError;
use crate::state::AppState;

/// Contact body read as JSON, or as a urlencoded form when the request
/// says so. Anything undecodable is reported as missing fields.
pub struct ContactPayload(pub ContactRequest);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<ContactRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Json::<ContactRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(Self).map_err(|reason| {
            debug!(%reason, "Rejected contact body");
            ApiError::missing_fields()
        })
    }
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ContactPayload(req): ContactPayload,
) -> Result<impl IntoResponse, ApiError> {
    let contact = NewContact::normalize(
        req.name.as_deref(),
        req.email.as_deref(),
        req.subject.as_deref(),
        req.message.as_deref(),
    )
    .ok_or_else(ApiError::missing_fields)?;

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.insert_contact(&contact))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::store(e)
        })?
        .map_err(ApiError::store)?;

    info!(id = %row.id, "New message from: {} ({})", row.name, row.email);

    Ok((
        StatusCode::CREATED,
        Json(AckResponse::ok("Message received successfully!")),
    ))
}

/// GET /api/messages — every stored message, newest first.
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_contacts())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::fetch(e)
        })?
        .map_err(ApiError::fetch)?;

    let messages: Vec<ContactMessage> = rows.into_iter().map(message_from_row).collect();

    Ok(Json(MessagesResponse::new(messages)))
}

fn message_from_row(row: ContactRow) -> ContactMessage {
    ContactMessage {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt contact id '{}': {}", row.id, e);
            Uuid::default()
        }),
        created_at: row
            .created_at
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_or_else(|e| {
                warn!("Corrupt created_at '{}' on contact '{}': {}", row.created_at, row.id, e);
                chrono::DateTime::default()
            }),
        name: row.name,
        email: row.email,
        subject: row.subject,
        message: row.message,
        read: row.read,
    }
}
