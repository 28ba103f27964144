//! Contacts API handlers
//!
//! Contacts can be created and listed (optionally filtered by name); they are
//! never updated or deleted.

use super::extractors::JsonBody;
use crate::error::AppError;
use crate::state::{Contact, SharedContactStore};
use crate::validation::{validate_contact, ContactPayload};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{debug, info};

/// Plain-text greeting served at `GET /`
pub const WELCOME_TEXT: &str = "Welcome to Contacts API 🚀 Use /contacts to manage contacts";

/// Query parameters for listing contacts
#[derive(Debug, Default, Deserialize)]
pub struct ListContactsQuery {
    /// Case-insensitive name substring; empty means no filter
    pub search: Option<String>,
}

/// Build the contacts router
pub fn router(store: SharedContactStore) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(super::health_check))
        .route("/contacts", get(list_contacts).post(create_contact))
        .with_state(store)
}

/// GET / - Welcome text
pub async fn welcome() -> &'static str {
    WELCOME_TEXT
}

/// POST /contacts - Add a new contact
pub async fn create_contact(
    State(store): State<SharedContactStore>,
    JsonBody(payload): JsonBody<ContactPayload>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let (name, phone) = validate_contact(&payload).map_err(|message| {
        debug!(%message, "Contact payload rejected");
        AppError::InvalidContact(message)
    })?;

    let contact = store.write().await.create(name, phone);
    info!(contact_id = contact.id, "Contact created");

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /contacts - List all contacts, or those matching `?search=`
pub async fn list_contacts(
    State(store): State<SharedContactStore>,
    Query(query): Query<ListContactsQuery>,
) -> Json<Vec<Contact>> {
    let store = store.read().await;
    let contacts = match query.search.as_deref() {
        Some(term) if !term.is_empty() => store.search(term).into_iter().cloned().collect(),
        _ => store.list().to_vec(),
    };
    debug!(
        total = store.len(),
        returned = contacts.len(),
        search = ?query.search,
        "Listing contacts"
    );
    Json(contacts)
}
