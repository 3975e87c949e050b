//! Lead-capture web form that relays each lead to a random sales agent by SMS.
//!
//! The crate is split into a small MessageBird client (a domain layer of strong
//! types, a transport layer for wire-format details, a client layer orchestrating
//! requests) and the web side: a [`Messenger`] adapter, the agent roster and the
//! axum form handler.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use callme::{AccessKey, AgentRoster, AppState, MessageBirdClient, Originator, router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MessageBirdClient::new(AccessKey::new("...")?);
//!     let app = router(AppState {
//!         messenger: Arc::new(client),
//!         originator: Originator::new("Sales")?,
//!         roster: AgentRoster::parse("+31611111111,+31622222222")?,
//!     });
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:4567").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod messaging;
pub mod roster;
mod transport;
pub mod views;

pub use client::{MessageBirdClient, MessageBirdClientBuilder, MessageBirdError};
pub use config::{AppConfig, ConfigError};
pub use domain::{
    AccessKey, ApiErrorDetail, CreateMessage, MessageAck, MessageBody, Originator, Recipient,
    RecipientStatus, RecipientSummary, ValidationError,
};
pub use handlers::{AppState, LeadForm, MISSING_FIELDS_ERROR, lead_message, router};
pub use messaging::{BoxFuture, Messenger, SendError};
pub use roster::AgentRoster;
