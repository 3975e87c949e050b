//! Form handler: landing page and lead submission.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::Html,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{MessageBody, Originator};
use crate::messaging::{Messenger, SendError};
use crate::roster::AgentRoster;
use crate::views::{self, LandingView};

pub const MISSING_FIELDS_ERROR: &str = "Please fill all required fields!";

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub messenger: Arc<dyn Messenger>,
    pub originator: Originator,
    pub roster: AgentRoster,
}

/// Fields posted by the landing form. Absent fields are treated as blank.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl LeadForm {
    /// Collect the lead fields from decoded form pairs. A repeated field keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = Some(value),
                "number" => form.number = Some(value),
                _ => {}
            }
        }
        form
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/callme", post(callme))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn landing() -> Html<String> {
    views::landing(&LandingView::default())
}

async fn callme(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(pairs)) => LeadForm::from_pairs(pairs),
        Err(rejection) => {
            warn!("Unreadable lead submission: {}", rejection.body_text());
            LeadForm::default()
        }
    };

    let name = form.name.unwrap_or_default();
    let number = form.number.unwrap_or_default();

    if name.is_empty() || number.is_empty() {
        return views::landing(&LandingView::with_error(
            MISSING_FIELDS_ERROR,
            &name,
            &number,
        ));
    }

    let recipient = state.roster.pick(&mut rand::thread_rng()).clone();

    let outcome = match MessageBody::new(lead_message(&name, &number)) {
        Ok(body) => {
            state
                .messenger
                .send(&state.originator, vec![recipient], body)
                .await
        }
        Err(err) => Err(SendError::Failed(err.to_string())),
    };

    match outcome {
        Ok(ack) => {
            info!("Lead relayed: {}", ack);
            views::sent()
        }
        Err(err) => {
            let summary = err.summary();
            warn!("Lead could not be relayed: {}", summary);
            views::landing(&LandingView::with_error(summary, &name, &number))
        }
    }
}

/// Text sent to the sales agent.
pub fn lead_message(name: &str, number: &str) -> String {
    format!("You have a new lead: {name}. Call them at {number}")
}
