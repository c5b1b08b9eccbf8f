//! HTTP route handlers.

use axum::{
    Form, Json, Router,
    extract::{State, rejection::FormRejection},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::card::{ResponseCard, format_error, format_success};
use crate::command;
use crate::septa::SeptaError;

use super::dto::SlashCommandRequest;
use super::state::AppState;

/// How many upcoming trains to ask for.
pub const NUM_TRAINS: u8 = 3;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/next-trains", get(next_trains).post(next_trains))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Slash-command endpoint.
///
/// Always answers 200 with a card; failures become error cards so Slack
/// shows them in the channel.
async fn next_trains(
    State(state): State<AppState>,
    form: Result<Form<SlashCommandRequest>, FormRejection>,
) -> Json<ResponseCard> {
    let card = match form {
        Ok(Form(req)) => {
            info!(
                command = %req.text,
                user = req.user_name.as_deref().unwrap_or("-"),
                channel = req.channel_name.as_deref().unwrap_or("-"),
                "next trains request"
            );
            answer(&state, &req.text).await
        }
        Err(rejection) => {
            let err = LookupError::BadRequest(rejection.body_text());
            warn!(error = %err, "rejected next trains request");
            format_error(&err.to_string())
        }
    };

    Json(card)
}

/// Errors that turn into error cards.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Request body couldn't be read as a form
    #[error("could not read command: {0}")]
    BadRequest(String),

    /// Command didn't start with the `rr` trigger
    #[error("unrecognised command {0:?}: expected \"rr SOURCE-DEST\"")]
    UnknownCommand(String),

    /// Fetching trains failed
    #[error(transparent)]
    Septa(#[from] SeptaError),
}

/// Answer a command with a success or error card.
pub async fn answer(state: &AppState, text: &str) -> ResponseCard {
    match lookup(state, text).await {
        Ok(card) => {
            info!("next trains request complete");
            card
        }
        Err(e) => {
            error!(error = %e, "next trains request failed");
            format_error(&e.to_string())
        }
    }
}

/// Parse the command, resolve both stations, and fetch the next trains.
pub async fn lookup(state: &AppState, text: &str) -> Result<ResponseCard, LookupError> {
    let parsed = command::parse(text);
    if !parsed.is_rail_lookup {
        return Err(LookupError::UnknownCommand(text.trim().to_string()));
    }

    let from = state.catalog.resolve(&parsed.fragments.from_fragment);
    let to = state.catalog.resolve(&parsed.fragments.to_fragment);
    info!(
        from_fragment = %parsed.fragments.from_fragment,
        to_fragment = %parsed.fragments.to_fragment,
        %from,
        %to,
        "resolved stations"
    );

    let records = state.arrivals.next_to_arrive(from, to, NUM_TRAINS).await?;

    Ok(format_success(&records, from, to))
}
