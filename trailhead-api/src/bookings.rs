use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use serde::Serialize;
use tracing::info;
use trailhead_booking::{
    BookingConfirmation, BookingDraft, BookingWizard, PricingBreakdown, WizardError,
};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct BookingResponse {
    confirmation: BookingConfirmation,
    pricing: PricingBreakdown,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(create_booking))
}

/// Drive the booking wizard end to end over a draft that arrived in one
/// request: validate travelers, confirm terms, then submit. Guard
/// failures surface the same step-scoped error maps the interactive
/// wizard produces.
async fn create_booking(
    State(state): State<AppState>,
    Json(draft): Json<BookingDraft>,
) -> Result<Json<BookingResponse>, AppError> {
    // Trip lookup failure is a hard stop: no wizard state is created.
    let trip = state
        .catalog
        .fetch_trip(draft.trip_id)
        .await
        .map_err(AppError::from_catalog)?;

    let mut wizard = BookingWizard::resume(trip, draft);

    // Step 1 → 2: traveler required fields.
    advance(&mut wizard)?;
    // Step 2 → 3: terms.
    advance(&mut wizard)?;

    let pricing = wizard.pricing(&state.pricing);
    let submitted = wizard.submit(state.submitter.as_ref(), &state.pricing).await;
    let confirmation = match submitted {
        Ok(confirmation) => confirmation,
        Err(WizardError::Submission(inner)) => return Err(AppError::from_submission(inner)),
        Err(WizardError::ValidationFailed) => {
            return Err(AppError::Validation(wizard.errors().clone()))
        }
        Err(other) => return Err(AppError::BadRequest(other.to_string())),
    };

    info!(booking_id = %confirmation.id, trip_id = confirmation.trip_id, "booking created");
    Ok(Json(BookingResponse {
        confirmation,
        pricing,
    }))
}

fn advance(wizard: &mut BookingWizard) -> Result<(), AppError> {
    match wizard.next() {
        Ok(_) => Ok(()),
        Err(_) => Err(AppError::Validation(wizard.errors().clone())),
    }
}
