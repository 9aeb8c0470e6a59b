use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use trailhead_catalog::Trip;

use crate::draft::{BookingDraft, PaymentMethod, MAX_TRAVELERS, MIN_TRAVELERS};
use crate::pricing::{PricingBreakdown, PricingConfig};
use crate::session::CurrentUser;
use crate::submit::{BookingConfirmation, BookingSubmitter, SubmissionError};
use crate::traveler::{RequiredField, Traveler, TravelerUpdate};

/// Wizard position. Linear forward progression with guards; backward
/// navigation is always allowed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Step {
    Travelers,
    Review,
    Payment,
    Submitted,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::Travelers => 1,
            Step::Review => 2,
            Step::Payment => 3,
            Step::Submitted => 4,
        }
    }
}

/// Step-scoped validation state. Field errors are keyed by traveler
/// slot index so the form can render them inline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    pub travelers: BTreeMap<usize, Vec<RequiredField>>,
    /// Slot-count violation, e.g. a wire draft carrying more than ten
    /// travelers.
    pub slots: Option<String>,
    pub terms: Option<String>,
    pub submit: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
            && self.slots.is_none()
            && self.terms.is_none()
            && self.submit.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("current step failed validation")]
    ValidationFailed,
    #[error("payment step completes via submit, not next")]
    SubmitRequired,
    #[error("wizard already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Three-step booking form state machine. Owns the draft for one
/// session; callers render from the accessors and drive transitions.
pub struct BookingWizard {
    trip: Trip,
    draft: BookingDraft,
    step: Step,
    errors: ValidationErrors,
    next_slot_id: u32,
}

impl BookingWizard {
    /// Fresh session: one blank traveler, contact fields prefilled from
    /// the signed-in user where known.
    pub fn new(trip: Trip, user: &CurrentUser) -> Self {
        let draft = BookingDraft {
            trip_id: trip.id,
            travelers: vec![Traveler::prefilled(1, user)],
            payment_method: PaymentMethod::default(),
            terms_accepted: false,
        };
        Self {
            trip,
            draft,
            step: Step::Travelers,
            errors: ValidationErrors::default(),
            next_slot_id: 2,
        }
    }

    /// Rebuild a wizard around a draft that arrived over the wire, for
    /// driving the machine server-side. Slot ids are reassigned so
    /// update addressing stays unambiguous.
    pub fn resume(trip: Trip, mut draft: BookingDraft) -> Self {
        draft.trip_id = trip.id;
        if draft.travelers.is_empty() {
            draft.travelers.push(Traveler::blank(1));
        }
        for (index, traveler) in draft.travelers.iter_mut().enumerate() {
            traveler.id = index as u32 + 1;
        }
        let next_slot_id = draft.travelers.len() as u32 + 1;
        Self {
            trip,
            draft,
            step: Step::Travelers,
            errors: ValidationErrors::default(),
            next_slot_id,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Append a blank slot. No-op at the 10-traveler cap.
    pub fn add_traveler(&mut self) -> bool {
        if self.draft.travelers.len() >= MAX_TRAVELERS {
            return false;
        }
        self.draft.travelers.push(Traveler::blank(self.next_slot_id));
        self.next_slot_id += 1;
        debug_assert!(self.draft.check_bounds());
        true
    }

    /// Remove a slot by id. No-op when only one traveler remains or the
    /// id is unknown.
    pub fn remove_traveler(&mut self, id: u32) -> bool {
        if self.draft.travelers.len() <= MIN_TRAVELERS {
            return false;
        }
        let before = self.draft.travelers.len();
        self.draft.travelers.retain(|t| t.id != id);
        debug_assert!(self.draft.check_bounds());
        self.draft.travelers.len() < before
    }

    /// Replace one field on one traveler, leaving the rest untouched.
    pub fn update_traveler(&mut self, id: u32, update: TravelerUpdate) -> bool {
        match self.draft.travelers.iter_mut().find(|t| t.id == id) {
            Some(traveler) => {
                traveler.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.draft.terms_accepted = accepted;
        if accepted {
            self.errors.terms = None;
        }
    }

    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.draft.payment_method = method;
    }

    /// Advance past the current step if its guard passes. On failure the
    /// step is unchanged and the step's errors are populated.
    pub fn next(&mut self) -> Result<Step, WizardError> {
        match self.step {
            Step::Travelers => {
                // Interactive sessions can never leave the 1..=10 range
                // (add/remove are bounded no-ops), but a resumed wire
                // draft can arrive with any count: treat that as step-1
                // input to recover from, not an invariant to assert.
                if !self.draft.check_bounds() {
                    self.errors.slots = Some(format!(
                        "traveler count must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}"
                    ));
                    return Err(WizardError::ValidationFailed);
                }
                self.errors.slots = None;
                let mut field_errors = BTreeMap::new();
                for (index, traveler) in self.draft.travelers.iter().enumerate() {
                    let missing = traveler.missing_fields();
                    if !missing.is_empty() {
                        field_errors.insert(index, missing);
                    }
                }
                if !field_errors.is_empty() {
                    self.errors.travelers = field_errors;
                    return Err(WizardError::ValidationFailed);
                }
                self.errors.travelers.clear();
                self.step = Step::Review;
            }
            Step::Review => {
                if !self.draft.terms_accepted {
                    self.errors.terms = Some("Please accept terms".to_string());
                    return Err(WizardError::ValidationFailed);
                }
                self.errors.terms = None;
                self.step = Step::Payment;
            }
            Step::Payment => return Err(WizardError::SubmitRequired),
            Step::Submitted => return Err(WizardError::AlreadySubmitted),
        }
        debug!(step = ?self.step, "wizard advanced");
        Ok(self.step)
    }

    /// Step back. Always allowed; clears error state so re-entry starts
    /// clean.
    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Travelers | Step::Submitted => self.step,
            Step::Review => Step::Travelers,
            Step::Payment => Step::Review,
        };
        self.errors = ValidationErrors::default();
        self.step
    }

    /// Price summary for the current draft. Pure derivation, recomputed
    /// on every call; never cached across traveler-count changes.
    pub fn pricing(&self, config: &PricingConfig) -> PricingBreakdown {
        PricingBreakdown::compute(self.trip.price, self.draft.travelers.len(), config)
    }

    /// Submit from the payment step. On success the wizard is terminal;
    /// on failure it stays addressable at the payment step with the
    /// error surfaced, and the draft is untouched so retry is possible.
    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
        config: &PricingConfig,
    ) -> Result<BookingConfirmation, WizardError> {
        match self.step {
            Step::Payment => {}
            Step::Submitted => return Err(WizardError::AlreadySubmitted),
            _ => return Err(WizardError::ValidationFailed),
        }
        if !self.draft.check_bounds() {
            self.errors.slots = Some(format!(
                "traveler count must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}"
            ));
            return Err(WizardError::ValidationFailed);
        }

        let pricing = self.pricing(config);
        match submitter.submit(&self.draft, &pricing).await {
            Ok(confirmation) => {
                self.step = Step::Submitted;
                self.errors = ValidationErrors::default();
                Ok(confirmation)
            }
            Err(err) => {
                self.errors.submit = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
