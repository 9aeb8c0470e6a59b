pub mod draft;
pub mod pricing;
pub mod session;
pub mod submit;
pub mod traveler;
pub mod wizard;

pub use draft::{BookingDraft, PaymentMethod};
pub use pricing::{PricingBreakdown, PricingConfig};
pub use session::CurrentUser;
pub use submit::{BookingConfirmation, BookingSubmitter, MemorySubmitter, SubmissionError};
pub use traveler::{Dietary, Gender, RequiredField, Traveler, TravelerUpdate};
pub use wizard::{BookingWizard, Step, ValidationErrors, WizardError};
