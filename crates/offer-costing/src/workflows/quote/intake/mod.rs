//! Intake: raw form state in, normalized domain records out. Every phase
//! collects all of its field issues before reporting, so the caller can show
//! the user the complete picture at once.

pub mod forms;
mod numeric;
mod validator;

pub use forms::{BenefitsForm, CompensationForm, MarginForm, ProfileForm};
pub use validator::{
    CompensationReview, FieldIssue, FormField, GuidanceNote, IntakeRejection, IntakeValidator,
};
