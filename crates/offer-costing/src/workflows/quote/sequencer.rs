//! Finite-state phase sequencer for the five-step quote intake: forward
//! transitions are guarded by the validator, backward transitions are always
//! allowed without re-validation.

use serde::Serialize;

use super::catalog::BenefitAvailability;
use super::domain::{
    BenefitSelections, CandidateProfile, CompensationInput, QuoteRequest, TargetMargin,
};
use super::intake::{
    BenefitsForm, CompensationForm, GuidanceNote, IntakeRejection, IntakeValidator, MarginForm,
    ProfileForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePhase {
    Profile,
    Compensation,
    Benefits,
    Margin,
    Summary,
}

impl QuotePhase {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Profile,
            Self::Compensation,
            Self::Benefits,
            Self::Margin,
            Self::Summary,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Candidate Profile",
            Self::Compensation => "Salary & Mobility",
            Self::Benefits => "Extra Benefits",
            Self::Margin => "Target Margin",
            Self::Summary => "Output",
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Profile => 1,
            Self::Compensation => 2,
            Self::Benefits => 3,
            Self::Margin => 4,
            Self::Summary => 5,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Profile | Self::Compensation => Self::Profile,
            Self::Benefits => Self::Compensation,
            Self::Margin => Self::Benefits,
            Self::Summary => Self::Margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SequenceError {
    #[error("complete the {} phase first", .required.label())]
    PhaseIncomplete { required: QuotePhase },
    #[error(transparent)]
    Intake(#[from] IntakeRejection),
}

/// Owns the draft record being built up phase by phase. Each successful
/// submission replaces that phase's record wholesale; nothing is mutated
/// field by field.
#[derive(Debug, Clone)]
pub struct QuoteSequencer {
    validator: IntakeValidator,
    phase: QuotePhase,
    profile: Option<CandidateProfile>,
    compensation: Option<CompensationInput>,
    benefits: Option<BenefitSelections>,
    margin: Option<TargetMargin>,
    guidance: Vec<GuidanceNote>,
}

impl QuoteSequencer {
    pub fn new(availability: BenefitAvailability) -> Self {
        Self {
            validator: IntakeValidator::new(availability),
            phase: QuotePhase::Profile,
            profile: None,
            compensation: None,
            benefits: None,
            margin: None,
            guidance: Vec::new(),
        }
    }

    pub fn phase(&self) -> QuotePhase {
        self.phase
    }

    /// Guidance notes from the latest compensation submission.
    pub fn guidance(&self) -> &[GuidanceNote] {
        &self.guidance
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn submit_profile(
        &mut self,
        form: &ProfileForm,
    ) -> Result<&CandidateProfile, SequenceError> {
        let profile = self.validator.validate_profile(form)?;
        self.phase = QuotePhase::Compensation;
        Ok(self.profile.insert(profile))
    }

    pub fn submit_compensation(
        &mut self,
        form: &CompensationForm,
    ) -> Result<&CompensationInput, SequenceError> {
        let profile = self.profile.as_ref().ok_or(SequenceError::PhaseIncomplete {
            required: QuotePhase::Profile,
        })?;
        let review = self.validator.validate_compensation(profile, form)?;
        self.guidance = review.guidance;
        self.phase = QuotePhase::Benefits;
        Ok(self.compensation.insert(review.input))
    }

    pub fn submit_benefits(
        &mut self,
        form: &BenefitsForm,
    ) -> Result<&BenefitSelections, SequenceError> {
        let profile = self.profile.as_ref().ok_or(SequenceError::PhaseIncomplete {
            required: QuotePhase::Profile,
        })?;
        let compensation = self
            .compensation
            .as_ref()
            .ok_or(SequenceError::PhaseIncomplete {
                required: QuotePhase::Compensation,
            })?;
        let benefits = self
            .validator
            .validate_benefits(profile, compensation, form)?;
        self.phase = QuotePhase::Margin;
        Ok(self.benefits.insert(benefits))
    }

    /// Final input phase; on success the draft is complete and the assembled
    /// request is returned.
    pub fn submit_margin(&mut self, form: &MarginForm) -> Result<QuoteRequest, SequenceError> {
        let benefits = self
            .benefits
            .clone()
            .ok_or(SequenceError::PhaseIncomplete {
                required: QuotePhase::Benefits,
            })?;
        let profile = self.profile.clone().ok_or(SequenceError::PhaseIncomplete {
            required: QuotePhase::Profile,
        })?;
        let compensation = self
            .compensation
            .clone()
            .ok_or(SequenceError::PhaseIncomplete {
                required: QuotePhase::Compensation,
            })?;

        let margin = self.validator.validate_margin(form)?;
        self.margin = Some(margin);
        self.phase = QuotePhase::Summary;

        Ok(QuoteRequest {
            profile,
            compensation,
            benefits,
            margin,
        })
    }

    /// Step one phase back. Never re-validates; the stored records stay.
    pub fn back(&mut self) {
        self.phase = self.phase.previous();
    }

    /// Discard the draft and return to a fresh Phase 1.
    pub fn start_over(&mut self) {
        let availability = self.validator.availability();
        *self = Self::new(availability);
    }

    /// The complete engine input, available once all four input phases have
    /// validated records.
    pub fn request(&self) -> Option<QuoteRequest> {
        Some(QuoteRequest {
            profile: self.profile.clone()?,
            compensation: self.compensation.clone()?,
            benefits: self.benefits.clone()?,
            margin: *self.margin.as_ref()?,
        })
    }
}
