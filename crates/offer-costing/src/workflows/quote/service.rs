use super::catalog::BenefitAvailability;
use super::domain::QuoteRequest;
use super::pricing::{CostBreakdown, PricingEngine};
use super::report::{build_summary, QuoteSummaryView};
use super::sequencer::QuoteSequencer;

/// Facade composing the pricing engine and the phase sequencer behind one
/// construction point, so callers share a single benefit-availability record.
/// There is nothing to persist: a quote is a single-shot computation and
/// "start over" is just a fresh sequencer.
#[derive(Debug, Clone, Default)]
pub struct QuoteService {
    availability: BenefitAvailability,
    engine: PricingEngine,
}

impl QuoteService {
    pub fn new(availability: BenefitAvailability) -> Self {
        Self {
            availability,
            engine: PricingEngine::new(availability),
        }
    }

    pub fn availability(&self) -> BenefitAvailability {
        self.availability
    }

    /// A fresh draft walking Phase 1 through Phase 4.
    pub fn sequencer(&self) -> QuoteSequencer {
        QuoteSequencer::new(self.availability)
    }

    /// Run the engine over a complete, pre-validated request.
    pub fn quote(&self, request: &QuoteRequest) -> CostBreakdown {
        let breakdown = self.engine.calculate(request);
        tracing::debug!(
            daily_rate = breakdown.daily_rate.precise,
            total_annual_cost = breakdown.employer.total_annual_cost.precise,
            "quote computed"
        );
        breakdown
    }

    /// Compute and render the Phase 5 display model in one step.
    pub fn summarize(&self, request: &QuoteRequest) -> QuoteSummaryView {
        build_summary(&self.quote(request))
    }
}
