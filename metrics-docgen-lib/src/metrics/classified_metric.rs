use super::{MetricRecord, StabilityTier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMetric {
    pub record: MetricRecord,
    pub tier: StabilityTier,
}

impl ClassifiedMetric {
    #[must_use]
    pub const fn new(record: MetricRecord, tier: StabilityTier) -> Self {
        Self { record, tier }
    }
}
