use strum::Display;

/// How safe a metric is to depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum StabilityTier {
    Alpha,
    Beta,
    Stable,
    Deprecated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_upper_case() {
        let names: Vec<_> = [StabilityTier::Alpha, StabilityTier::Beta, StabilityTier::Stable, StabilityTier::Deprecated]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["ALPHA", "BETA", "STABLE", "DEPRECATED"]);
    }
}
