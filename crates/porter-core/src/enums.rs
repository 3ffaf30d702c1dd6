// Shared enums and word-size limits.

/// Selects how much of the rule cascade runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StemMode {
    /// Run the full five-stage cascade.
    #[default]
    Full,
    /// Strip plurals only: Step1a followed by the Step5 cleanup.
    PluralsOnly,
}

/// Maximum number of characters in a word accepted at the boundary.
/// Words of this length or more are rejected before the engine runs.
pub const MAX_WORD_CHARS: usize = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_mode_defaults_to_full() {
        assert_eq!(StemMode::default(), StemMode::Full);
    }

    #[test]
    fn stem_mode_is_copy() {
        let a = StemMode::PluralsOnly;
        let b = a; // Copy
        assert_eq!(a, b);
    }

    #[test]
    fn word_limit_matches_boundary_contract() {
        assert_eq!(MAX_WORD_CHARS, 255);
    }
}
