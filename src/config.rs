//! Search configuration.

use crate::error::{Error, Result};

/// Knobs for one search invocation.
///
/// ```
/// use npuzzle::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_max_expansions(500_000)
///     .without_parity_precheck();
/// assert_eq!(config.max_expansions, Some(500_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop with [`SearchOutcome::LimitReached`](crate::search::SearchOutcome::LimitReached)
    /// after this many expansions. `None` means unbounded.
    pub max_expansions: Option<usize>,
    /// Reject parity-incompatible inputs before searching.
    pub parity_precheck: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            max_expansions: None,
            parity_precheck: true,
        }
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Skip the parity check; unsolvable inputs are then detected only by
    /// exhausting the frontier.
    pub fn without_parity_precheck(mut self) -> Self {
        self.parity_precheck = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_expansions == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "max_expansions must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_with_precheck() {
        let config = SearchConfig::default();
        assert_eq!(config.max_expansions, None);
        assert!(config.parity_precheck);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_expansion_limit_is_rejected() {
        let err = SearchConfig::new().with_max_expansions(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }
}
