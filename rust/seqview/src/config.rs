//! Configuration of filtered views.

use seqview_common::{Result, error::Error};

/// How a [`FilterView`](crate::filter::FilterView) answers random-access
/// requests (`len`, `get`, `seek`, `distance_from`, `index`).
///
/// Sequential stepping is the same under both strategies: scan until the
/// predicate holds or the refined end is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterIndexing {
    /// Build, once and on first demand, the sorted list of positions that
    /// satisfy the predicate. O(N) memory, O(log N) seek and distance.
    #[default]
    PositionIndex,
    /// Keep no auxiliary state. `seek(k)` steps `|k|` times; `len` and
    /// `distance_from` count matches by scanning.
    Rescan,
}

/// Configuration for filtered views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Random-access strategy.
    pub indexing: FilterIndexing,
    /// Largest refined range (in positions) for which `PositionIndex` is
    /// honored. Longer ranges fall back to `Rescan` to bound memory.
    /// `None` means no limit.
    pub index_threshold: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            indexing: FilterIndexing::PositionIndex,
            index_threshold: None,
        }
    }
}

impl FilterConfig {
    /// A configuration that never allocates a position index.
    pub fn rescan() -> Self {
        Self {
            indexing: FilterIndexing::Rescan,
            index_threshold: None,
        }
    }

    pub fn with_indexing(mut self, indexing: FilterIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    pub fn with_index_threshold(mut self, threshold: usize) -> Self {
        self.index_threshold = Some(threshold);
        self
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.index_threshold == Some(0) {
            return Err(Error::invalid_config(
                "index_threshold must be greater than 0",
            ));
        }
        Ok(())
    }

    /// The strategy to use for a refined range of `span` positions.
    pub(crate) fn resolve(&self, span: usize) -> FilterIndexing {
        match (self.indexing, self.index_threshold) {
            (FilterIndexing::PositionIndex, Some(threshold)) if span > threshold => {
                FilterIndexing::Rescan
            }
            (indexing, _) => indexing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.indexing, FilterIndexing::PositionIndex);
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve(usize::MAX), FilterIndexing::PositionIndex);
    }

    #[test]
    fn test_threshold_fallback() {
        let config = FilterConfig::default().with_index_threshold(100);
        assert_eq!(config.resolve(100), FilterIndexing::PositionIndex);
        assert_eq!(config.resolve(101), FilterIndexing::Rescan);
        assert_eq!(FilterConfig::rescan().resolve(1), FilterIndexing::Rescan);
    }

    #[test]
    fn test_invalid_threshold() {
        let config = FilterConfig::default().with_index_threshold(0);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: index_threshold must be greater than 0"
        );
    }
}
