//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions expanded (pushed on the search stack).
    pub nodes_expanded: u64,

    /// Child positions answered from the transposition table.
    pub memo_hits: u64,

    /// Child positions already on the search path, valued as draws.
    pub cycle_hits: u64,

    /// Capturing moves scored as immediate wins.
    pub immediate_captures: u64,

    /// Expanded positions with no legal move.
    pub terminal_nodes: u64,

    /// Deepest search stack reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Positions expanded per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of child lookups answered by the table.
    #[must_use]
    pub fn memo_hit_rate(&self) -> f64 {
        let lookups = self.memo_hits + self.cycle_hits + self.nodes_expanded;
        if lookups == 0 {
            0.0
        } else {
            self.memo_hits as f64 / lookups as f64
        }
    }

    pub(crate) fn observe_depth(&mut self, depth: usize) {
        let depth = u32::try_from(depth).unwrap_or(u32::MAX);
        self.max_depth = self.max_depth.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
        assert_eq!(stats.memo_hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 500;
        stats.time_us = 250_000;

        assert_eq!(stats.nodes_per_second(), 2000.0);
    }

    #[test]
    fn test_memo_hit_rate() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 3;
        stats.memo_hits = 1;
        assert_eq!(stats.memo_hit_rate(), 0.25);
    }

    #[test]
    fn test_observe_depth_keeps_maximum() {
        let mut stats = SearchStats::new();
        stats.observe_depth(4);
        stats.observe_depth(2);
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.cycle_hits = 7;
        stats.max_depth = 3;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.terminal_nodes = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
