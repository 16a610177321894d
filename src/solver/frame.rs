//! Positions on the active search path.

use rustc_hash::FxHashSet;

use crate::canon::CanonicalKey;

/// Canonical keys currently being expanded, root to leaf.
///
/// Reaching one of these again means the line of play repeats a position.
#[derive(Clone, Debug, Default)]
pub struct SearchFrame {
    keys: FxHashSet<CanonicalKey>,
}

impl SearchFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a position. Returns false if it was already on the path.
    pub fn push(&mut self, key: CanonicalKey) -> bool {
        self.keys.insert(key)
    }

    /// Leave a position.
    pub fn pop(&mut self, key: &CanonicalKey) -> bool {
        self.keys.remove(key)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::Canonicalizer;
    use crate::core::{Board, Stone, Topology};

    #[test]
    fn test_push_pop() {
        let topology = Topology::strip(3).unwrap();
        let canon = Canonicalizer::new(topology, 7);
        let (key, _) = canon.key(&Board::empty(topology), Stone::Black);

        let mut path = SearchFrame::new();
        assert!(path.push(key.clone()));
        assert!(!path.push(key.clone()));
        assert!(path.contains(&key));
        assert_eq!(path.depth(), 1);

        assert!(path.pop(&key));
        assert!(path.is_empty());
        assert!(!path.pop(&key));
    }
}
