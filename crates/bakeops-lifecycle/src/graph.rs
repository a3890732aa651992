//! Generic transition-legality engine
//!
//! One algorithm shared by both order families: a transition is legal iff
//! the target is among the permitted next states of the current state, or
//! is the current state itself (a no-op). Graphs are fixed at startup and
//! never mutated, so they need no synchronization.

use std::collections::HashMap;
use std::hash::Hash;

/// Immutable per-kind transition graph
pub struct TransitionGraph<S> {
    edges: HashMap<S, Vec<S>>,
}

impl<S: Copy + Eq + Hash> TransitionGraph<S> {
    pub fn new(edges: impl IntoIterator<Item = (S, Vec<S>)>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// Permitted next states from `current`; empty for terminal states
    pub fn allowed(&self, current: S) -> &[S] {
        self.edges.get(&current).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A state with no outgoing edges
    pub fn is_terminal(&self, state: S) -> bool {
        self.allowed(state).is_empty()
    }

    /// Legality check: same-state no-ops are always legal
    pub fn can_transition(&self, current: S, target: S) -> bool {
        target == current || self.allowed(current).contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Light {
        Red,
        Green,
        Off,
    }

    fn graph() -> TransitionGraph<Light> {
        TransitionGraph::new([
            (Light::Red, vec![Light::Green, Light::Off]),
            (Light::Green, vec![Light::Red, Light::Off]),
            (Light::Off, vec![]),
        ])
    }

    #[test]
    fn test_edges_and_noop() {
        let graph = graph();
        assert!(graph.can_transition(Light::Red, Light::Green));
        assert!(graph.can_transition(Light::Red, Light::Red));
        assert!(!graph.can_transition(Light::Off, Light::Red));
    }

    #[test]
    fn test_terminal() {
        let graph = graph();
        assert!(graph.is_terminal(Light::Off));
        assert!(!graph.is_terminal(Light::Red));
        assert!(graph.allowed(Light::Off).is_empty());
    }

    #[test]
    fn test_unknown_state_is_terminal() {
        let graph = TransitionGraph::new([(Light::Red, vec![Light::Green])]);
        // States missing from the edge map have no outgoing edges
        assert!(graph.is_terminal(Light::Off));
    }
}
