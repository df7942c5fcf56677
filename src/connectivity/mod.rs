//! Connectivity analysis over automaton graphs.
//!
//! Partitions the states of an automaton into disjoint sets such that no
//! transition, in either direction, crosses between two sets. These are the
//! connected components of the automaton with its transitions treated as
//! undirected edges.
//!
//! The analysis never fails: the empty automaton yields an empty partition
//! and a state without transitions forms a singleton set.

use crate::automaton::{Automaton, StateId};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Undirected neighbour index, built once per query.
struct Adjacency {
    neighbours: HashMap<StateId, Vec<StateId>>,
}

impl Adjacency {
    fn build(automaton: &Automaton) -> Self {
        let mut neighbours: HashMap<StateId, Vec<StateId>> = HashMap::new();
        for transition in automaton.transitions() {
            let (from, to) = (transition.from(), transition.to());
            // self-loops connect nothing
            if from == to {
                continue;
            }
            neighbours.entry(from).or_default().push(to);
            neighbours.entry(to).or_default().push(from);
        }
        Self { neighbours }
    }

    fn of(&self, state: StateId) -> &[StateId] {
        self.neighbours
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Frontier expansion from `seed`.
    fn component(&self, seed: StateId) -> BTreeSet<StateId> {
        let mut visited = BTreeSet::new();
        let mut queued = HashSet::from([seed]);
        let mut frontier = vec![seed];

        while let Some(state) = frontier.pop() {
            visited.insert(state);
            for &next in self.of(state) {
                if !visited.contains(&next) && queued.insert(next) {
                    frontier.push(next);
                }
            }
        }
        visited
    }
}

/// Whether `a` and `b` are distinct and joined by a transition either way.
pub fn are_directly_connected(automaton: &Automaton, a: StateId, b: StateId) -> bool {
    a != b
        && (automaton.transitions_between(a, b).next().is_some()
            || automaton.transitions_between(b, a).next().is_some())
}

/// The set of states connected to `seed`, `seed` included.
///
/// A seed that is not part of the automaton yields just `{seed}`.
pub fn set_including_state(automaton: &Automaton, seed: StateId) -> BTreeSet<StateId> {
    Adjacency::build(automaton).component(seed)
}

/// Partition all states of `automaton` into connected components.
///
/// Sets are returned in the order their first member appears in
/// [`Automaton::states`]. The assigned-state bookkeeping lives only for the
/// duration of this call.
///
/// # Example
///
/// ```rust
/// use jflap_core::automaton::{Automaton, Transition, TransitionKind};
/// use jflap_core::connectivity::disjoint_sets;
///
/// let mut fa = Automaton::new(TransitionKind::Finite);
/// let q0 = fa.add_state().unwrap();
/// let q1 = fa.add_state().unwrap();
/// let q2 = fa.add_state().unwrap();
/// fa.add_transition(Transition::finite(q1, q0, "a")).unwrap();
///
/// let sets = disjoint_sets(&fa);
/// assert_eq!(sets.len(), 2);
/// assert!(sets[0].contains(&q0) && sets[0].contains(&q1));
/// assert_eq!(sets[1].len(), 1);
/// assert!(sets[1].contains(&q2));
/// ```
pub fn disjoint_sets(automaton: &Automaton) -> Vec<BTreeSet<StateId>> {
    let adjacency = Adjacency::build(automaton);
    let mut assigned: HashSet<StateId> = HashSet::new();
    let mut sets = Vec::new();

    for seed in automaton.state_ids() {
        if assigned.contains(&seed) {
            continue;
        }
        let set = adjacency.component(seed);
        assigned.extend(set.iter().copied());
        sets.push(set);
    }
    sets
}

/// Whether every state is reachable from every other ignoring direction.
///
/// The empty automaton counts as connected.
pub fn is_connected(automaton: &Automaton) -> bool {
    disjoint_sets(automaton).len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Transition, TransitionKind};

    fn fa_with_states(n: usize) -> (Automaton, Vec<StateId>) {
        let mut fa = Automaton::new(TransitionKind::Finite);
        let ids = (0..n).map(|_| fa.add_state().unwrap()).collect();
        (fa, ids)
    }

    #[test]
    fn empty_automaton_has_no_sets() {
        let fa = Automaton::new(TransitionKind::Finite);
        assert!(disjoint_sets(&fa).is_empty());
        assert!(is_connected(&fa));
    }

    #[test]
    fn isolated_states_are_singletons() {
        let (fa, q) = fa_with_states(3);
        let sets = disjoint_sets(&fa);
        assert_eq!(sets.len(), 3);
        for (set, id) in sets.iter().zip(&q) {
            assert_eq!(set, &BTreeSet::from([*id]));
        }
    }

    #[test]
    fn direction_is_ignored() {
        let (mut fa, q) = fa_with_states(4);
        fa.add_transition(Transition::finite(q[0], q[1], "a")).unwrap();
        fa.add_transition(Transition::finite(q[2], q[1], "b")).unwrap();
        fa.add_transition(Transition::finite(q[3], q[3], "c")).unwrap();

        let sets = disjoint_sets(&fa);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0], BTreeSet::from([q[0], q[1], q[2]]));
        assert_eq!(sets[1], BTreeSet::from([q[3]]));
        assert!(!is_connected(&fa));
    }

    #[test]
    fn order_follows_state_order() {
        let (mut fa, q) = fa_with_states(4);
        fa.add_transition(Transition::finite(q[3], q[1], "a")).unwrap();
        fa.add_transition(Transition::finite(q[2], q[0], "a")).unwrap();

        let sets = disjoint_sets(&fa);
        assert_eq!(sets[0], BTreeSet::from([q[0], q[2]]));
        assert_eq!(sets[1], BTreeSet::from([q[1], q[3]]));
    }

    #[test]
    fn repeated_calls_do_not_share_state() {
        let (mut fa, q) = fa_with_states(2);
        assert_eq!(disjoint_sets(&fa).len(), 2);
        fa.add_transition(Transition::finite(q[0], q[1], "a")).unwrap();
        assert_eq!(disjoint_sets(&fa).len(), 1);
        fa.remove_state(q[1]);
        assert_eq!(disjoint_sets(&fa), vec![BTreeSet::from([q[0]])]);
    }

    #[test]
    fn set_including_state_follows_long_chains() {
        let (mut fa, q) = fa_with_states(6);
        for pair in q[..5].windows(2) {
            fa.add_transition(Transition::finite(pair[1], pair[0], "x"))
                .unwrap();
        }
        let set = set_including_state(&fa, q[2]);
        assert_eq!(set, q[..5].iter().copied().collect::<BTreeSet<_>>());
        assert_eq!(set_including_state(&fa, q[5]), BTreeSet::from([q[5]]));
    }

    #[test]
    fn direct_connection_excludes_self() {
        let (mut fa, q) = fa_with_states(3);
        fa.add_transition(Transition::finite(q[0], q[0], "a")).unwrap();
        fa.add_transition(Transition::finite(q[1], q[0], "a")).unwrap();

        assert!(!are_directly_connected(&fa, q[0], q[0]));
        assert!(are_directly_connected(&fa, q[0], q[1]));
        assert!(are_directly_connected(&fa, q[1], q[0]));
        assert!(!are_directly_connected(&fa, q[0], q[2]));
    }
}
