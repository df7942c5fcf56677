//! Property-based tests for the connectivity analyzer and the codec.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and grammars.

use jflap_core::automaton::{
    Automaton, State, StateId, Transition, TransitionKind, TransitionLabel,
};
use jflap_core::codec::{Codec, XmlCodec};
use jflap_core::connectivity::disjoint_sets;
use jflap_core::grammar::{Grammar, Production, UppercaseVariables};
use jflap_core::{Chooser, Structure};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

prop_compose! {
    fn arbitrary_fa()(
        count in 0..12usize,
    )(
        edges in prop::collection::vec((0..count.max(1), 0..count.max(1), "[a-c]{0,2}"), 0..20),
        finals in prop::collection::vec(0..count.max(1), 0..4),
        initial in prop::option::of(0..count.max(1)),
        states in Just(count),
    ) -> Automaton {
        let mut fa = Automaton::new(TransitionKind::Finite);
        let ids: Vec<StateId> = (0..states).map(|_| fa.add_state().unwrap()).collect();
        if !ids.is_empty() {
            for (from, to, read) in edges {
                fa.add_transition(Transition::finite(ids[from], ids[to], read)).unwrap();
            }
            for f in finals {
                fa.add_final_state(ids[f]).unwrap();
            }
            fa.set_initial_state(initial.map(|i| ids[i])).unwrap();
        }
        fa
    }
}

fn label_for(kind: TransitionKind, read: String, output: String) -> TransitionLabel {
    match kind {
        TransitionKind::Finite => TransitionLabel::Finite { read },
        TransitionKind::Mealy => TransitionLabel::Mealy { read, output },
        TransitionKind::Moore => TransitionLabel::Moore { read },
        TransitionKind::Dependency => TransitionLabel::Dependency,
    }
}

prop_compose! {
    fn arbitrary_automaton()(
        kind in prop::sample::select(TransitionKind::ALL.to_vec()),
        count in 0..10usize,
    )(
        kind in Just(kind),
        states in prop::collection::vec(
            ("[a-z0-9 &<>\"']{0,6}", prop::option::of("[ 01xy&]{0,3}")),
            count,
        ),
        edges in prop::collection::vec(
            (0..count.max(1), 0..count.max(1), "[a-c &<]{0,3}", "[xy ]{0,2}"),
            0..16,
        ),
        finals in prop::collection::vec(0..count.max(1), 0..4),
        initial in prop::option::of(0..count.max(1)),
    ) -> Automaton {
        let mut automaton = Automaton::new(kind);
        for (index, (name, label)) in states.into_iter().enumerate() {
            let mut state = State::named(StateId(index as u32 * 3), name);
            if let Some(label) = label {
                state = state.with_label(label);
            }
            automaton.insert_state(state).unwrap();
        }
        let ids: Vec<StateId> = automaton.state_ids().collect();
        if !ids.is_empty() {
            for (from, to, read, output) in edges {
                let label = label_for(kind, read, output);
                automaton.add_transition(Transition::new(ids[from], ids[to], label)).unwrap();
            }
            for f in finals {
                automaton.add_final_state(ids[f]).unwrap();
            }
            automaton.set_initial_state(initial.map(|i| ids[i])).unwrap();
        }
        automaton
    }
}

prop_compose! {
    fn arbitrary_production()(lhs in "[SABa-c]{0,3}", rhs in "[SABa-c&<> ]{0,5}") -> Production {
        Production::new(lhs, rhs)
    }
}

prop_compose! {
    fn arbitrary_grammar()(productions in prop::collection::vec(arbitrary_production(), 0..8)) -> Grammar {
        productions.into_iter().collect()
    }
}

fn arbitrary_structure() -> impl Strategy<Value = Structure> {
    prop_oneof![
        arbitrary_automaton().prop_map(Structure::from),
        arbitrary_grammar().prop_map(Structure::from),
    ]
}

prop_compose! {
    fn arbitrary_chooser()(
        options in prop::collection::vec(arbitrary_structure(), 1..4),
        pick in any::<prop::sample::Index>(),
    ) -> Chooser {
        let mut chooser = Chooser::new(options);
        chooser.select(pick.index(chooser.options().len()));
        chooser
    }
}

fn hash_of(production: &Production) -> u64 {
    let mut hasher = DefaultHasher::new();
    production.hash(&mut hasher);
    hasher.finish()
}

fn round_trip(codec: &XmlCodec, structure: &Structure) -> Structure {
    let mut bytes = Vec::new();
    codec.encode_to_writer(structure, &mut bytes).unwrap();
    codec.decode(&bytes).unwrap()
}

proptest! {
    #[test]
    fn disjoint_sets_partition_states(fa in arbitrary_fa()) {
        let sets = disjoint_sets(&fa);

        let mut seen = HashSet::new();
        for set in &sets {
            prop_assert!(!set.is_empty());
            for state in set {
                prop_assert!(seen.insert(*state), "state {} in two sets", state);
            }
        }
        let all: HashSet<StateId> = fa.state_ids().collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn transitions_stay_inside_one_set(fa in arbitrary_fa()) {
        let sets = disjoint_sets(&fa);
        for transition in fa.transitions() {
            let holder = sets.iter().find(|s| s.contains(&transition.from())).unwrap();
            prop_assert!(holder.contains(&transition.to()));
        }
    }

    #[test]
    fn isolated_states_are_singletons(fa in arbitrary_fa()) {
        let sets = disjoint_sets(&fa);
        for id in fa.state_ids() {
            let touched = fa.transitions().iter().any(|t| t.touches(id) && t.from() != t.to());
            if !touched {
                prop_assert!(sets.contains(&BTreeSet::from([id])));
            }
        }
    }

    #[test]
    fn disjoint_sets_is_repeatable(fa in arbitrary_fa()) {
        prop_assert_eq!(disjoint_sets(&fa), disjoint_sets(&fa));
    }

    #[test]
    fn every_structure_kind_round_trips(structure in arbitrary_structure()) {
        let codec = XmlCodec::new();
        prop_assert!(codec.can_encode(&structure));
        prop_assert_eq!(round_trip(&codec, &structure), structure);
    }

    #[test]
    fn grammar_round_trip(grammar in arbitrary_grammar()) {
        let codec = XmlCodec::new();
        let structure = Structure::from(grammar);
        prop_assert_eq!(round_trip(&codec, &structure), structure);
    }

    #[test]
    fn chooser_round_trips_as_its_selection(chooser in arbitrary_chooser()) {
        let codec = XmlCodec::new();
        let selected = chooser.current().unwrap().clone();
        prop_assert_eq!(round_trip(&codec, &Structure::from(chooser)), selected);
    }

    #[test]
    fn decode_encode_is_idempotent(structure in arbitrary_structure()) {
        let codec = XmlCodec::new();
        let once = round_trip(&codec, &structure);
        let twice = round_trip(&codec, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn production_equality_is_structural(a in arbitrary_production(), b in arbitrary_production()) {
        let copy = Production::new(a.lhs().to_string(), a.rhs().to_string());
        prop_assert_eq!(&a, &copy);
        prop_assert_eq!(hash_of(&a), hash_of(&copy));
        prop_assert_eq!(a == b, a.lhs() == b.lhs() && a.rhs() == b.rhs());
    }

    #[test]
    fn symbols_are_sorted_and_distinct(p in arbitrary_production()) {
        let symbols = p.symbols(&UppercaseVariables);
        prop_assert!(symbols.windows(2).all(|w| w[0] < w[1]));

        let mut expected: Vec<char> = p.variables(&UppercaseVariables);
        expected.extend(p.terminals(&UppercaseVariables));
        expected.sort_unstable();
        prop_assert_eq!(symbols, expected);
    }
}
