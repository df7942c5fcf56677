//! Disjoint Sets of a JFLAP File
//!
//! This example decodes a `.jff` file and prints the connected groups of
//! states in its automaton.
//!
//! Key concepts:
//! - Decoding any supported structure through the XML codec
//! - Partitioning an automaton's states with `disjoint_sets`
//! - Deriving a dependency graph when the file holds a grammar
//!
//! Run with: cargo run --example disjoint_sets -- path/to/machine.jff
//! Without a path a built-in two-component automaton is used.

use jflap_core::codec::{Codec, XmlCodec};
use jflap_core::connectivity::disjoint_sets;
use jflap_core::grammar::UppercaseVariables;
use jflap_core::{Structure, VariableDependencyGraph};
use std::path::PathBuf;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<fa>
  <state id="0" name="q0"><initial/></state>
  <state id="1" name="q1"><final/></state>
  <state id="2" name="q2"/>
  <state id="3" name="q3"/>
  <transition><from>0</from><to>1</to><read>a</read></transition>
  <transition><from>2</from><to>3</to><read>b</read></transition>
</fa>"#;

fn main() {
    println!("=== Disjoint Sets Example ===\n");

    let codec = XmlCodec::new();
    let structure = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            println!("Decoding {}", path.display());
            codec.decode_file(&path).unwrap()
        }
        None => {
            println!("No file given, using the built-in sample");
            codec.decode(SAMPLE.as_bytes()).unwrap()
        }
    };

    let graph;
    let automaton = match structure.resolve() {
        Some(Structure::Grammar(grammar)) => {
            println!("Grammar with {} productions", grammar.len());
            graph = VariableDependencyGraph::from_grammar(grammar, &UppercaseVariables).unwrap();
            graph.as_automaton()
        }
        Some(other) => match other.as_automaton() {
            Some(automaton) => automaton,
            None => {
                println!("Nothing to analyze");
                return;
            }
        },
        None => {
            println!("Nothing selected");
            return;
        }
    };

    println!("{} automaton with {} states\n", automaton.kind(), automaton.states().len());
    for (index, set) in disjoint_sets(automaton).iter().enumerate() {
        let names: Vec<&str> = set
            .iter()
            .filter_map(|id| automaton.state(*id))
            .map(|state| state.name())
            .collect();
        println!("Set {}: {}", index + 1, names.join(", "));
    }
}
