use crate::graph::*;

use std::collections::{HashMap, HashSet};
use std::mem;

/// Per-module code generation state.
///
/// Names are handed out on demand in first-visit order, keyed on signal reference identity, so structurally-identical-but-distinct signals always get distinct names. A fresh context is used for each generated module, so names restart at `node0` per module.
pub struct CodegenContext<'a> {
    node_names: HashMap<&'a Signal<'a>, String>,
    decl_generated: HashSet<&'a Signal<'a>>,
    queued_assignments: Vec<(String, &'a Signal<'a>)>,
}

impl<'a> CodegenContext<'a> {
    pub fn new() -> CodegenContext<'a> {
        CodegenContext {
            node_names: HashMap::new(),
            decl_generated: HashSet::new(),
            queued_assignments: Vec::new(),
        }
    }

    pub fn node_name(&mut self, signal: &'a Signal<'a>) -> String {
        let next_name = format!("node{}", self.node_names.len());
        self.node_names.entry(signal).or_insert(next_name).clone()
    }

    pub fn decl_generated(&self, signal: &'a Signal<'a>) -> bool {
        self.decl_generated.contains(&signal)
    }

    pub fn mark_decl_generated(&mut self, signal: &'a Signal<'a>) {
        self.decl_generated.insert(signal);
    }

    pub fn queue_assignment(&mut self, name: String, source: &'a Signal<'a>) {
        self.queued_assignments.push((name, source));
    }

    pub fn take_queued_assignments(&mut self) -> Vec<(String, &'a Signal<'a>)> {
        mem::take(&mut self.queued_assignments)
    }
}
