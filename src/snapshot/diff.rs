// src/snapshot/diff.rs
//! Change detection between two snapshots.
//!
//! Only *what is held* and *how much* count. Prices, values and profit move all
//! day and would make every run look like a change, so they are ignored. Order
//! is ignored too. Units are compared exactly: both sides come from the same
//! decimal text through the same parser.

use std::collections::HashMap;
use std::fmt;

use crate::model::Snapshot;

/// name → units. A name repeated within one snapshot keeps its last units.
pub fn holdings(snapshot: &Snapshot) -> HashMap<&str, f64> {
    snapshot.assets().iter().map(|a| (a.name.as_str(), a.units)).collect()
}

/// Should `current` be recorded? Always yes when there is nothing to compare with.
pub fn has_changed(previous: Option<&Snapshot>, current: &Snapshot) -> bool {
    match previous {
        None => true,
        Some(prev) => !changes(prev, current).is_empty(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resized {
    pub name: String,
    pub from: f64,
    pub to: f64,
}

/// Holding-level differences, each list sorted by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Changes {
    pub added: Vec<(String, f64)>,
    pub removed: Vec<(String, f64)>,
    pub resized: Vec<Resized>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.resized.is_empty()
    }
}

pub fn changes(previous: &Snapshot, current: &Snapshot) -> Changes {
    let old = holdings(previous);
    let new = holdings(current);
    let mut out = Changes::default();

    for (&name, &units) in &new {
        match old.get(name) {
            None => out.added.push((s!(name), units)),
            Some(&was) if was != units => out.resized.push(Resized { name: s!(name), from: was, to: units }),
            Some(_) => {}
        }
    }
    for (&name, &units) in &old {
        if !new.contains_key(name) {
            out.removed.push((s!(name), units));
        }
    }

    out.added.sort_by(|a, b| a.0.cmp(&b.0));
    out.removed.sort_by(|a, b| a.0.cmp(&b.0));
    out.resized.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

impl fmt::Display for Changes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, units) in &self.added {
            writeln!(f, "+ {name}: {units}")?;
        }
        for (name, units) in &self.removed {
            writeln!(f, "- {name}: {units}")?;
        }
        for r in &self.resized {
            writeln!(f, "~ {}: {} -> {}", r.name, r.from, r.to)?;
        }
        Ok(())
    }
}
