//! Name-based lookup of coefficient tables.
//!
//! The registry maps canonical names and aliases to tables so that front ends
//! and configuration files can select a method by name. Lookups hand out a
//! fresh copy of the table; the registry itself is never mutated by use.

use std::collections::{BTreeMap, BTreeSet};

use hooke_core::MethodCoefficients;
use thiserror::Error;

use crate::methods;

/// Returned when a name matches no registered table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method '{name}'; available methods: {}", .available.join(", "))]
pub struct UnknownMethod {
    pub name: String,
    pub available: Vec<String>,
}

/// Registry of coefficient tables indexed by name and alias.
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    tables: BTreeMap<String, MethodCoefficients>,
    aliases: BTreeMap<String, String>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the built-in tables from [`methods`].
    ///
    /// Aliases: `verlet` for `stormer`, `etshm6` for `extended-numerov`.
    #[must_use]
    pub fn with_standard_methods(mut self) -> Self {
        self.register(methods::stormer(), &["verlet"]);
        self.register(methods::numerov(), &[]);
        self.register(methods::extended_numerov(), &["etshm6"]);
        self
    }

    /// Registers a single table with optional aliases.
    ///
    /// Returns self for method chaining.
    #[must_use]
    pub fn with_method(mut self, table: MethodCoefficients, aliases: &[&str]) -> Self {
        self.register(table, aliases);
        self
    }

    /// Registers a table under its own name and the given aliases.
    ///
    /// A later registration under the same name replaces the earlier table.
    pub fn register(&mut self, table: MethodCoefficients, aliases: &[&str]) {
        let name = table.name().to_string();
        for alias in aliases {
            self.aliases.insert((*alias).to_string(), name.clone());
        }
        self.tables.insert(name, table);
    }

    /// Returns a copy of the table registered under `name` or an alias.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMethod`] listing the available names if nothing
    /// matches.
    pub fn get(&self, name: &str) -> Result<MethodCoefficients, UnknownMethod> {
        let canonical = self.aliases.get(name).map_or(name, String::as_str);

        self.tables
            .get(canonical)
            .cloned()
            .ok_or_else(|| UnknownMethod {
                name: name.to_string(),
                available: self.list_available(),
            })
    }

    /// Canonical names, sorted.
    #[must_use]
    pub fn list_available(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// `(alias, canonical name)` pairs, sorted by alias.
    #[must_use]
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        self.aliases
            .iter()
            .map(|(alias, name)| (alias.clone(), name.clone()))
            .collect()
    }

    /// Distinct claimed orders of the registered tables.
    #[must_use]
    pub fn orders(&self) -> BTreeSet<u32> {
        self.tables.values().map(MethodCoefficients::order).collect()
    }
}
