//! Rule trait and registry for demodel rewrite rules

use demodel_core::{apply_edits, Edit, EditError};
use std::collections::HashSet;

/// A rewrite rule that detects one legacy code shape and replaces it
pub trait Rule: Send + Sync {
    /// The unique identifier for this rule (e.g., "set_call")
    fn name(&self) -> &'static str;

    /// A short description of what this rule does
    fn description(&self) -> &'static str;

    /// Check source text and return the edits this rule would apply
    fn check(&self, source: &str) -> Vec<Edit>;
}

/// Match count contributed by a single rule during one pipeline run
#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub rule: &'static str,
    pub count: usize,
}

/// Result of running the rewrite pipeline over one source text
///
/// `count` is always the sum of the per-rule counts in `matches`.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The rewritten source text
    pub text: String,
    /// Total number of constructs rewritten
    pub count: usize,
    /// Per-rule breakdown, in pipeline order, zero-count rules omitted
    pub matches: Vec<RuleMatch>,
}

/// Registry of all available rewrite rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules, in pipeline order
    pub fn new() -> Self {
        let mut registry = Self { rules: Vec::new() };

        registry.register(Box::new(super::base_import::BaseImportRule));
        registry.register(Box::new(super::superclass::SuperclassRule));
        registry.register(Box::new(super::set_call::SetCallRule));
        registry.register(Box::new(super::get_call::GetCallRule));

        registry
    }

    /// Register a new rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all rule names
    pub fn all_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Get rules filtered by enabled names, keeping registration order
    pub fn get_enabled(&self, enabled: &HashSet<String>) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .filter(|r| enabled.contains(r.name()))
            .map(|r| r.as_ref())
            .collect()
    }

    /// Get all rules with their descriptions (for --list-rules)
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .map(|r| (r.name(), r.description()))
            .collect()
    }

    /// Run the enabled rules as a pipeline.
    ///
    /// Each rule checks the output of the previous rule's application, so
    /// counts are per-occurrence and never merged across rules.
    pub fn rewrite_all(
        &self,
        source: &str,
        enabled: &HashSet<String>,
    ) -> Result<Rewrite, EditError> {
        let mut text = source.to_string();
        let mut count = 0;
        let mut matches = Vec::new();

        for rule in self.get_enabled(enabled) {
            let edits = rule.check(&text);
            if edits.is_empty() {
                continue;
            }

            count += edits.len();
            matches.push(RuleMatch {
                rule: rule.name(),
                count: edits.len(),
            });
            text = apply_edits(&text, &edits)?;
        }

        Ok(Rewrite {
            text,
            count,
            matches,
        })
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
