//! Intent rules, the priority table and the ordered pattern library

use ahash::AHashMap;
use tracing::warn;

use crate::error::RuleError;
use crate::predicate::{Predicate, RegexPredicate};
use crate::types::IntentLabel;

/// One (predicate, label) pair
pub struct IntentRule {
    pub label: IntentLabel,
    pub predicate: Box<dyn Predicate>,
}

impl IntentRule {
    pub fn new(label: IntentLabel, predicate: impl Predicate + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    /// Rule backed by a single regular expression
    pub fn regex(label: IntentLabel, pattern: &str) -> Result<Self, RuleError> {
        let predicate = RegexPredicate::new(label.as_str(), pattern)?;
        Ok(Self::new(label, predicate))
    }
}

/// Intent label to priority; higher wins, absent labels score 0
#[derive(Debug, Clone, Default)]
pub struct PriorityTable {
    scores: AHashMap<IntentLabel, u32>,
}

impl PriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: IntentLabel, priority: u32) {
        self.scores.insert(label, priority);
    }

    pub fn get(&self, label: &IntentLabel) -> u32 {
        self.scores.get(label).copied().unwrap_or(0)
    }

    pub fn contains(&self, label: &IntentLabel) -> bool {
        self.scores.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(IntentLabel, u32)> for PriorityTable {
    fn from_iter<I: IntoIterator<Item = (IntentLabel, u32)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Ordered rule list; order only matters for ties between equal priorities
#[derive(Default)]
pub struct PatternLibrary {
    rules: Vec<IntentRule>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: IntentRule) {
        self.rules.push(rule);
    }

    /// Add a rule if it compiled, otherwise log and skip it
    pub fn push_or_skip(&mut self, rule: Result<IntentRule, RuleError>) {
        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(e) => warn!(error = %e, "skipping intent rule"),
        }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Labels used by rules but missing from `priorities`
    pub fn unprioritized<'a>(&'a self, priorities: &'a PriorityTable) -> Vec<&'a IntentLabel> {
        self.rules
            .iter()
            .map(|rule| &rule.label)
            .filter(|label| !priorities.contains(label))
            .collect()
    }
}

impl FromIterator<IntentRule> for PatternLibrary {
    fn from_iter<I: IntoIterator<Item = IntentRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_priority_is_zero() {
        let table: PriorityTable = [(IntentLabel::from_static("A"), 40)].into_iter().collect();
        assert_eq!(table.get(&IntentLabel::from_static("A")), 40);
        assert_eq!(table.get(&IntentLabel::from_static("B")), 0);
    }

    #[test]
    fn test_bad_rule_skipped() {
        let mut library = PatternLibrary::new();
        library.push_or_skip(IntentRule::regex("GOOD".into(), r"\bhi\b"));
        library.push_or_skip(IntentRule::regex("BAD".into(), r"[unclosed"));
        assert_eq!(library.len(), 1);
        assert_eq!(library.rules()[0].label.as_str(), "GOOD");
    }

    #[test]
    fn test_unprioritized_labels() {
        let library: PatternLibrary = vec![
            IntentRule::regex("A".into(), "a").unwrap(),
            IntentRule::regex("B".into(), "b").unwrap(),
        ]
        .into_iter()
        .collect();
        let table: PriorityTable = [(IntentLabel::from_static("A"), 10)].into_iter().collect();

        let missing = library.unprioritized(&table);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].as_str(), "B");
    }
}
