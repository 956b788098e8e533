//! Intent resolver - priority-ranked matching of user input against the rule library

use tracing::{debug, trace, warn};

use crate::normalize::Normalizer;
use crate::rules::{PatternLibrary, PriorityTable};
use crate::types::{IntentLabel, IntentMatch};

/// Evaluates every rule and keeps the highest-priority match
///
/// Resolution is pure: the same text always yields the same label.
pub struct IntentResolver {
    library: PatternLibrary,
    priorities: PriorityTable,
    normalizer: Normalizer,
}

impl IntentResolver {
    pub fn new(library: PatternLibrary, priorities: PriorityTable, normalizer: Normalizer) -> Self {
        for label in library.unprioritized(&priorities) {
            warn!(intent = %label, "intent has no priority, treating as 0");
        }
        Self {
            library,
            priorities,
            normalizer,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    pub fn rule_count(&self) -> usize {
        self.library.len()
    }

    /// Label of the best match, if any rule matched
    pub fn resolve(&self, text: &str) -> Option<IntentLabel> {
        self.resolve_match(text).map(|m| m.label)
    }

    /// Best match with the entities its predicate captured
    pub fn resolve_match(&self, text: &str) -> Option<IntentMatch> {
        let normalized = self.normalizer.normalize(text);
        self.resolve_normalized(&normalized, text)
    }

    /// Resolve text that has already been through the normalizer
    pub fn resolve_normalized(&self, normalized: &str, original: &str) -> Option<IntentMatch> {
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<IntentMatch> = None;

        for rule in self.library.rules() {
            let entities = match rule.predicate.evaluate(normalized) {
                Ok(Some(entities)) => entities,
                Ok(None) => continue,
                Err(e) => {
                    warn!(intent = %rule.label, error = %e, "rule failed, treating as no match");
                    continue;
                }
            };

            let priority = self.priorities.get(&rule.label);
            trace!(intent = %rule.label, priority, pattern = rule.predicate.source(), "rule matched");

            // Strictly greater: the first rule seen at the top priority keeps the win
            if best.as_ref().map_or(true, |b| priority > b.priority) {
                let mut matched = IntentMatch::new(rule.label.clone(), priority, original.to_string());
                matched.entities = entities;
                best = Some(matched);
            }
        }

        if let Some(m) = &best {
            debug!(intent = %m.label, priority = m.priority, "resolved intent");
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::predicate::FnPredicate;
    use crate::rules::IntentRule;

    fn resolver(rules: Vec<IntentRule>, priorities: &[(&'static str, u32)]) -> IntentResolver {
        let priorities = priorities
            .iter()
            .map(|(label, p)| (IntentLabel::from_static(label), *p))
            .collect();
        IntentResolver::new(
            rules.into_iter().collect(),
            priorities,
            Normalizer::new(&[]).unwrap(),
        )
    }

    #[test]
    fn test_higher_priority_wins() {
        let resolver = resolver(
            vec![
                IntentRule::regex("GENERIC_QUESTION".into(), r"\bcow\b").unwrap(),
                IntentRule::regex("SPECIFIC_JOKE".into(), r"cow with no legs").unwrap(),
            ],
            &[("GENERIC_QUESTION", 80), ("SPECIFIC_JOKE", 95)],
        );

        assert_eq!(
            resolver.resolve("a cow with no legs").unwrap().as_str(),
            "SPECIFIC_JOKE"
        );
    }

    #[test]
    fn test_tie_goes_to_first_rule() {
        let resolver = resolver(
            vec![
                IntentRule::regex("FIRST".into(), "hello").unwrap(),
                IntentRule::regex("SECOND".into(), "hello").unwrap(),
            ],
            &[("FIRST", 50), ("SECOND", 50)],
        );

        assert_eq!(resolver.resolve("hello").unwrap().as_str(), "FIRST");
    }

    #[test]
    fn test_missing_priority_counts_as_zero() {
        let resolver = resolver(
            vec![
                IntentRule::regex("UNRANKED".into(), "hello").unwrap(),
                IntentRule::regex("RANKED".into(), "hello").unwrap(),
            ],
            &[("RANKED", 1)],
        );

        assert_eq!(resolver.resolve("hello").unwrap().as_str(), "RANKED");
    }

    #[test]
    fn test_no_match() {
        let resolver = resolver(
            vec![IntentRule::regex("GREETING".into(), r"\bhello\b").unwrap()],
            &[("GREETING", 40)],
        );

        assert!(resolver.resolve("completely unrelated query").is_none());
        assert!(resolver.resolve("").is_none());
        assert!(resolver.resolve("   ").is_none());
    }

    #[test]
    fn test_failing_rule_is_skipped() {
        let failing = FnPredicate::new("always fails", |_: &str| {
            Err(RuleError::Evaluation {
                label: "BROKEN".to_string(),
                reason: "boom".to_string(),
            })
        });
        let resolver = resolver(
            vec![
                IntentRule::new("BROKEN".into(), failing),
                IntentRule::regex("GREETING".into(), "hello").unwrap(),
            ],
            &[("BROKEN", 100), ("GREETING", 40)],
        );

        assert_eq!(resolver.resolve("hello").unwrap().as_str(), "GREETING");
    }

    #[test]
    fn test_deterministic() {
        let resolver = resolver(
            vec![
                IntentRule::regex("A".into(), "x").unwrap(),
                IntentRule::regex("B".into(), "x").unwrap(),
            ],
            &[("A", 10), ("B", 10)],
        );

        let first = resolver.resolve("x");
        for _ in 0..20 {
            assert_eq!(resolver.resolve("x"), first);
        }
    }
}
