//! Secondary pattern library and heuristic fallback
//!
//! Consulted only when the intent resolver found nothing. The most specific
//! matching pattern wins, using the length of its source as the measure.

use rand::seq::SliceRandom;
use rand::RngCore;
use regex::Regex;
use tracing::debug;

use crate::context::ConversationContext;
use crate::error::RuleError;

/// Matches any input with at least one visible character
pub const CATCH_ALL_PATTERN: &str = r"\S";
/// Messages longer than this (in chars) get the acknowledgment reply
pub const DETAIL_THRESHOLD: usize = 50;
/// Placeholder replaced by a suggested topic in generic replies
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

pub struct FallbackPattern {
    source: String,
    regex: Regex,
    candidates: Vec<String>,
    catch_all: bool,
}

impl FallbackPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }
}

/// Which path produced a fallback reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    Pattern,
    CatchAll,
    Clarify,
    Detail,
    Empathy,
    Generic,
}

/// Ordered regex -> candidate replies
#[derive(Default)]
pub struct FallbackLibrary {
    patterns: Vec<FallbackPattern>,
}

impl FallbackLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pattern: &str, candidates: &[&str]) -> Result<(), RuleError> {
        self.push_pattern(pattern, candidates, false)
    }

    pub fn push_catch_all(&mut self, candidates: &[&str]) -> Result<(), RuleError> {
        self.push_pattern(CATCH_ALL_PATTERN, candidates, true)
    }

    fn push_pattern(&mut self, pattern: &str, candidates: &[&str], catch_all: bool) -> Result<(), RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            label: "fallback".to_string(),
            source,
        })?;
        self.patterns.push(FallbackPattern {
            source: pattern.to_string(),
            regex,
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            catch_all,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Longest matching pattern source; ties keep the earlier pattern
    pub fn best_match(&self, text: &str) -> Option<&FallbackPattern> {
        let mut best: Option<&FallbackPattern> = None;
        for pattern in &self.patterns {
            if pattern.candidates.is_empty() || !pattern.regex.is_match(text) {
                continue;
            }
            if best.map_or(true, |b| pattern.source.len() > b.source.len()) {
                best = Some(pattern);
            }
        }
        best
    }

    /// Reply from the best matching pattern, if any matched
    pub fn respond(
        &self,
        text: &str,
        context: &ConversationContext,
        rng: &mut dyn RngCore,
    ) -> Option<(String, FallbackKind)> {
        let pattern = self.best_match(text)?;
        debug!(pattern = %pattern.source, catch_all = pattern.catch_all, "fallback pattern matched");

        if pattern.catch_all {
            let fresh: Vec<&String> = pattern
                .candidates
                .iter()
                .filter(|c| !context.was_recent(c))
                .collect();
            let pick = if fresh.is_empty() {
                pattern.candidates.choose(rng)
            } else {
                fresh.choose(rng).copied()
            };
            return pick.map(|c| (c.clone(), FallbackKind::CatchAll));
        }

        pattern
            .candidates
            .choose(rng)
            .map(|c| (c.clone(), FallbackKind::Pattern))
    }
}

/// Replies used when no fallback pattern matches, checked in order:
/// question mark, long message, feel/think, then the generic suggestion.
pub struct Heuristics {
    pub clarify: Vec<String>,
    pub detail: Vec<String>,
    pub empathy: Vec<String>,
    /// Templates containing [`TOPIC_PLACEHOLDER`]
    pub generic: Vec<String>,
    pub topics: Vec<String>,
}

impl Heuristics {
    pub fn classify(text: &str) -> FallbackKind {
        if text.contains('?') {
            FallbackKind::Clarify
        } else if text.chars().count() > DETAIL_THRESHOLD {
            FallbackKind::Detail
        } else if text.contains("feel") || text.contains("think") {
            FallbackKind::Empathy
        } else {
            FallbackKind::Generic
        }
    }

    pub fn respond(&self, text: &str, rng: &mut dyn RngCore) -> (String, FallbackKind) {
        let kind = Self::classify(text);
        let pool = match kind {
            FallbackKind::Clarify => &self.clarify,
            FallbackKind::Detail => &self.detail,
            FallbackKind::Empathy => &self.empathy,
            _ => &self.generic,
        };

        let template = pool
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "Ask me about {topic}!".to_string());
        let topic = self
            .topics
            .choose(rng)
            .map(String::as_str)
            .unwrap_or("this site");

        (template.replace(TOPIC_PLACEHOLDER, topic), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn heuristics() -> Heuristics {
        Heuristics {
            clarify: vec!["clarify".to_string()],
            detail: vec!["detail".to_string()],
            empathy: vec!["empathy".to_string()],
            generic: vec!["ask about {topic}".to_string()],
            topics: vec!["privacy".to_string()],
        }
    }

    #[test]
    fn test_longest_pattern_wins() {
        let mut library = FallbackLibrary::new();
        library.push_catch_all(&["anything"]).unwrap();
        library.push(r"\bcat\b", &["short"]).unwrap();
        library.push(r"\bmy cat\b", &["long"]).unwrap();

        assert_eq!(library.best_match("my cat sleeps").unwrap().source(), r"\bmy cat\b");
        assert!(library.best_match("xyz").unwrap().is_catch_all());
        assert!(library.best_match("   ").is_none());
    }

    #[test]
    fn test_catch_all_prefers_fresh_replies() {
        let mut library = FallbackLibrary::new();
        library.push_catch_all(&["one", "two", "three", "four"]).unwrap();
        let mut context = ConversationContext::with_history_limit(3);
        for reply in ["one", "two", "three"] {
            context.remember_response(reply);
        }
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            let (reply, kind) = library.respond("blah", &context, &mut rng).unwrap();
            assert_eq!(reply, "four");
            assert_eq!(kind, FallbackKind::CatchAll);
        }
    }

    #[test]
    fn test_heuristic_order() {
        assert_eq!(Heuristics::classify("why though?"), FallbackKind::Clarify);
        assert_eq!(
            Heuristics::classify("a long message without any question mark at all, honestly"),
            FallbackKind::Detail
        );
        assert_eq!(Heuristics::classify("i feel odd"), FallbackKind::Empathy);
        assert_eq!(Heuristics::classify("zzz"), FallbackKind::Generic);
        assert_eq!(Heuristics::classify(""), FallbackKind::Generic);
    }

    #[test]
    fn test_generic_fills_topic() {
        let mut rng = StdRng::seed_from_u64(5);
        let (reply, kind) = heuristics().respond("zzz", &mut rng);
        assert_eq!(reply, "ask about privacy");
        assert_eq!(kind, FallbackKind::Generic);
    }
}
