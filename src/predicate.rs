//! Rule predicates
//!
//! A predicate tests normalized input text. The resolver only sees the
//! [`Predicate`] trait, so regex, fuzzy and compound strategies can be mixed
//! in one library.

use regex::Regex;

use crate::entities::NameExtractor;
use crate::error::RuleError;
use crate::similarity::calculate_similarity;
use crate::types::Entity;

/// `Some(entities)` when the predicate matches, `None` when it does not
pub type Verdict = Option<Vec<Entity>>;

pub trait Predicate: Send + Sync {
    fn evaluate(&self, text: &str) -> Result<Verdict, RuleError>;

    /// Pattern source, used for logging and specificity ranking
    fn source(&self) -> &str;
}

/// Regex test with an optional exclusion pattern
pub struct RegexPredicate {
    source: String,
    regex: Regex,
    unless: Option<Regex>,
}

impl RegexPredicate {
    pub fn new(label: &str, pattern: &str) -> Result<Self, RuleError> {
        Ok(Self {
            source: pattern.to_string(),
            regex: compile(label, pattern)?,
            unless: None,
        })
    }

    /// Reject the match when `pattern` also matches
    pub fn unless(mut self, label: &str, pattern: &str) -> Result<Self, RuleError> {
        self.unless = Some(compile(label, pattern)?);
        Ok(self)
    }
}

impl Predicate for RegexPredicate {
    fn evaluate(&self, text: &str) -> Result<Verdict, RuleError> {
        if !self.regex.is_match(text) {
            return Ok(None);
        }
        if let Some(unless) = &self.unless {
            if unless.is_match(text) {
                return Ok(None);
            }
        }
        Ok(Some(Vec::new()))
    }

    fn source(&self) -> &str {
        &self.source
    }
}

/// Matches when the input is close enough to any of a set of phrases
pub struct FuzzyPredicate {
    source: String,
    phrases: Vec<String>,
    threshold: f64,
}

impl FuzzyPredicate {
    pub fn new(phrases: &[&str], threshold: f64) -> Self {
        Self {
            source: phrases.join(" | "),
            phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
            threshold,
        }
    }
}

impl Predicate for FuzzyPredicate {
    fn evaluate(&self, text: &str) -> Result<Verdict, RuleError> {
        let hit = self
            .phrases
            .iter()
            .any(|phrase| calculate_similarity(text, phrase) >= self.threshold);
        Ok(hit.then(Vec::new))
    }

    fn source(&self) -> &str {
        &self.source
    }
}

/// Self-introduction grammar plus the false-positive exclusion list
pub struct NamePredicate {
    extractor: NameExtractor,
}

impl NamePredicate {
    pub fn new(extractor: NameExtractor) -> Self {
        Self { extractor }
    }
}

impl Default for NamePredicate {
    fn default() -> Self {
        Self::new(NameExtractor::new())
    }
}

impl Predicate for NamePredicate {
    fn evaluate(&self, text: &str) -> Result<Verdict, RuleError> {
        Ok(self.extractor.extract(text).map(|entity| vec![entity]))
    }

    fn source(&self) -> &str {
        "self-introduction"
    }
}

/// Arbitrary test function
pub struct FnPredicate<F> {
    source: String,
    test: F,
}

impl<F> FnPredicate<F>
where
    F: Fn(&str) -> Result<bool, RuleError> + Send + Sync,
{
    pub fn new(source: impl Into<String>, test: F) -> Self {
        Self {
            source: source.into(),
            test,
        }
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&str) -> Result<bool, RuleError> + Send + Sync,
{
    fn evaluate(&self, text: &str) -> Result<Verdict, RuleError> {
        Ok((self.test)(text)?.then(Vec::new))
    }

    fn source(&self) -> &str {
        &self.source
    }
}

fn compile(label: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        label: label.to_string(),
        source,
    })
}
