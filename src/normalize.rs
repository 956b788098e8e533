//! Input normalization: lowercase, trim, whole-word typo correction

use ahash::AHashMap;
use regex::{Captures, Regex};

use crate::error::RuleError;

/// Common chat shorthand and misspellings, replaced as whole words.
pub const DEFAULT_TYPOS: &[(&str, &str)] = &[
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("thnx", "thanks"),
    ("tnx", "thanks"),
    ("ty", "thank you"),
    ("wat", "what"),
    ("wut", "what"),
    ("waht", "what"),
    ("whats", "what's"),
    ("wats", "what's"),
    ("hw", "how"),
    ("im", "i'm"),
    ("dont", "don't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("doesnt", "doesn't"),
    ("isnt", "isn't"),
    ("youre", "you're"),
    ("helo", "hello"),
    ("hellp", "help"),
    ("teh", "the"),
    ("yuo", "you"),
    ("becuase", "because"),
    ("becasue", "because"),
    ("wanna", "want to"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("abt", "about"),
    ("bc", "because"),
    ("cuz", "because"),
    ("idk", "i don't know"),
    ("privicy", "privacy"),
    ("pasword", "password"),
    ("acount", "account"),
];

/// Lowercases input and applies a whole-word substitution table
pub struct Normalizer {
    pattern: Option<Regex>,
    replacements: AHashMap<String, String>,
}

impl Normalizer {
    pub fn new(typos: &[(&str, &str)]) -> Result<Self, RuleError> {
        if typos.is_empty() {
            return Ok(Self {
                pattern: None,
                replacements: AHashMap::new(),
            });
        }

        let alternation = typos
            .iter()
            .map(|(from, _)| regex::escape(&from.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation)).map_err(|source| {
            RuleError::InvalidPattern {
                label: "typo map".to_string(),
                source,
            }
        })?;

        let replacements = typos
            .iter()
            .map(|(from, to)| (from.to_lowercase(), to.to_string()))
            .collect();

        Ok(Self {
            pattern: Some(pattern),
            replacements,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text
            .to_lowercase()
            .replace(['\u{2018}', '\u{2019}'], "'")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(&lowered, |caps: &Captures| {
                    let word = &caps[0];
                    self.replacements
                        .get(word)
                        .cloned()
                        .unwrap_or_else(|| word.to_string())
                })
                .into_owned(),
            None => lowered,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        // The built-in table is escaped literal text, so compilation cannot fail.
        Self::new(DEFAULT_TYPOS).expect("Invalid built-in typo table")
    }
}
