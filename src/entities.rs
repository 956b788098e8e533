//! Entity extraction from user input
//!
//! Currently one entity kind: the user's name from a self-introduction.

use ahash::AHashSet;
use regex::Regex;

use crate::types::Entity;

pub const NAME_ENTITY: &str = "name";

/// Words that follow "i am" / "i'm" without being a name.
pub const DEFAULT_NAME_EXCLUSIONS: &[&str] = &[
    "a", "an", "the", "not", "so", "very", "really", "just", "also", "still", "too",
    "here", "back", "there", "home", "in", "on", "at", "from", "with", "into", "out",
    "kinda", "bit", "pretty", "quite", "super", "totally", "feeling",
    "fine", "good", "great", "ok", "okay", "alright", "well", "better", "awesome", "cool",
    "fantastic", "amazing", "glad", "excited",
    "happy", "sad", "down", "depressed", "unhappy", "upset", "heartbroken", "crying",
    "angry", "mad", "furious", "annoyed", "frustrated", "pissed",
    "tired", "sleepy", "exhausted", "worn", "hungry", "starving", "thirsty",
    "bored", "lonely", "alone", "stressed", "anxious", "nervous", "overwhelmed", "scared",
    "afraid", "worried", "confused", "lost", "stuck", "sick", "ill", "hurt", "sorry",
    "curious", "interested", "busy", "free", "done", "ready", "sure", "new", "old",
    "doing", "going", "getting", "trying", "looking", "thinking", "wondering",
    "talking", "asking", "grateful", "thankful", "serious", "kidding", "joking",
    "human", "real", "bot", "robot", "your", "you", "my", "gonna", "about", "literally",
];

/// Extracts the user's name from self-introductions
///
/// Matches "my name is X", "call me X" anywhere in the text, "i am X" and
/// "i'm X" at the start of the message (optionally after a greeting), and
/// "this is X" only right after a greeting. A captured token in the
/// exclusion list is discarded.
pub struct NameExtractor {
    patterns: Vec<Regex>,
    exclusions: AHashSet<String>,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self::with_exclusions(DEFAULT_NAME_EXCLUSIONS)
    }

    pub fn with_exclusions(exclusions: &[&str]) -> Self {
        // Fixed grammar, covered by the tests below
        let patterns = vec![
            Regex::new(r"\b(?:my name is|my name's|name's|call me)\s+([a-z][a-z'-]*)")
                .expect("Invalid regex pattern"),
            Regex::new(r"^(?:(?:hi|hello|hey)[,!.]*\s+)?(?:i am|i'm)\s+([a-z][a-z'-]*)")
                .expect("Invalid regex pattern"),
            // "this is great" is not an introduction, "hi, this is sam" is
            Regex::new(r"^(?:hi|hello|hey)[,!.]*\s+this is\s+([a-z][a-z'-]*)")
                .expect("Invalid regex pattern"),
        ];

        Self {
            patterns,
            exclusions: exclusions.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Extract a name entity from normalized (lowercased) text
    pub fn extract(&self, text: &str) -> Option<Entity> {
        for pattern in &self.patterns {
            let Some(cap) = pattern.captures(text) else {
                continue;
            };
            let Some(token) = cap.get(1) else {
                continue;
            };

            let raw = token.as_str().trim_end_matches(['\'', '-']);
            if raw.is_empty() || self.is_excluded(raw) {
                continue;
            }

            return Some(Entity::new(
                NAME_ENTITY.to_string(),
                title_case(raw),
                raw.to_string(),
                token.start(),
                token.start() + raw.len(),
            ));
        }

        None
    }

    pub fn is_excluded(&self, word: &str) -> bool {
        self.exclusions.contains(&word.to_lowercase())
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
