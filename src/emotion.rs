//! Emotion classifier - decorative reaction image for the user's message
//!
//! Unlike the intent resolver there is no priority table here: rules are
//! checked top to bottom and the first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::RuleError;
use crate::predicate::{Predicate, RegexPredicate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Wave,
    Grateful,
    ThumbsUp,
    HeartEyes,
    Laughing,
    Sad,
    Angry,
    Scared,
    Confused,
    Surprised,
    EyeRoll,
    Goodbye,
    Sleepy,
    Hungry,
    Bored,
}

impl Reaction {
    /// Image id handed to the asset lookup
    pub fn image_id(&self) -> &'static str {
        match self {
            Reaction::Wave => "reaction_wave",
            Reaction::Grateful => "reaction_grateful",
            Reaction::ThumbsUp => "reaction_thumbs_up",
            Reaction::HeartEyes => "reaction_heart_eyes",
            Reaction::Laughing => "reaction_laughing",
            Reaction::Sad => "reaction_sad",
            Reaction::Angry => "reaction_angry",
            Reaction::Scared => "reaction_scared",
            Reaction::Confused => "reaction_confused",
            Reaction::Surprised => "reaction_surprised",
            Reaction::EyeRoll => "reaction_eye_roll",
            Reaction::Goodbye => "reaction_goodbye",
            Reaction::Sleepy => "reaction_sleepy",
            Reaction::Hungry => "reaction_hungry",
            Reaction::Bored => "reaction_bored",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.image_id())
    }
}

pub struct EmotionRule {
    pub reaction: Reaction,
    pub predicate: Box<dyn Predicate>,
}

impl EmotionRule {
    pub fn new(reaction: Reaction, predicate: impl Predicate + 'static) -> Self {
        Self {
            reaction,
            predicate: Box::new(predicate),
        }
    }

    pub fn regex(reaction: Reaction, pattern: &str) -> Result<Self, RuleError> {
        let predicate = RegexPredicate::new(reaction.image_id(), pattern)?;
        Ok(Self::new(reaction, predicate))
    }
}

#[derive(Default)]
pub struct EmotionClassifier {
    rules: Vec<EmotionRule>,
}

impl EmotionClassifier {
    pub fn new(rules: Vec<EmotionRule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: EmotionRule) {
        self.rules.push(rule);
    }

    pub fn push_or_skip(&mut self, rule: Result<EmotionRule, RuleError>) {
        match rule {
            Ok(rule) => self.rules.push(rule),
            Err(e) => warn!(error = %e, "skipping emotion rule"),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Reaction of the first rule matching normalized `text`
    pub fn classify(&self, text: &str) -> Option<Reaction> {
        if text.trim().is_empty() {
            return None;
        }

        self.rules.iter().find_map(|rule| match rule.predicate.evaluate(text) {
            Ok(Some(_)) => Some(rule.reaction),
            Ok(None) => None,
            Err(e) => {
                warn!(reaction = %rule.reaction, error = %e, "emotion rule failed, treating as no match");
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::FnPredicate;

    #[test]
    fn test_first_match_wins_over_specificity() {
        let classifier = EmotionClassifier::new(vec![
            EmotionRule::regex(Reaction::Grateful, r"\bthanks\b").unwrap(),
            EmotionRule::regex(Reaction::Confused, r"\bi'm (so |very )?confused\b").unwrap(),
        ]);
        assert_eq!(
            classifier.classify("thanks so much, i'm confused"),
            Some(Reaction::Grateful)
        );

        let reversed = EmotionClassifier::new(vec![
            EmotionRule::regex(Reaction::Confused, r"\bi'm (so |very )?confused\b").unwrap(),
            EmotionRule::regex(Reaction::Grateful, r"\bthanks\b").unwrap(),
        ]);
        assert_eq!(
            reversed.classify("thanks so much, i'm confused"),
            Some(Reaction::Confused)
        );
    }

    #[test]
    fn test_no_match_and_empty() {
        let classifier = EmotionClassifier::new(vec![
            EmotionRule::regex(Reaction::Wave, r"^hi\b").unwrap(),
        ]);
        assert_eq!(classifier.classify("what is this"), None);
        assert_eq!(classifier.classify(""), None);
    }

    #[test]
    fn test_failing_rule_skipped() {
        let failing = FnPredicate::new("fails", |_: &str| {
            Err(RuleError::Evaluation {
                label: "fails".to_string(),
                reason: "boom".to_string(),
            })
        });
        let classifier = EmotionClassifier::new(vec![
            EmotionRule::new(Reaction::Angry, failing),
            EmotionRule::regex(Reaction::Wave, r"^hi\b").unwrap(),
        ]);
        assert_eq!(classifier.classify("hi"), Some(Reaction::Wave));
    }

    #[test]
    fn test_serialized_name() {
        assert_eq!(serde_json::to_string(&Reaction::HeartEyes).unwrap(), "\"heart_eyes\"");
    }
}
