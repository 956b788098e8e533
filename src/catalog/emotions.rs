//! Built-in emotion rules, in priority order

use crate::emotion::{EmotionClassifier, EmotionRule, Reaction};
use crate::predicate::RegexPredicate;

const SARCASM: &str = r"\b(?:yeah right|sure(?: thing)?,? buddy|as if|oh great|wow,? thanks a lot)\b";

/// Order matters: the first matching rule decides the reaction.
const RULES: &[(Reaction, &str)] = &[
    (Reaction::Wave, r"^(?:hi|hello|hey|howdy|yo|hiya|greetings|good (?:morning|afternoon|evening))\b"),
    (Reaction::Grateful, r"\b(?:thanks|thank you|thank u|appreciate it|much appreciated)\b"),
    // affirmative is inserted here, see `classifier`
    (Reaction::HeartEyes, r"\b(?:love (?:it|this|you|huddle)|amazing|awesome|beautiful|adorable|you'?re the best)\b"),
    (Reaction::Laughing, r"\b(?:(?:ha){2,}h?|(?:he){2,}|lol|lmao|rofl|that'?s funny|hilarious)\b"),
    (Reaction::Sad, r"\b(?:sad|unhappy|depressed|crying|heartbroken|miserable|down)\b"),
    (Reaction::Angry, r"\b(?:angry|mad|furious|annoyed|hate|pissed)\b"),
    (Reaction::Scared, r"\b(?:scared|afraid|terrified|frightened|nervous|anxious)\b"),
    (Reaction::Confused, r"\b(?:confused|confusing|don'?t understand|what do you mean|huh)\b"),
    (Reaction::Surprised, r"\b(?:wow|whoa|omg|no way|really\?|seriously\?)"),
    (Reaction::EyeRoll, SARCASM),
    (Reaction::Goodbye, r"\b(?:bye|goodbye|see you|see ya|later|good night|got to go)\b"),
    (Reaction::Sleepy, r"\b(?:sleepy|tired|exhausted|yawn)\b"),
    (Reaction::Hungry, r"\b(?:hungry|starving|snack|food)\b"),
    (Reaction::Bored, r"\b(?:bored|boring|nothing to do)\b"),
];

const AFFIRMATIVE: &str = r"^(?:yes|yeah|yep|yup|sure|ok|okay|of course|absolutely|definitely|sounds good)\b";

pub fn classifier() -> EmotionClassifier {
    let mut classifier = EmotionClassifier::default();
    for (index, (reaction, pattern)) in RULES.iter().enumerate() {
        classifier.push_or_skip(EmotionRule::regex(*reaction, pattern));
        if index == 1 {
            let affirmative = RegexPredicate::new("affirmative", AFFIRMATIVE)
                .and_then(|p| p.unless("affirmative", SARCASM))
                .map(|p| EmotionRule::new(Reaction::ThumbsUp, p));
            classifier.push_or_skip(affirmative);
        }
    }
    classifier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(classifier().len(), RULES.len() + 1);
    }

    #[test]
    fn test_gratitude_before_confusion() {
        assert_eq!(
            classifier().classify("thanks so much, i'm confused"),
            Some(Reaction::Grateful)
        );
    }

    #[test]
    fn test_reactions() {
        let classifier = classifier();
        let cases = [
            ("hello there", Reaction::Wave),
            ("yes please", Reaction::ThumbsUp),
            ("i love it", Reaction::HeartEyes),
            ("hahaha", Reaction::Laughing),
            ("i'm so sad", Reaction::Sad),
            ("this makes me mad", Reaction::Angry),
            ("i'm scared", Reaction::Scared),
            ("wow", Reaction::Surprised),
            ("as if", Reaction::EyeRoll),
            ("bye", Reaction::Goodbye),
            ("i'm hungry", Reaction::Hungry),
        ];
        for (text, expected) in cases {
            assert_eq!(classifier.classify(text), Some(expected), "{}", text);
        }
    }

    #[test]
    fn test_sarcastic_agreement_is_not_affirmative() {
        assert_eq!(classifier().classify("sure, buddy"), Some(Reaction::EyeRoll));
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(classifier().classify("what is huddle"), None);
    }
}
