//! Built-in fallback patterns and heuristic replies

use tracing::warn;

use crate::fallback::{FallbackLibrary, Heuristics};

const PATTERNS: &[(&str, &[&str])] = &[
    (r"\b(?:can|could|will|would) you\b", &[
        "I'm just a scripted assistant, so my skills are limited. 🤖 Try asking me about Huddle!",
        "Probably not, but I can tell you all about Huddle! 🤖",
    ]),
    (r"\bdo you (?:like|love|enjoy)\b", &[
        "I don't have favorites the way you do, but I like chatting with you! 😊",
        "Good question! 😊 I mostly like answering questions about Huddle.",
    ]),
    (r"\b(?:i like|i love|i enjoy)\b", &[
        "That's cool! 😊 You could find others who like that on Huddle's message board.",
        "Nice taste! 😊 Tell me more.",
    ]),
    (r"\bwhat is\b", &[
        "Hmm, I don't know that one. 🤔 I'm best with questions about Huddle.",
    ]),
    (r"\b(?:lol|lmao|rofl)\b", &[
        "Glad you're having fun! 😄",
    ]),
    (r"\b(?:i don't know|not sure|dunno)\b", &[
        "That's okay! 🤔 Want some ideas? Ask me for a joke or a fun fact.",
    ]),
];

const CATCH_ALL: &[&str] = &[
    "I'm not sure I understand. 🤔 Could you rephrase that?",
    "Hmm, that one's beyond me. 🤔 Try asking about Huddle's features!",
    "I didn't quite catch that. 🤔 Want to hear a joke instead?",
    "Interesting! 🤔 I'm still a simple assistant, though. Ask me about privacy, pricing or downloads.",
    "Sorry, I don't know how to answer that yet. 🤔 Type \"help\" to see what I can do.",
];

/// Patterns plus, when `catch_all` is set, the guaranteed match for any
/// visible input
pub fn library(catch_all: bool) -> FallbackLibrary {
    let mut library = FallbackLibrary::new();
    for (pattern, candidates) in PATTERNS {
        if let Err(e) = library.push(pattern, candidates) {
            warn!(pattern, error = %e, "skipping fallback pattern");
        }
    }
    if catch_all {
        if let Err(e) = library.push_catch_all(CATCH_ALL) {
            warn!(error = %e, "catch-all fallback unavailable");
        }
    }
    library
}

pub fn heuristics(topics: &[String]) -> Heuristics {
    Heuristics {
        clarify: owned(&[
            "That's a great question! 🤔 I'm not sure, but the Huddle FAQ might know.",
            "Hmm, I don't know the answer to that one. 🤔",
        ]),
        detail: owned(&[
            "Thanks for sharing all that! 💬 I'm a simple assistant, but I read every word.",
            "That's a lot to think about! 💬 The Huddle community board might be a good place for it.",
        ]),
        empathy: owned(&[
            "Feelings and thoughts matter. 🤗 Thanks for telling me.",
            "I hear you. 🤗 Want to talk about something fun to take your mind off it?",
        ]),
        generic: owned(&[
            "Ask me about {topic}! 💬",
            "Not sure what to say? 💬 Try asking me about {topic}.",
        ]),
        topics: topics.to_vec(),
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ConversationContext;
    use crate::fallback::FallbackKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(library(true).len(), PATTERNS.len() + 1);
        assert_eq!(library(false).len(), PATTERNS.len());
    }

    #[test]
    fn test_catch_all_pool_exceeds_history() {
        assert!(CATCH_ALL.len() > crate::config::DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_specific_pattern_beats_catch_all() {
        let library = library(true);
        let mut rng = StdRng::seed_from_u64(9);
        let context = ConversationContext::new();

        let (_, kind) = library.respond("can you fly", &context, &mut rng).unwrap();
        assert_eq!(kind, FallbackKind::Pattern);
        let (_, kind) = library.respond("qwerty", &context, &mut rng).unwrap();
        assert_eq!(kind, FallbackKind::CatchAll);
    }
}
