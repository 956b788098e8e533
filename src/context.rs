//! Per-session conversation memory

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::types::IntentLabel;

/// Label suffixes that name a topic, e.g. `PRIVACY_INFO` -> "privacy"
const TOPIC_SUFFIXES: &[&str] = &["_INFO", "_FACT"];

/// Short-lived state carried between turns of one conversation
///
/// Owned by exactly one session and threaded through each turn; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationContext {
    pub last_intent: Option<IntentLabel>,
    pub topic: Option<String>,
    pub user_name: Option<String>,
    pub user_interests: BTreeSet<String>,
    /// Most recent fallback replies, oldest first
    pub recent_responses: VecDeque<String>,
    /// Last reply shown, whichever path produced it
    pub last_reply: Option<String>,
    pub history_limit: usize,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            last_intent: None,
            topic: None,
            user_name: None,
            user_interests: BTreeSet::new(),
            recent_responses: VecDeque::with_capacity(history_limit + 1),
            last_reply: None,
            history_limit: history_limit.max(1),
        }
    }

    /// Push a fallback reply, dropping the oldest beyond the limit
    pub fn remember_response(&mut self, response: &str) {
        self.recent_responses.push_back(response.to_string());
        while self.recent_responses.len() > self.history_limit.max(1) {
            self.recent_responses.pop_front();
        }
    }

    pub fn was_recent(&self, response: &str) -> bool {
        self.recent_responses.iter().any(|r| r == response)
    }

    /// Bookkeeping after a reply has been chosen for `intent`
    pub fn record_turn(&mut self, intent: Option<&IntentLabel>, interests: &[&str]) {
        self.last_intent = intent.cloned();
        if let Some(topic) = intent.and_then(derive_topic) {
            self.topic = Some(topic);
        }
        self.user_interests
            .extend(interests.iter().map(|tag| tag.to_string()));
    }
}

/// Topic named by a label's conventional suffix, if it has one
pub fn derive_topic(label: &IntentLabel) -> Option<String> {
    TOPIC_SUFFIXES.iter().find_map(|suffix| {
        label
            .as_str()
            .strip_suffix(suffix)
            .filter(|stem| !stem.is_empty())
            .map(|stem| stem.to_lowercase().replace('_', " "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut context = ConversationContext::with_history_limit(3);
        for reply in ["one", "two", "three", "four"] {
            context.remember_response(reply);
        }

        assert_eq!(
            context.recent_responses.iter().collect::<Vec<_>>(),
            vec!["two", "three", "four"]
        );
        assert!(!context.was_recent("one"));
    }

    #[test]
    fn test_derive_topic() {
        assert_eq!(
            derive_topic(&IntentLabel::from_static("PRIVACY_INFO")).as_deref(),
            Some("privacy")
        );
        assert_eq!(
            derive_topic(&IntentLabel::from_static("MESSAGE_BOARD_INFO")).as_deref(),
            Some("message board")
        );
        assert_eq!(derive_topic(&IntentLabel::from_static("GREETING")), None);
        assert_eq!(derive_topic(&IntentLabel::from_static("_INFO")), None);
    }

    #[test]
    fn test_record_turn_keeps_topic_without_suffix() {
        let mut context = ConversationContext::new();
        context.record_turn(Some(&IntentLabel::from_static("SPACE_FACT")), &["space"]);
        context.record_turn(Some(&IntentLabel::from_static("WHY")), &[]);

        assert_eq!(context.last_intent.as_ref().unwrap().as_str(), "WHY");
        assert_eq!(context.topic.as_deref(), Some("space"));
        assert!(context.user_interests.contains("space"));
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        let context: ConversationContext = serde_json::from_str(r#"{"user_name": "Jordan"}"#).unwrap();
        assert_eq!(context.user_name.as_deref(), Some("Jordan"));
        assert_eq!(context.history_limit, DEFAULT_HISTORY_LIMIT);
    }
}
