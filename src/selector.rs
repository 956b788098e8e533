//! Response selector - turns a resolved intent (or none) into reply text

use rand::RngCore;
use tracing::{debug, warn};

use crate::context::ConversationContext;
use crate::entities::NAME_ENTITY;
use crate::fallback::{FallbackKind, FallbackLibrary, Heuristics};
use crate::responses::{FollowUpTable, GenerateInput, InterestTable, ResponseTable};
use crate::types::{IntentLabel, IntentMatch};

/// Reply text plus how it was produced
#[derive(Debug, Clone)]
pub struct Selection {
    pub text: String,
    /// Intent whose entry produced the text; `None` on the fallback path
    pub answered: Option<IntentLabel>,
    pub fallback: Option<FallbackKind>,
    pub context: ConversationContext,
}

pub struct ResponseSelector {
    responses: ResponseTable,
    follow_ups: FollowUpTable,
    interests: InterestTable,
    fallback: FallbackLibrary,
    heuristics: Heuristics,
    /// Intent whose `name` entity is stored as the user's name
    name_intent: Option<IntentLabel>,
}

impl ResponseSelector {
    pub fn new(
        responses: ResponseTable,
        follow_ups: FollowUpTable,
        interests: InterestTable,
        fallback: FallbackLibrary,
        heuristics: Heuristics,
    ) -> Self {
        Self {
            responses,
            follow_ups,
            interests,
            fallback,
            heuristics,
            name_intent: None,
        }
    }

    pub fn with_name_intent(mut self, label: IntentLabel) -> Self {
        self.name_intent = Some(label);
        self
    }

    pub fn responses(&self) -> &ResponseTable {
        &self.responses
    }

    /// Choose a reply for `matched` and thread the context forward
    pub fn respond(
        &self,
        matched: Option<&IntentMatch>,
        text: &str,
        mut context: ConversationContext,
        rng: &mut dyn RngCore,
    ) -> Selection {
        if let Some(m) = matched {
            if self.name_intent.as_ref() == Some(&m.label) {
                if let Some(name) = m.entity(NAME_ENTITY) {
                    context.user_name = Some(name.value.clone());
                }
            }

            if let Some((reply, answered)) = self.intent_reply(&m.label, text, &context, rng) {
                context.record_turn(Some(&answered), self.interests.tags(&answered));
                context.last_reply = Some(reply.clone());
                return Selection {
                    text: reply,
                    answered: Some(answered),
                    fallback: None,
                    context,
                };
            }
            warn!(intent = %m.label, "no response entry, using fallback");
        }

        let (reply, kind) = self
            .fallback
            .respond(text, &context, rng)
            .unwrap_or_else(|| self.heuristics.respond(text, rng));
        debug!(kind = ?kind, "fallback reply");

        context.remember_response(&reply);
        context.record_turn(None, &[]);
        context.last_reply = Some(reply.clone());
        Selection {
            text: reply,
            answered: None,
            fallback: Some(kind),
            context,
        }
    }

    /// Reply for a resolved intent, with the intent that actually answered
    fn intent_reply(
        &self,
        label: &IntentLabel,
        text: &str,
        context: &ConversationContext,
        rng: &mut dyn RngCore,
    ) -> Option<(String, IntentLabel)> {
        let input = GenerateInput { text, context };

        if self.follow_ups.is_follow_up(label) {
            if let Some(prior) = &context.last_intent {
                if let Some(entry) = self.follow_ups.lookup(prior, label) {
                    return Some((entry.render(&input, rng), label.clone()));
                }

                // "tell me more" re-answers the previous intent
                if self.follow_ups.is_repeat(label) && !self.follow_ups.is_follow_up(prior) {
                    if let Some(entry) = self.responses.get(prior) {
                        let reply = entry.render_avoiding(&input, rng, context.last_reply.as_deref());
                        return Some((reply, prior.clone()));
                    }
                }
            }
        }

        self.responses
            .get(label)
            .map(|entry| (entry.render(&input, rng), label.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::ResponseEntry;
    use crate::types::Entity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GREETING: IntentLabel = IntentLabel::from_static("GREETING");
    const PRIVACY_INFO: IntentLabel = IntentLabel::from_static("PRIVACY_INFO");
    const JOKE: IntentLabel = IntentLabel::from_static("JOKE");
    const SELF_INTRO: IntentLabel = IntentLabel::from_static("SELF_INTRO");
    const WHY: IntentLabel = IntentLabel::from_static("WHY");
    const MORE: IntentLabel = IntentLabel::from_static("MORE");

    fn selector(catch_all: &[&str]) -> ResponseSelector {
        let mut responses = ResponseTable::new();
        responses.insert(GREETING, ResponseEntry::fixed("Hey {name}!"));
        responses.insert(PRIVACY_INFO, ResponseEntry::fixed("We never sell data."));
        responses.insert(JOKE, ResponseEntry::one_of(&["joke one", "joke two"]));
        responses.insert(SELF_INTRO, ResponseEntry::fixed("Nice to meet you, {name}!"));
        responses.insert(WHY, ResponseEntry::fixed("Why not?"));

        let mut follow_ups = FollowUpTable::new([WHY]).with_repeat(MORE);
        follow_ups.specialize(PRIVACY_INFO, WHY, ResponseEntry::fixed("Because it is yours."));

        let mut interests = InterestTable::new();
        interests.insert(JOKE, &["humor"]);

        let mut fallback = FallbackLibrary::new();
        if !catch_all.is_empty() {
            fallback.push_catch_all(catch_all).unwrap();
        }

        let heuristics = Heuristics {
            clarify: vec!["clarify".to_string()],
            detail: vec!["detail".to_string()],
            empathy: vec!["empathy".to_string()],
            generic: vec!["ask me about {topic}".to_string()],
            topics: vec!["privacy".to_string()],
        };

        ResponseSelector::new(responses, follow_ups, interests, fallback, heuristics)
            .with_name_intent(SELF_INTRO)
    }

    fn matched(label: IntentLabel) -> IntentMatch {
        IntentMatch::new(label, 50, String::new())
    }

    #[test]
    fn test_specialized_follow_up() {
        let selector = selector(&["hmm"]);
        let mut rng = StdRng::seed_from_u64(1);

        let first = selector.respond(Some(&matched(PRIVACY_INFO)), "privacy", ConversationContext::new(), &mut rng);
        assert_eq!(first.context.topic.as_deref(), Some("privacy"));

        let second = selector.respond(Some(&matched(WHY)), "why", first.context, &mut rng);
        assert_eq!(second.text, "Because it is yours.");
        assert_eq!(second.context.last_intent, Some(WHY));
    }

    #[test]
    fn test_unspecialized_follow_up_uses_generic_entry() {
        let selector = selector(&["hmm"]);
        let mut rng = StdRng::seed_from_u64(1);

        let first = selector.respond(Some(&matched(GREETING)), "hi", ConversationContext::new(), &mut rng);
        let second = selector.respond(Some(&matched(WHY)), "why", first.context, &mut rng);
        assert_eq!(second.text, "Why not?");
    }

    #[test]
    fn test_more_reanswers_previous_intent() {
        let selector = selector(&["hmm"]);
        let mut rng = StdRng::seed_from_u64(2);

        let first = selector.respond(Some(&matched(JOKE)), "joke", ConversationContext::new(), &mut rng);
        let second = selector.respond(Some(&matched(MORE)), "more", first.context.clone(), &mut rng);

        assert_ne!(second.text, first.text);
        assert_eq!(second.answered, Some(JOKE));
        assert!(second.context.user_interests.contains("humor"));
    }

    #[test]
    fn test_name_stored_and_used() {
        let selector = selector(&["hmm"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut intro = matched(SELF_INTRO);
        intro.entities.push(Entity::new(
            NAME_ENTITY.to_string(),
            "Jordan".to_string(),
            "jordan".to_string(),
            11,
            17,
        ));

        let first = selector.respond(Some(&intro), "my name is jordan", ConversationContext::new(), &mut rng);
        assert_eq!(first.text, "Nice to meet you, Jordan!");

        let second = selector.respond(Some(&matched(GREETING)), "hi", first.context, &mut rng);
        assert_eq!(second.text, "Hey Jordan!");
    }

    #[test]
    fn test_catch_all_does_not_repeat_recent() {
        let selector = selector(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(9);
        let mut context = ConversationContext::with_history_limit(3);
        let mut replies = Vec::new();

        for _ in 0..4 {
            let selection = selector.respond(None, "blah", context, &mut rng);
            assert_eq!(selection.fallback, Some(FallbackKind::CatchAll));
            replies.push(selection.text);
            context = selection.context;
        }

        assert!(!replies[..3].contains(&replies[3]));
        assert_eq!(context.recent_responses.len(), 3);
        assert_eq!(context.last_intent, None);
    }

    #[test]
    fn test_heuristics_without_catch_all() {
        let selector = selector(&[]);
        let mut rng = StdRng::seed_from_u64(1);

        let selection = selector.respond(None, "is it?", ConversationContext::new(), &mut rng);
        assert_eq!(selection.text, "clarify");
        assert_eq!(selection.fallback, Some(FallbackKind::Clarify));

        let selection = selector.respond(None, "", ConversationContext::new(), &mut rng);
        assert_eq!(selection.text, "ask me about privacy");
    }

    #[test]
    fn test_intent_without_entry_falls_back() {
        let selector = selector(&["hmm"]);
        let mut rng = StdRng::seed_from_u64(1);

        let selection = selector.respond(
            Some(&matched(IntentLabel::from_static("UNKNOWN"))),
            "x",
            ConversationContext::new(),
            &mut rng,
        );
        assert_eq!(selection.text, "hmm");
        assert!(selection.answered.is_none());
    }
}
