//! Chat engine - one turn from raw user text to a displayable reply

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::catalog;
use crate::config::EngineConfig;
use crate::context::ConversationContext;
use crate::emoji::{EmojiExtraction, EmojiExtractor};
use crate::emotion::{EmotionClassifier, Reaction};
use crate::error::Result;
use crate::normalize::{Normalizer, DEFAULT_TYPOS};
use crate::resolver::IntentResolver;
use crate::selector::ResponseSelector;
use crate::types::{IntentLabel, Reply};

/// Resolver, selector, emotion classifier and emoji extractor wired together
///
/// Holds no conversation state. Callers own the [`ConversationContext`] and
/// pass it through [`ChatEngine::generate_reply`] on every turn.
pub struct ChatEngine {
    resolver: IntentResolver,
    selector: ResponseSelector,
    emotions: EmotionClassifier,
    emoji: EmojiExtractor,
    rng: StdRng,
    config: EngineConfig,
}

impl ChatEngine {
    /// Engine over the built-in catalog
    pub fn new(config: EngineConfig) -> Result<Self> {
        let normalizer = Normalizer::new(DEFAULT_TYPOS)?;
        let resolver = IntentResolver::new(
            catalog::intents::library(),
            catalog::intents::priorities(),
            normalizer,
        );
        let selector = ResponseSelector::new(
            catalog::responses::response_table(),
            catalog::responses::follow_ups(),
            catalog::responses::interests(),
            catalog::fallback::library(config.catch_all),
            catalog::fallback::heuristics(&config.fallback_topics),
        )
        .with_name_intent(catalog::SELF_INTRO);
        let emoji = EmojiExtractor::new(catalog::emoji::images(), config.default_image_id.clone());

        Ok(Self::with_parts(
            config,
            resolver,
            selector,
            catalog::emotions::classifier(),
            emoji,
        ))
    }

    /// Engine over caller-supplied tables
    pub fn with_parts(
        config: EngineConfig,
        resolver: IntentResolver,
        selector: ResponseSelector,
        emotions: EmotionClassifier,
        emoji: EmojiExtractor,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            intent_rules = resolver.rule_count(),
            responses = selector.responses().len(),
            emotion_rules = emotions.len(),
            seeded = config.seed.is_some(),
            "chat engine ready"
        );

        Self {
            resolver,
            selector,
            emotions,
            emoji,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restart the response choice sequence
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Fresh context sized to this engine's history limit
    pub fn new_context(&self) -> ConversationContext {
        ConversationContext::with_history_limit(self.config.history_limit)
    }

    pub fn resolve_intent(&self, text: &str) -> Option<IntentLabel> {
        self.resolver.resolve(text)
    }

    pub fn classify_emotion(&self, text: &str) -> Option<Reaction> {
        let normalized = self.resolver.normalizer().normalize(text);
        self.emotions.classify(&normalized)
    }

    pub fn extract_leading_emoji(&self, text: &str) -> EmojiExtraction {
        self.emoji.extract_leading_emoji(text)
    }

    /// Compute the reply for one user message
    ///
    /// Never fails: unmatched or empty input goes down the fallback path, and
    /// rules that error are skipped.
    pub fn generate_reply(&mut self, text: &str, context: ConversationContext) -> Reply {
        let normalized = self.resolver.normalizer().normalize(text);
        let matched = self.resolver.resolve_normalized(&normalized, text);
        let emotion = self.emotions.classify(&normalized);

        let selection = self
            .selector
            .respond(matched.as_ref(), &normalized, context, &mut self.rng);
        let EmojiExtraction { image_id, text: reply_text } =
            self.emoji.extract_leading_emoji(&selection.text);

        debug!(
            intent = ?matched.as_ref().map(|m| m.label.as_str()),
            answered = ?selection.answered.as_ref().map(IntentLabel::as_str),
            fallback = ?selection.fallback,
            emotion = ?emotion,
            image = %image_id,
            "reply generated"
        );

        Reply {
            intent: selection.answered,
            text: reply_text,
            image_id,
            emotion,
            context: selection.context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::labels::*;

    fn engine() -> ChatEngine {
        ChatEngine::new(EngineConfig::default().with_seed(7)).unwrap()
    }

    #[test]
    fn test_resolve_and_reply_agree() {
        let mut engine = engine();
        let context = engine.new_context();

        assert_eq!(engine.resolve_intent("are you a bot"), Some(BOT_IDENTITY));
        let reply = engine.generate_reply("are you a bot", context);
        assert_eq!(reply.intent, Some(BOT_IDENTITY));
        assert_eq!(reply.image_id, "robot");
        assert!(!reply.text.contains('🤖'));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = engine();
        let mut b = engine();
        for text in ["tell me a joke", "flip a coin", "asdfgh", "roll a die"] {
            let ra = a.generate_reply(text, ConversationContext::new());
            let rb = b.generate_reply(text, ConversationContext::new());
            assert_eq!(ra.text, rb.text);
        }
    }

    #[test]
    fn test_emotion_uses_normalized_text() {
        assert_eq!(engine().classify_emotion("THX a lot"), Some(Reaction::Grateful));
    }

    #[test]
    fn test_new_context_uses_configured_limit() {
        let mut config = EngineConfig::default();
        config.history_limit = 5;
        let engine = ChatEngine::new(config).unwrap();
        assert_eq!(engine.new_context().history_limit, 5);
    }
}
