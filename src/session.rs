//! Chat session - one conversation's context plus the cancel-stale send policy

use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

use crate::context::ConversationContext;
use crate::engine::ChatEngine;
use crate::types::Reply;

/// A reply waiting out its display delay
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub ticket: u64,
    pub reply: Reply,
    /// How long the display layer should wait before calling
    /// [`ChatSession::deliver`]
    pub delay: Duration,
}

/// Owns an engine and the context of a single conversation
///
/// A newer `send` supersedes any reply still pending, so replies can never be
/// displayed out of order.
///
/// Reply history only advances when a reply is delivered: a superseded reply
/// was never shown, so it must not hold a slot in `recent_responses`.
pub struct ChatSession {
    engine: ChatEngine,
    context: ConversationContext,
    /// Reply history as of the last delivered reply
    shown: ShownReplies,
    latest_ticket: u64,
}

#[derive(Debug, Clone)]
struct ShownReplies {
    recent_responses: VecDeque<String>,
    last_reply: Option<String>,
}

impl ShownReplies {
    fn of(context: &ConversationContext) -> Self {
        Self {
            recent_responses: context.recent_responses.clone(),
            last_reply: context.last_reply.clone(),
        }
    }

    fn apply(&self, context: &mut ConversationContext) {
        context.recent_responses = self.recent_responses.clone();
        context.last_reply = self.last_reply.clone();
    }
}

impl ChatSession {
    pub fn new(engine: ChatEngine) -> Self {
        let context = engine.new_context();
        Self {
            engine,
            shown: ShownReplies::of(&context),
            context,
            latest_ticket: 0,
        }
    }

    pub fn engine(&self) -> &ChatEngine {
        &self.engine
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Compute the reply now and hand it back for delayed display
    pub fn send(&mut self, text: &str) -> PendingReply {
        self.latest_ticket += 1;
        let mut context = self.context.clone();
        self.shown.apply(&mut context);
        let reply = self.engine.generate_reply(text, context);
        self.context = reply.context.clone();

        PendingReply {
            ticket: self.latest_ticket,
            reply,
            delay: self.engine.config().thinking_delay(),
        }
    }

    /// The reply, unless a later send or a reset superseded it
    pub fn deliver(&mut self, pending: PendingReply) -> Option<Reply> {
        if self.is_current(pending.ticket) {
            self.shown = ShownReplies::of(&pending.reply.context);
            Some(pending.reply)
        } else {
            debug!(ticket = pending.ticket, latest = self.latest_ticket, "dropping stale reply");
            None
        }
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest_ticket
    }

    /// Forget the conversation; replies still pending become stale
    pub fn reset(&mut self) {
        self.latest_ticket += 1;
        self.context = self.engine.new_context();
        self.shown = ShownReplies::of(&self.context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn session() -> ChatSession {
        let engine = ChatEngine::new(EngineConfig::default().with_seed(3)).unwrap();
        ChatSession::new(engine)
    }

    #[test]
    fn test_newer_send_supersedes() {
        let mut session = session();
        let first = session.send("hello");
        let second = session.send("tell me a joke");

        assert!(session.deliver(first).is_none());
        assert!(session.deliver(second).is_some());
    }

    #[test]
    fn test_context_threads_through_sends() {
        let mut session = session();
        session.send("my name is jordan");
        session.send("what's my name");

        assert_eq!(session.context().user_name.as_deref(), Some("Jordan"));
    }

    #[test]
    fn test_reset_drops_pending_and_context() {
        let mut session = session();
        let pending = session.send("my name is jordan");
        session.reset();

        assert!(session.deliver(pending).is_none());
        assert!(session.context().user_name.is_none());
        assert!(session.context().last_intent.is_none());
    }

    #[test]
    fn test_superseded_reply_is_not_history() {
        let mut session = session();
        let unseen = session.send("blorp");
        let seen = session.send("vlek");

        assert!(session.deliver(unseen).is_none());
        let reply = session.deliver(seen).unwrap();
        assert_eq!(reply.context.recent_responses.len(), 1);
        let last = reply.context.last_reply.as_ref().unwrap();
        assert!(reply.context.recent_responses.contains(last));
    }

    #[test]
    fn test_delay_from_config() {
        let pending = session().send("hi");
        assert_eq!(pending.delay, Duration::from_millis(1200));
    }
}
