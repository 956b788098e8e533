//! Core data types shared by the resolver, selector and engine

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::context::ConversationContext;
use crate::emotion::Reaction;

/// Name of an intent, e.g. `GREETING` or `JOKE_ANIMAL`.
///
/// Built-in labels are `const` values borrowing static strings; labels loaded
/// at runtime own their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentLabel(Cow<'static, str>);

impl IntentLabel {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for IntentLabel {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Represents a span captured from user input by a predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_type: String, // 'name' for self-introductions
    pub value: String,
    pub original: String,
    pub start: usize,
    pub end: usize,
}

/// The winning rule for one user turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentMatch {
    pub label: IntentLabel,
    pub priority: u32,
    pub entities: Vec<Entity>,
    pub original_input: String,
}

/// Everything the display layer needs for one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Intent attributed to the turn, `None` when the fallback path answered.
    pub intent: Option<IntentLabel>,
    /// Reply text with its leading pictograph removed.
    pub text: String,
    /// Image shown next to the reply text.
    pub image_id: String,
    /// Decorative reaction to the user's message.
    pub emotion: Option<Reaction>,
    pub context: ConversationContext,
}

impl IntentMatch {
    pub fn new(label: IntentLabel, priority: u32, original_input: String) -> Self {
        Self {
            label,
            priority,
            entities: Vec::new(),
            original_input,
        }
    }

    /// First captured entity of the given type
    pub fn entity(&self, entity_type: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.entity_type == entity_type)
    }
}

impl Entity {
    pub fn new(
        entity_type: String,
        value: String,
        original: String,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            entity_type,
            value,
            original,
            start,
            end,
        }
    }
}
