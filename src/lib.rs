//! Assistant core - rule-based intent resolution and reply selection
//!
//! Provides the conversational engine behind the Huddle site assistant:
//! priority-ranked intent resolution, context-aware response selection with a
//! pattern and heuristic fallback, first-match emotion classification and
//! leading-emoji extraction.

pub mod catalog;
pub mod config;
pub mod context;
pub mod emoji;
pub mod emotion;
pub mod engine;
pub mod entities;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod predicate;
pub mod resolver;
pub mod responses;
pub mod rules;
pub mod selector;
pub mod session;
pub mod similarity;
pub mod types;

pub use config::EngineConfig;
pub use context::ConversationContext;
pub use emoji::{EmojiExtraction, EmojiExtractor};
pub use emotion::{EmotionClassifier, EmotionRule, Reaction};
pub use engine::ChatEngine;
pub use error::{AssistantError, Result, RuleError};
pub use predicate::Predicate;
pub use resolver::IntentResolver;
pub use session::{ChatSession, PendingReply};
pub use types::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn assistant_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyChatEngine>()?;
    m.add_class::<PyChatSession>()?;
    Ok(())
}
