//! Python bindings for the assistant using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::EngineConfig;
use crate::context::ConversationContext;
use crate::engine::ChatEngine;
use crate::error::AssistantError;
use crate::session::{ChatSession, PendingReply};
use crate::types::Reply;

impl From<AssistantError> for PyErr {
    fn from(e: AssistantError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

fn build_engine(config_json: Option<&str>) -> PyResult<ChatEngine> {
    let config = match config_json {
        Some(json) => EngineConfig::from_json(json)?,
        None => EngineConfig::default(),
    };
    Ok(ChatEngine::new(config)?)
}

fn reply_dict<'py>(py: Python<'py>, reply: &Reply) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("intent", reply.intent.as_ref().map(|l| l.as_str()))?;
    dict.set_item("text", &reply.text)?;
    dict.set_item("image_id", &reply.image_id)?;
    dict.set_item("emotion", reply.emotion.map(|r| r.image_id()))?;
    let context_json = serde_json::to_string(&reply.context)
        .map_err(|e| PyValueError::new_err(format!("Failed to serialize context: {}", e)))?;
    dict.set_item("context", context_json)?;
    Ok(dict)
}

/// Python wrapper for the stateless engine; the caller keeps the context
#[pyclass]
pub struct PyChatEngine {
    engine: ChatEngine,
}

#[pymethods]
impl PyChatEngine {
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        Ok(Self {
            engine: build_engine(config_json)?,
        })
    }

    fn resolve_intent(&self, text: &str) -> Option<String> {
        self.engine.resolve_intent(text).map(|l| l.to_string())
    }

    /// Reaction image id, if any emotion rule matched
    fn classify_emotion(&self, text: &str) -> Option<&'static str> {
        self.engine.classify_emotion(text).map(|r| r.image_id())
    }

    /// `context_json` is the `context` string from a previous reply
    #[pyo3(signature = (text, context_json=None))]
    fn generate_reply<'py>(
        &mut self,
        py: Python<'py>,
        text: &str,
        context_json: Option<&str>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let context: ConversationContext = match context_json {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| PyValueError::new_err(format!("Invalid context: {}", e)))?,
            None => self.engine.new_context(),
        };
        let reply = self.engine.generate_reply(text, context);
        reply_dict(py, &reply)
    }

    /// Returns `(image_id, text)`
    fn extract_leading_emoji(&self, text: &str) -> (String, String) {
        let extraction = self.engine.extract_leading_emoji(text);
        (extraction.image_id, extraction.text)
    }

    fn reseed(&mut self, seed: u64) {
        self.engine.reseed(seed);
    }
}

/// Python wrapper for a single conversation
#[pyclass]
pub struct PyChatSession {
    session: ChatSession,
    pending: Option<PendingReply>,
}

#[pymethods]
impl PyChatSession {
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        Ok(Self {
            session: ChatSession::new(build_engine(config_json)?),
            pending: None,
        })
    }

    /// Returns `(ticket, delay_ms)`; pass the ticket to `deliver` after the delay
    fn send(&mut self, text: &str) -> (u64, u64) {
        let pending = self.session.send(text);
        let handle = (pending.ticket, pending.delay.as_millis() as u64);
        self.pending = Some(pending);
        handle
    }

    /// The reply for `ticket`, or `None` if it was superseded
    fn deliver<'py>(&mut self, py: Python<'py>, ticket: u64) -> PyResult<Option<Bound<'py, PyDict>>> {
        let pending = match self.pending.take() {
            Some(p) if p.ticket == ticket => p,
            other => {
                self.pending = other;
                return Ok(None);
            }
        };
        self.session
            .deliver(pending)
            .map(|reply| reply_dict(py, &reply))
            .transpose()
    }

    fn reset(&mut self) {
        self.pending = None;
        self.session.reset();
    }

    fn context(&self) -> PyResult<String> {
        serde_json::to_string(self.session.context())
            .map_err(|e| PyValueError::new_err(format!("Failed to serialize context: {}", e)))
    }
}
