//! Built-in content for the Huddle assistant
//!
//! Everything here is data: labels, patterns, priorities, replies and
//! mappings. The engine modules never depend on what is in these tables.

pub mod emoji;
pub mod emotions;
pub mod fallback;
pub mod intents;
pub mod labels;
pub mod responses;
pub mod tables;

pub use labels::*;

