//! Parlor — provider gateways.
//!
//! Isolates provider-specific protocol detail from the request handlers.
//! Each gateway is a trait so handlers and tests never depend on a live
//! provider.

pub mod content;
pub mod narration;

pub use content::{ContentProvider, OpenAiConfig, OpenAiProvider};
pub use narration::{ElevenLabsConfig, ElevenLabsProvider, NarrationProvider, NARRATION_FAILED};
