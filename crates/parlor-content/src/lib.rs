//! Parlor — content kinds and prompt composition.
//!
//! Maps a (content kind, theme) pair to the instruction sent to the text
//! generation provider. Adding a new kind means adding one table entry in
//! [`kind`], not a new code path.

pub mod composer;
pub mod kind;
pub mod templates;

pub use composer::PromptComposer;
pub use kind::ContentKind;
pub use templates::TemplateStore;
