//! Route modules.

pub mod content;
pub mod game;
pub mod health;
pub mod narration;
