//! Parlor — durable archive of recorded acts.
//!
//! A recorded act pairs narrated storyline text with a reference to its
//! synthesized audio. Records are written once and never updated or
//! deleted.

pub mod act;
pub mod pg_act_archive;
pub mod schema;

pub use act::{ActArchive, RecordedAct};
pub use pg_act_archive::PgActArchive;
