//! Shared test mocks and utilities for the Parlor backend.

mod archive;
mod providers;

pub use archive::InMemoryActArchive;
pub use providers::{
    CannedContentProvider, CannedNarrationProvider, FailingContentProvider,
    UnavailableNarrationProvider,
};
