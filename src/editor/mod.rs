//! Editor/preview synchronization.
//!
//! An [`EditorSession`] owns one store's configuration for the lifetime of an
//! editing session. Edits are applied through a single entry point, each one
//! refreshing the preview synchronously and notifying subscribers. Loading
//! and saving go through the [`ConfigBackend`] collaborator.

mod backend;
mod changes;
mod error;
mod session;

#[cfg(test)]
mod tests;

pub use backend::{BackendError, ConfigBackend, JsonFileBackend, MemoryBackend, StoreInfoSource};
pub use changes::ConfigChange;
pub use error::EditorError;
pub use session::EditorSession;
