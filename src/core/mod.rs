//! Scan orchestration: collaborators, pacing, the per-symbol pipeline and
//! the run loop.

pub mod context;
pub mod handlers;
pub mod pacing;
pub mod runtime;

pub use context::*;
pub use handlers::*;
pub use pacing::*;
pub use runtime::*;
