//! A process-local feature flag registry.
//!
//! Flags are either on for everyone or rolled out to a percentage of evaluation keys. Rollouts
//! are decided by a stable hash of the key, so a key keeps its answer for as long as the flag is
//! unchanged.

mod bucket;
mod error;
mod eval;
mod flag;
mod registry;
mod store;
mod test_common;

pub use error::*;
pub use eval::*;
pub use flag::*;
pub use registry::*;
pub use store::*;
