//! Discord command implementations.

/// `/claim` - role claim command
pub mod claim;

pub use claim::claim;
