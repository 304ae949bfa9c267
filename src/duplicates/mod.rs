//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Grouping manifest paths by checksum ([`groups`])
//! - Flagging every path whose checksum is shared ([`classifier`])

pub mod classifier;
pub mod groups;

pub use classifier::{classify, ClassifiedPath};
pub use groups::ChecksumGroups;
