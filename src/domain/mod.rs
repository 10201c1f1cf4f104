//! Domain logic - pure version rules independent of files, git and the pipeline

pub mod version;

pub use version::{BumpType, VersionPair, MAX_VERSION_CODE};
