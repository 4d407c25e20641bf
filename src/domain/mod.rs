//! Core domain models for dep-analyzer
//!
//! This module contains the fundamental types used throughout the application:
//! - Repository references parsed from GitHub URLs
//! - Module identity declared by go.mod
//! - Module records emitted by the resolver and the updates derived from them
//! - Version change classification

mod change_kind;
mod manifest_info;
mod module_record;
mod reference;

pub use change_kind::ChangeKind;
pub use manifest_info::ManifestInfo;
pub use module_record::{ModuleError, ModuleRecord, ModuleUpdate, UpdateInfo};
pub use reference::RepositoryReference;
