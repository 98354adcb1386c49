//! Core types and utilities for Dataflip.
//!
//! This crate holds the static type mapping registry shared by every stage of
//! the pipeline: wire (database) type names resolve to [`HostType`]s, trial
//! argument tokens resolve to a [`TrialType`], and host types degrade to a
//! [`ClientType`] for typings.

mod client;
mod error;
mod file;
mod host;
mod utils;
mod wire;

pub use client::ClientType;
pub use error::TypeMappingError;
// File operations
pub use file::{File, Overwrite, WriteResult};
pub use host::{HostKind, HostType};
// String utilities
pub use utils::{PREFIX_MARKERS, strip_prefix_markers, to_client_casing};
pub use wire::{BindType, Dialect, TrialType, trial_type};
