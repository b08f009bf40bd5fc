//! # Roster Core
//!
//! Core types and error definitions for the Roster user-listing service.
//! This crate provides the foundational abstractions shared across all
//! layers: the error taxonomy, pagination contract, typed identifiers,
//! and the domain model.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
