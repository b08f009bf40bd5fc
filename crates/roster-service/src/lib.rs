//! # Roster Service
//!
//! Business logic service layer for Roster.
//! Contains the listing use cases and their DTOs.

pub mod dto;
pub mod user_service;
pub mod r#impl;

pub use dto::*;
pub use user_service::*;
pub use r#impl::*;
