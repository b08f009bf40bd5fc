//! # Roster Repository
//!
//! Data access layer for Roster:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (read-only interface)
//! MySqlUserRepository            (MySQL / SQLx implementation)
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
