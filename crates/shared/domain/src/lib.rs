//! # Domain Models
//!
//! Pure data types shared by the workspace. The only dependency is `serde`;
//! keep it lean: no I/O and no business logic, just data and defaults.

pub mod config;
