//! # Configuration DTO
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No default value calculation** (the bootstrap fills in defaults)

mod app_config;

pub use app_config::AppConfig;
