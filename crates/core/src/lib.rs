//! permcmp core library.
//!
//! This crate provides the foundational components for comparing ProcessPro
//! permission exports: the export parser, per-company set differencing, the
//! two-slot compare session, and configuration.

pub mod compare;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;

// Re-exports for convenience.
pub use compare::{compare_exports, unique_permissions, CompareReport};
pub use config::AppConfig;
pub use errors::{ConfigError, CoreError, ExportError};
pub use export::{load_export, parse_export};
pub use models::{CompanyMap, PermissionExport, UserSlot};
pub use session::CompareSession;
