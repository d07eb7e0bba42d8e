//! # LumbApp Core Library
//!
//! Business logic for LumbApp, a single-user lower-back health companion.
//! All state stays on the device; the CLI is a thin presentation layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Profile session**: the in-memory profile for one app session, with
//!   debounced snapshot saves
//! - **Streak**: once-per-session reconciliation of the daily visit streak
//! - **Storage**: best-effort key-value snapshot persistence and TOML config
//! - **Content**: bundled exercises, education, precautions, recommendations
//!
//! ## Key Components
//!
//! - [`ProfileSession`]: profile state container
//! - [`ProfileStore`]: snapshot persistence adapter
//! - [`reconcile`]: streak reconciliation
//! - [`Debouncer`]: cancellable trailing-edge save scheduler
//! - [`Config`]: application configuration

pub mod content;
pub mod debounce;
pub mod emergency;
pub mod error;
pub mod profile;
pub mod public_config;
pub mod session;
pub mod storage;
pub mod streak;
pub mod validation;

pub use content::Catalog;
pub use debounce::{Debouncer, ScheduledTask};
pub use emergency::{dial_targets, DialTarget};
pub use error::{ConfigError, CoreError, SchedulerError, StorageError, ValidationError};
pub use profile::{PainLevel, ProfileField, SetupState, UserProfile};
pub use public_config::PublicConfig;
pub use session::ProfileSession;
pub use storage::{Config, ProfileStore};
pub use streak::{reconcile, Reconciliation, StreakTransition};
pub use validation::validate_profile;
