//! Navigation and state-reconciliation runtime for the drive explorer.
//!
//! All session state lives in one [`SessionState`] mutated only by [`reduce_drive`]. Remote calls
//! and dialogs are emitted as [`DriveEffect`]s, executed by [`host::DriveHostContext`] and fed
//! back as [`DriveAction`]s.

pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::{use_drive_runtime, DriveProvider, DriveRuntimeContext, DriveShell};
pub use host::DriveHostContext;
pub use model::*;
pub use reducer::{reduce_drive, DriveAction, DriveEffect, DriveFailure, ReducerError};
