//! Browser (`wasm32`) implementations of [`drive_host`] service contracts.
//!
//! The HTTP API goes through the inline-JS `fetch` bridge in `bridge`; dialogs, the preview
//! surface and the authorization redirect use `web-sys` directly. Non-wasm builds compile against
//! fallbacks so the workspace still builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host-service bundle factory.
pub mod adapters;
pub mod api;
pub mod auth;
mod bridge;
pub mod config;
pub mod dialogs;
pub mod preview;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use api::WebDriveApiService;
pub use auth::WebAuthRedirectService;
pub use config::{load_drive_config, DRIVE_CONFIG_META_NAME};
pub use dialogs::{WebAlertService, WebDialogService};
pub use preview::WebPreviewService;
