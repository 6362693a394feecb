//! Typed host contracts and shared models for the drive explorer.
//!
//! This crate is the API-first boundary between the navigation runtime and everything outside
//! it: the remote drive API, the preview surface, user dialogs, alerts and the authorization
//! redirect. Browser adapters live in `drive_host_web`; the in-memory adapters here back tests
//! and offline builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod alerts;
pub mod auth;
pub mod config;
pub mod dialogs;
pub mod files;
pub mod host;
pub mod preview;

pub use alerts::{AlertFuture, AlertService, MemoryAlertService, NoopAlertService};
pub use auth::{
    AuthRedirectFuture, AuthRedirectService, MemoryAuthRedirectService, NoopAuthRedirectService,
};
pub use config::{DriveConfig, PREVIEW_ID_PLACEHOLDER};
pub use dialogs::{DialogFuture, DialogService, NoopDialogService, ScriptedDialogService};
pub use files::memory::{DriveApiCall, DriveApiOp, MemoryDriveApiService};
pub use files::service::{DriveApiFuture, DriveApiService, NoopDriveApiService};
pub use files::types::{
    account_avatar_letter, account_username, AccountInfo, FileEntry, RenameRequest,
    ALL_ACCOUNTS, DOCUMENT_MIME_TYPE, FOLDER_MIME_TYPE, IMAGE_MIME_PREFIX, PDF_MIME_TYPE,
    PLAIN_TEXT_MIME_TYPE, ROOT_DISPLAY_NAME, ROOT_FOLDER_ID,
};
pub use host::{HostServices, HostStrategy};
pub use preview::{MemoryPreviewService, NoopPreviewService, PreviewFuture, PreviewService};
