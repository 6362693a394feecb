//! Host-service bundle injected into the drive runtime.

use std::rc::Rc;

use crate::{
    AlertService, AuthRedirectService, DialogService, DriveApiService, DriveConfig,
    NoopAlertService, NoopAuthRedirectService, NoopDialogService, NoopDriveApiService,
    NoopPreviewService, PreviewService,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services talking to the real API.
    Browser,
    /// Placeholder/no-op or in-memory services (native builds and tests).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Host service bundle consumed by the runtime.
///
/// Environment-specific selection happens before the bundle crosses into `drive_runtime`, so the
/// runtime never imports browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Remote drive API.
    pub api: Rc<dyn DriveApiService>,
    /// Embedded preview surface.
    pub preview: Rc<dyn PreviewService>,
    /// Confirmation and prompt dialogs.
    pub dialogs: Rc<dyn DialogService>,
    /// Failure alerts.
    pub alerts: Rc<dyn AlertService>,
    /// Account-authorization redirect.
    pub auth: Rc<dyn AuthRedirectService>,
    /// Endpoint and wording configuration.
    pub config: DriveConfig,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of no-op services with default configuration.
    pub fn noop() -> Self {
        Self {
            api: Rc::new(NoopDriveApiService),
            preview: Rc::new(NoopPreviewService),
            dialogs: Rc::new(NoopDialogService),
            alerts: Rc::new(NoopAlertService),
            auth: Rc::new(NoopAuthRedirectService),
            config: DriveConfig::default(),
            host_strategy: HostStrategy::Stub,
        }
    }
}
