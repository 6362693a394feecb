use std::rc::Rc;

use drive_host::{
    DriveConfig, HostServices, HostStrategy, NoopAlertService, NoopAuthRedirectService,
    NoopDialogService, NoopDriveApiService, NoopPreviewService,
};

use crate::{
    WebAlertService, WebAuthRedirectService, WebDialogService, WebDriveApiService,
    WebPreviewService,
};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "drive-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "drive-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host-service bundle for the compile-time selected host strategy.
pub fn build_host_services(config: DriveConfig) -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            api: Rc::new(WebDriveApiService::new(config.api_base.clone())),
            preview: Rc::new(WebPreviewService::new(config.preview_host_id.clone())),
            dialogs: Rc::new(WebDialogService),
            alerts: Rc::new(WebAlertService),
            auth: Rc::new(WebAuthRedirectService),
            config,
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Stub => HostServices {
            api: Rc::new(NoopDriveApiService),
            preview: Rc::new(NoopPreviewService),
            dialogs: Rc::new(NoopDialogService),
            alerts: Rc::new(NoopAlertService),
            auth: Rc::new(NoopAuthRedirectService),
            config,
            host_strategy: HostStrategy::Stub,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundle_carries_the_config_and_strategy() {
        let config = DriveConfig {
            api_base: "/drive".to_string(),
            ..DriveConfig::default()
        };
        let services = build_host_services(config.clone());
        assert_eq!(services.config, config);
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(host_strategy_name(), services.host_strategy.as_str());
    }
}
