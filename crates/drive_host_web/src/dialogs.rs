//! Dialog and alert host-service adapters backed by the browser's blocking window dialogs.

use drive_host::{AlertFuture, AlertService, DialogFuture, DialogService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser dialog adapter using `window.confirm`/`window.prompt`.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return web_sys::window()
                    .and_then(|window| window.confirm_with_message(message).ok())
                    .unwrap_or(false);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = message;
                false
            }
        })
    }

    fn prompt<'a>(
        &'a self,
        message: &'a str,
        default: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return web_sys::window()
                    .and_then(|window| {
                        window
                            .prompt_with_message_and_default(message, default)
                            .ok()
                    })
                    .flatten();
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (message, default);
                None
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser alert adapter using `window.alert`.
pub struct WebAlertService;

impl AlertService for WebAlertService {
    fn alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .alert_with_message(message)
                    .map_err(crate::bridge::js_error_to_string);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = message;
                Ok(())
            }
        })
    }
}
