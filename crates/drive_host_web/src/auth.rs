//! Account-authorization redirect adapter.

use drive_host::{AuthRedirectFuture, AuthRedirectService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser redirect adapter that navigates the page via `window.location`.
pub struct WebAuthRedirectService;

impl AuthRedirectService for WebAuthRedirectService {
    fn redirect<'a>(&'a self, url: &'a str) -> AuthRedirectFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .location()
                    .set_href(url)
                    .map_err(crate::bridge::js_error_to_string);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Err("page redirects are only available when compiled for wasm32".to_string())
            }
        })
    }
}
