//! Preview surface adapter: a single iframe mounted inside a host element.

use drive_host::{PreviewFuture, PreviewService};

#[derive(Debug, Clone)]
/// Browser preview adapter that owns the children of the element with id `host_id`.
pub struct WebPreviewService {
    host_id: String,
}

impl WebPreviewService {
    /// Creates an adapter rendering into the element with id `host_id`.
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
        }
    }

    /// DOM id of the element hosting the preview frame.
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    #[cfg(target_arch = "wasm32")]
    fn host_element(&self) -> Result<(web_sys::Document, web_sys::Element), String> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "document unavailable".to_string())?;
        let host = document
            .get_element_by_id(&self.host_id)
            .ok_or_else(|| format!("preview host #{} not found", self.host_id))?;
        Ok((document, host))
    }
}

impl PreviewService for WebPreviewService {
    fn show_preview<'a>(&'a self, url: &'a str) -> PreviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use crate::bridge::js_error_to_string;

                let (document, host) = self.host_element()?;
                let frame = document
                    .create_element("iframe")
                    .map_err(js_error_to_string)?;
                frame.set_attribute("src", url).map_err(js_error_to_string)?;
                frame
                    .set_attribute("allow", "autoplay")
                    .map_err(js_error_to_string)?;
                frame
                    .set_attribute("class", "drive-preview-frame")
                    .map_err(js_error_to_string)?;
                host.set_inner_html("");
                host.append_child(&frame).map_err(js_error_to_string)?;
                return host.remove_attribute("hidden").map_err(js_error_to_string);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Ok(())
            }
        })
    }

    fn close_preview<'a>(&'a self) -> PreviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let (_, host) = self.host_element()?;
                host.set_inner_html("");
                return host
                    .set_attribute("hidden", "")
                    .map_err(crate::bridge::js_error_to_string);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(())
            }
        })
    }
}
