//! Runtime configuration for the drive explorer.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the file id in [`DriveConfig::preview_url_template`].
pub const PREVIEW_ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Endpoint and wording configuration; every field has a default so partial overrides work.
pub struct DriveConfig {
    /// Base path of the remote drive API (no trailing slash).
    pub api_base: String,
    /// Path of the external account-authorization endpoint.
    pub auth_path: String,
    /// Preview URL template; `{id}` is replaced with the file id.
    pub preview_url_template: String,
    /// DOM id of the element hosting the preview surface.
    pub preview_host_id: String,
    /// Confirmation text shown before deleting an entry.
    pub delete_prompt: String,
    /// Confirmation text shown before unlinking an account.
    pub remove_account_prompt: String,
    /// Prompt text shown when asking for a new name.
    pub rename_prompt: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            auth_path: "/auth/google".to_string(),
            preview_url_template: "https://drive.google.com/file/d/{id}/preview".to_string(),
            preview_host_id: "preview".to_string(),
            delete_prompt: "Delete this item?".to_string(),
            remove_account_prompt: "Remove account?".to_string(),
            rename_prompt: "Rename to:".to_string(),
        }
    }
}

impl DriveConfig {
    /// Parses a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a JSON object matching the config shape.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let mut config: Self = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Preview URL for `file_id`.
    pub fn preview_url(&self, file_id: &str) -> String {
        self.preview_url_template
            .replace(PREVIEW_ID_PLACEHOLDER, file_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preview_url_substitutes_the_file_id() {
        assert_eq!(
            DriveConfig::default().preview_url("abc"),
            "https://drive.google.com/file/d/abc/preview"
        );
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config =
            DriveConfig::from_json(r#"{ "api_base": "https://drive.local/api/" }"#).expect("parse");
        assert_eq!(config.api_base, "https://drive.local/api");
        assert_eq!(config.auth_path, "/auth/google");
        assert_eq!(config.delete_prompt, "Delete this item?");
    }

    #[test]
    fn malformed_override_is_rejected() {
        assert!(DriveConfig::from_json("[1, 2]").is_err());
    }
}
