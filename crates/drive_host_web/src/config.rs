//! Page-level configuration loading.

use drive_host::DriveConfig;

/// `name` of the `<meta>` tag whose `content` carries a JSON [`DriveConfig`] override.
pub const DRIVE_CONFIG_META_NAME: &str = "drive-config";

/// Reads the page's [`DriveConfig`], falling back to defaults when the tag is missing or invalid.
pub fn load_drive_config() -> DriveConfig {
    match read_meta_override() {
        Some(raw) => parse_override(&raw),
        None => DriveConfig::default(),
    }
}

fn parse_override(raw: &str) -> DriveConfig {
    DriveConfig::from_json(raw).unwrap_or_else(|err| {
        web_console_warn(&format!("ignoring invalid {DRIVE_CONFIG_META_NAME} override: {err}"));
        DriveConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn read_meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{DRIVE_CONFIG_META_NAME}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta_override() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn web_console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn web_console_warn(message: &str) {
    eprintln!("{message}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn override_replaces_only_the_given_fields() {
        let config = parse_override(r#"{"api_base": "/drive/api/"}"#);
        assert_eq!(config.api_base, "/drive/api");
        assert_eq!(config.auth_path, DriveConfig::default().auth_path);
    }

    #[test]
    fn invalid_override_falls_back_to_defaults() {
        assert_eq!(parse_override("not json"), DriveConfig::default());
    }

    #[test]
    fn native_builds_use_defaults() {
        assert_eq!(load_drive_config(), DriveConfig::default());
    }
}
