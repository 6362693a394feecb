//! Drive listing data types and mime-type constants shared by host contracts and the runtime.

use serde::{Deserialize, Deserializer, Serialize};

/// Mime type the remote drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";
/// Mime type the remote drive uses for native documents.
pub const DOCUMENT_MIME_TYPE: &str = "application/vnd.google-apps.document";
/// Plain-text mime type, classified together with native documents.
pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
/// PDF mime type.
pub const PDF_MIME_TYPE: &str = "application/pdf";
/// Prefix shared by every image mime type.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Folder id of the drive root.
pub const ROOT_FOLDER_ID: &str = "root";
/// Display name of the drive root in the breadcrumb.
pub const ROOT_DISPLAY_NAME: &str = "My Drive";
/// Wire value of the synthetic pseudo-account that matches every account.
pub const ALL_ACCOUNTS: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// File or folder record returned by the remote listing API.
pub struct FileEntry {
    /// Stable remote identifier.
    pub id: String,
    /// Display name; the only field mutated locally (after a confirmed rename).
    pub name: String,
    /// Remote content type.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mime_type: String,
    /// Email of the account that owns the entry.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account: String,
    /// Id of the containing folder.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parent_id: String,
    /// Last-modified timestamp as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    /// Size in bytes as reported by the backend (the drive API reports it as a string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl FileEntry {
    /// Builds an entry with the five identity/classification fields and no optional metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        account: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mime_type: mime_type.into(),
            account: account.into(),
            parent_id: parent_id.into(),
            modified_time: None,
            size: None,
        }
    }

    /// Returns `true` when the entry is a folder that can be navigated into.
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Connected account record returned by the accounts API.
pub struct AccountInfo {
    /// Account email; the account's identity.
    pub email: String,
    /// Access-token expiry as reported by the backend, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expiry: Option<String>,
}

impl AccountInfo {
    /// Builds an account record without expiry metadata.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token_expiry: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// JSON body sent with a rename call.
pub struct RenameRequest {
    /// Requested new display name.
    pub name: String,
}

impl RenameRequest {
    /// Builds the body for renaming an entry to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reads an explicit JSON `null` the same way as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Short account label used in account lists (`user@x.com` -> `user`).
pub fn account_username(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Avatar glyph for an account row: the uppercased first letter of the username.
pub fn account_avatar_letter(email: &str) -> String {
    account_username(email)
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
