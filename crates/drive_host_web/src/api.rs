//! Drive API host-service adapter backed by the `fetch` bridge.

use drive_host::{AccountInfo, DriveApiFuture, DriveApiService, FileEntry};

use crate::bridge;

#[derive(Debug, Clone)]
/// Browser drive API adapter rooted at a configured base path.
pub struct WebDriveApiService {
    api_base: String,
}

impl WebDriveApiService {
    /// Creates an adapter for `api_base` (no trailing slash).
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Base path every request is issued against.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl DriveApiService for WebDriveApiService {
    fn list_files<'a>(
        &'a self,
        parent_id: &'a str,
        account: Option<&'a str>,
    ) -> DriveApiFuture<'a, Result<Vec<FileEntry>, String>> {
        Box::pin(async move { bridge::list_files(&self.api_base, parent_id, account).await })
    }

    fn list_accounts<'a>(&'a self) -> DriveApiFuture<'a, Result<Vec<AccountInfo>, String>> {
        Box::pin(async move { bridge::list_accounts(&self.api_base).await })
    }

    fn remove_account<'a>(&'a self, email: &'a str) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::remove_account(&self.api_base, email).await })
    }

    fn rename_file<'a>(
        &'a self,
        file_id: &'a str,
        new_name: &'a str,
    ) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::rename_file(&self.api_base, file_id, new_name).await })
    }

    fn delete_file<'a>(&'a self, file_id: &'a str) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::delete_file(&self.api_base, file_id).await })
    }
}
