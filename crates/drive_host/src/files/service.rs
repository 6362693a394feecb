//! Remote drive API service contracts.

use std::{future::Future, pin::Pin};

use super::types::{AccountInfo, FileEntry};

/// Object-safe boxed future used by [`DriveApiService`] async methods.
pub type DriveApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the remote drive API (file listing, accounts, rename and delete).
///
/// Every method resolves to `Err` on a rejected request or a non-2xx response; the error string
/// is diagnostic only and never shown to the user verbatim.
pub trait DriveApiService {
    /// Lists the entries of `parent_id`, optionally scoped to a single account.
    fn list_files<'a>(
        &'a self,
        parent_id: &'a str,
        account: Option<&'a str>,
    ) -> DriveApiFuture<'a, Result<Vec<FileEntry>, String>>;

    /// Lists the connected accounts.
    fn list_accounts<'a>(&'a self) -> DriveApiFuture<'a, Result<Vec<AccountInfo>, String>>;

    /// Unlinks a connected account.
    fn remove_account<'a>(&'a self, email: &'a str) -> DriveApiFuture<'a, Result<(), String>>;

    /// Renames a file or folder.
    fn rename_file<'a>(
        &'a self,
        file_id: &'a str,
        new_name: &'a str,
    ) -> DriveApiFuture<'a, Result<(), String>>;

    /// Deletes a file or folder.
    fn delete_file<'a>(&'a self, file_id: &'a str) -> DriveApiFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Drive API adapter for targets without network access; every call fails.
pub struct NoopDriveApiService;

impl NoopDriveApiService {
    fn unsupported_error(op: &str) -> String {
        format!("drive api unavailable: {op}")
    }
}

impl DriveApiService for NoopDriveApiService {
    fn list_files<'a>(
        &'a self,
        _parent_id: &'a str,
        _account: Option<&'a str>,
    ) -> DriveApiFuture<'a, Result<Vec<FileEntry>, String>> {
        Box::pin(async { Err(Self::unsupported_error("list_files")) })
    }

    fn list_accounts<'a>(&'a self) -> DriveApiFuture<'a, Result<Vec<AccountInfo>, String>> {
        Box::pin(async { Err(Self::unsupported_error("list_accounts")) })
    }

    fn remove_account<'a>(&'a self, _email: &'a str) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("remove_account")) })
    }

    fn rename_file<'a>(
        &'a self,
        _file_id: &'a str,
        _new_name: &'a str,
    ) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("rename_file")) })
    }

    fn delete_file<'a>(&'a self, _file_id: &'a str) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("delete_file")) })
    }
}
