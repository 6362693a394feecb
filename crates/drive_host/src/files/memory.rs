//! In-memory drive API adapter used by runtime tests and offline demos.

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use super::{
    service::{DriveApiFuture, DriveApiService},
    types::{AccountInfo, FileEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Drive API operation kinds, used to inject failures.
pub enum DriveApiOp {
    /// `list_files`.
    ListFiles,
    /// `list_accounts`.
    ListAccounts,
    /// `remove_account`.
    RemoveAccount,
    /// `rename_file`.
    RenameFile,
    /// `delete_file`.
    DeleteFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded call against [`MemoryDriveApiService`].
pub enum DriveApiCall {
    /// A folder listing request.
    ListFiles {
        /// Requested folder.
        parent_id: String,
        /// Requested account scope.
        account: Option<String>,
    },
    /// An accounts listing request.
    ListAccounts,
    /// An account removal request.
    RemoveAccount(String),
    /// A rename request.
    RenameFile {
        /// Target entry.
        file_id: String,
        /// Requested name.
        new_name: String,
    },
    /// A delete request.
    DeleteFile(String),
}

#[derive(Debug, Default)]
struct MemoryDrive {
    files: Vec<FileEntry>,
    accounts: Vec<AccountInfo>,
    failing: HashSet<DriveApiOp>,
    calls: Vec<DriveApiCall>,
}

impl MemoryDrive {
    fn check(&self, op: DriveApiOp) -> Result<(), String> {
        if self.failing.contains(&op) {
            Err(format!("memory drive: injected {op:?} failure"))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory drive holding a flat list of entries and accounts.
///
/// Clones share the same backing drive, so a test can keep a handle for assertions after handing
/// a clone to the runtime.
pub struct MemoryDriveApiService {
    inner: Rc<RefCell<MemoryDrive>>,
}

impl MemoryDriveApiService {
    /// Builds a drive seeded with `accounts` and `files`.
    pub fn seeded(accounts: Vec<AccountInfo>, files: Vec<FileEntry>) -> Self {
        let service = Self::default();
        {
            let mut drive = service.inner.borrow_mut();
            drive.accounts = accounts;
            drive.files = files;
        }
        service
    }

    /// Adds an entry to the drive.
    pub fn insert_file(&self, entry: FileEntry) {
        self.inner.borrow_mut().files.push(entry);
    }

    /// Makes every subsequent call of `op` fail (or succeed again when `failing` is false).
    pub fn set_failing(&self, op: DriveApiOp, failing: bool) {
        let mut drive = self.inner.borrow_mut();
        if failing {
            drive.failing.insert(op);
        } else {
            drive.failing.remove(&op);
        }
    }

    /// Returns a snapshot of the stored entries.
    pub fn files(&self) -> Vec<FileEntry> {
        self.inner.borrow().files.clone()
    }

    /// Returns a snapshot of the connected account emails.
    pub fn account_emails(&self) -> Vec<String> {
        self.inner
            .borrow()
            .accounts
            .iter()
            .map(|account| account.email.clone())
            .collect()
    }

    /// Returns every call received so far, in order.
    pub fn calls(&self) -> Vec<DriveApiCall> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: DriveApiCall) {
        self.inner.borrow_mut().calls.push(call);
    }
}

impl DriveApiService for MemoryDriveApiService {
    fn list_files<'a>(
        &'a self,
        parent_id: &'a str,
        account: Option<&'a str>,
    ) -> DriveApiFuture<'a, Result<Vec<FileEntry>, String>> {
        Box::pin(async move {
            self.record(DriveApiCall::ListFiles {
                parent_id: parent_id.to_string(),
                account: account.map(str::to_string),
            });
            let drive = self.inner.borrow();
            drive.check(DriveApiOp::ListFiles)?;
            let listed = drive
                .files
                .iter()
                .filter(|entry| entry.parent_id == parent_id)
                .filter(|entry| account.map_or(true, |email| entry.account == email))
                .cloned()
                .collect();
            Ok(listed)
        })
    }

    fn list_accounts<'a>(&'a self) -> DriveApiFuture<'a, Result<Vec<AccountInfo>, String>> {
        Box::pin(async move {
            self.record(DriveApiCall::ListAccounts);
            let drive = self.inner.borrow();
            drive.check(DriveApiOp::ListAccounts)?;
            Ok(drive.accounts.clone())
        })
    }

    fn remove_account<'a>(&'a self, email: &'a str) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(DriveApiCall::RemoveAccount(email.to_string()));
            let mut drive = self.inner.borrow_mut();
            drive.check(DriveApiOp::RemoveAccount)?;
            let before = drive.accounts.len();
            drive.accounts.retain(|account| account.email != email);
            if drive.accounts.len() == before {
                return Err(format!("account not found: {email}"));
            }
            drive.files.retain(|entry| entry.account != email);
            Ok(())
        })
    }

    fn rename_file<'a>(
        &'a self,
        file_id: &'a str,
        new_name: &'a str,
    ) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(DriveApiCall::RenameFile {
                file_id: file_id.to_string(),
                new_name: new_name.to_string(),
            });
            let mut drive = self.inner.borrow_mut();
            drive.check(DriveApiOp::RenameFile)?;
            let entry = drive
                .files
                .iter_mut()
                .find(|entry| entry.id == file_id)
                .ok_or_else(|| format!("file not found: {file_id}"))?;
            entry.name = new_name.to_string();
            Ok(())
        })
    }

    fn delete_file<'a>(&'a self, file_id: &'a str) -> DriveApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(DriveApiCall::DeleteFile(file_id.to_string()));
            let mut drive = self.inner.borrow_mut();
            drive.check(DriveApiOp::DeleteFile)?;
            let before = drive.files.len();
            drive.files.retain(|entry| entry.id != file_id);
            if drive.files.len() == before {
                return Err(format!("file not found: {file_id}"));
            }
            Ok(())
        })
    }
}
