//! Reducer actions, side-effect intents, and transition logic for the drive explorer.

use drive_host::{AccountInfo, FileEntry};
use leptos::logging;
use thiserror::Error;

use crate::model::{
    AccountFilter, ListingRequest, ListingToken, PendingActionKind, SessionState, TypeFilter,
};

#[derive(Debug, Clone, PartialEq)]
/// User intents and remote completions accepted by [`reduce_drive`].
pub enum DriveAction {
    /// Initial page load: fetch accounts and the root listing.
    Boot,
    /// Activate an entry of the current listing (folders navigate, files preview).
    OpenEntry {
        /// Entry to open.
        entry_id: String,
    },
    /// Navigate into a folder.
    OpenFolder {
        /// Folder id.
        folder_id: String,
        /// Breadcrumb label for the folder.
        display_name: String,
    },
    /// Return to the parent folder (no-op at the root).
    GoBack,
    /// Refetch the current folder.
    Reload,
    /// Change the account selector.
    SwitchAccount {
        /// New account selector.
        account: AccountFilter,
    },
    /// Change the type selector.
    SwitchType {
        /// New type selector.
        type_filter: TypeFilter,
    },
    /// A folder listing resolved.
    ListingLoaded {
        /// Token of the request that produced the batch.
        token: ListingToken,
        /// Folder the batch belongs to.
        folder_id: String,
        /// Entries in server order.
        entries: Vec<FileEntry>,
    },
    /// A folder listing failed.
    ListingFailed {
        /// Token of the failed request.
        token: ListingToken,
        /// Folder of the failed request.
        folder_id: String,
        /// Diagnostic cause.
        error: String,
    },
    /// Ask the user for a new name for an entry.
    BeginRename {
        /// Entry to rename.
        entry_id: String,
    },
    /// Rename an entry remotely.
    RequestRename {
        /// Entry to rename.
        entry_id: String,
        /// Requested name.
        new_name: String,
    },
    /// The server accepted a rename.
    RenameSucceeded {
        /// Renamed entry.
        entry_id: String,
        /// Name the server accepted.
        new_name: String,
    },
    /// The server rejected a rename.
    RenameFailed {
        /// Entry whose rename failed.
        entry_id: String,
        /// Diagnostic cause.
        error: String,
    },
    /// Ask the user to confirm deleting an entry.
    RequestDelete {
        /// Entry to delete.
        entry_id: String,
    },
    /// The user confirmed a delete.
    DeleteConfirmed {
        /// Entry to delete.
        entry_id: String,
    },
    /// The server accepted a delete.
    DeleteSucceeded {
        /// Deleted entry.
        entry_id: String,
    },
    /// The server rejected a delete.
    DeleteFailed {
        /// Entry whose delete failed.
        entry_id: String,
        /// Diagnostic cause.
        error: String,
    },
    /// Refetch the connected-account list.
    RefreshAccounts,
    /// The connected-account list resolved.
    AccountsLoaded {
        /// Accounts in server order.
        accounts: Vec<AccountInfo>,
    },
    /// The connected-account list failed.
    AccountsFailed {
        /// Diagnostic cause.
        error: String,
    },
    /// Ask the user to confirm unlinking an account.
    RequestRemoveAccount {
        /// Account email.
        email: String,
    },
    /// The user confirmed unlinking an account.
    RemoveAccountConfirmed {
        /// Account email.
        email: String,
    },
    /// The server unlinked an account.
    AccountRemoved {
        /// Account email.
        email: String,
    },
    /// The server rejected unlinking an account.
    RemoveAccountFailed {
        /// Account email.
        email: String,
        /// Diagnostic cause.
        error: String,
    },
    /// Hand off to the external authorization flow to connect another account.
    AddAccount,
    /// Close the preview surface.
    ClosePreview,
    /// Clear the failure notice.
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_drive`] for the host layer to execute.
pub enum DriveEffect {
    /// Fetch a folder listing; resolves to `ListingLoaded`/`ListingFailed`.
    FetchListing(ListingRequest),
    /// Fetch connected accounts; resolves to `AccountsLoaded`/`AccountsFailed`.
    FetchAccounts,
    /// Show the preview surface for a file, replacing any open one.
    OpenPreview {
        /// File to preview.
        file_id: String,
    },
    /// Close the preview surface.
    ClosePreview,
    /// Prompt for a new name; resolves to `RequestRename` unless cancelled.
    PromptRename {
        /// Entry to rename.
        entry_id: String,
        /// Name used to pre-fill the prompt.
        current_name: String,
    },
    /// Issue the remote rename; resolves to `RenameSucceeded`/`RenameFailed`.
    RenameEntry {
        /// Entry to rename.
        entry_id: String,
        /// Requested name.
        new_name: String,
    },
    /// Confirm a delete; resolves to `DeleteConfirmed` unless declined.
    ConfirmDelete {
        /// Entry to delete.
        entry_id: String,
    },
    /// Issue the remote delete; resolves to `DeleteSucceeded`/`DeleteFailed`.
    DeleteEntry {
        /// Entry to delete.
        entry_id: String,
    },
    /// Confirm unlinking an account; resolves to `RemoveAccountConfirmed` unless declined.
    ConfirmRemoveAccount {
        /// Account email.
        email: String,
    },
    /// Issue the remote account removal; resolves to `AccountRemoved`/`RemoveAccountFailed`.
    RemoveAccount {
        /// Account email.
        email: String,
    },
    /// Redirect to the authorization endpoint.
    BeginAccountAuthorization,
    /// Surface a failure to the user.
    Alert(DriveFailure),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Remote failures surfaced to the user; `Display` is the user-facing message.
pub enum DriveFailure {
    #[error("Failed to load files")]
    ListFiles,
    #[error("Failed to load accounts")]
    ListAccounts,
    #[error("Failed to remove account")]
    RemoveAccount,
    #[error("Failed to rename file")]
    Rename,
    #[error("Failed to delete file")]
    Delete,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid intents.
pub enum ReducerError {
    /// The entry id is not in the current listing.
    #[error("entry not found: {0}")]
    EntryNotFound(String),
    /// A folder id was empty.
    #[error("folder id must not be empty")]
    EmptyFolderId,
    /// The account selector names an account that is not connected.
    #[error("account not connected: {0}")]
    UnknownAccount(String),
}

/// Applies a [`DriveAction`] to the session state and collects the resulting side effects.
///
/// This is the only place explorer state changes. Remote calls never happen here; they are
/// emitted as [`DriveEffect`]s and their completions come back as further actions.
///
/// Stale listing results, declined dialogs, unchanged rename values and repeated actions on an
/// entry that is already pending are absorbed as `Ok` with no effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when an intent references an unknown entry or account, or an empty
/// folder id. The state is left untouched in that case.
pub fn reduce_drive(
    state: &mut SessionState,
    action: DriveAction,
) -> Result<Vec<DriveEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DriveAction::Boot => {
            effects.push(DriveEffect::FetchAccounts);
            effects.push(DriveEffect::FetchListing(state.issue_listing()));
        }
        DriveAction::OpenEntry { entry_id } => {
            let entry = state
                .catalog
                .get(&entry_id)
                .cloned()
                .ok_or(ReducerError::EntryNotFound(entry_id))?;
            if entry.is_folder() {
                enter_folder(state, entry.id, entry.name, &mut effects)?;
            } else {
                state.preview = Some(entry.id.clone());
                effects.push(DriveEffect::OpenPreview { file_id: entry.id });
            }
        }
        DriveAction::OpenFolder {
            folder_id,
            display_name,
        } => enter_folder(state, folder_id, display_name, &mut effects)?,
        DriveAction::GoBack => {
            if state.navigation.back() {
                effects.push(DriveEffect::FetchListing(state.issue_listing()));
            }
        }
        DriveAction::Reload => {
            effects.push(DriveEffect::FetchListing(state.issue_listing()));
        }
        DriveAction::SwitchAccount { account } => {
            if !state.accounts.admits(&account) {
                return Err(ReducerError::UnknownAccount(account.as_str().to_string()));
            }
            state.filter.set_account(account);
            effects.push(DriveEffect::FetchListing(state.issue_listing()));
        }
        DriveAction::SwitchType { type_filter } => {
            state.filter.set_type(type_filter);
        }
        DriveAction::ListingLoaded {
            token,
            folder_id,
            mut entries,
        } => {
            if !state.accepts_listing(token, &folder_id) {
                logging::debug_warn!("dropping stale listing {token:?} for folder {folder_id}");
                return Ok(effects);
            }
            for entry in &mut entries {
                if entry.parent_id.is_empty() {
                    entry.parent_id = folder_id.clone();
                }
            }
            state.active_listing = None;
            state.catalog.replace(entries);
            state.navigation.mark_clean();
            if state.preview.take().is_some() {
                effects.push(DriveEffect::ClosePreview);
            }
        }
        DriveAction::ListingFailed {
            token,
            folder_id,
            error,
        } => {
            if !state.accepts_listing(token, &folder_id) {
                logging::debug_warn!("dropping stale listing failure {token:?}: {error}");
                return Ok(effects);
            }
            logging::warn!("listing folder {folder_id} failed: {error}");
            state.active_listing = None;
            surface(state, DriveFailure::ListFiles, &mut effects);
        }
        DriveAction::BeginRename { entry_id } => {
            let entry = state
                .catalog
                .get(&entry_id)
                .ok_or_else(|| ReducerError::EntryNotFound(entry_id.clone()))?;
            if state.pending_action(&entry_id).is_none() {
                effects.push(DriveEffect::PromptRename {
                    current_name: entry.name.clone(),
                    entry_id,
                });
            }
        }
        DriveAction::RequestRename { entry_id, new_name } => {
            let entry = state
                .catalog
                .get(&entry_id)
                .ok_or_else(|| ReducerError::EntryNotFound(entry_id.clone()))?;
            if new_name.trim().is_empty() || new_name == entry.name {
                return Ok(effects);
            }
            if state.begin_pending(&entry_id, PendingActionKind::Rename) {
                effects.push(DriveEffect::RenameEntry { entry_id, new_name });
            } else {
                logging::debug_warn!("rename ignored: {entry_id} already has a pending action");
            }
        }
        DriveAction::RenameSucceeded { entry_id, new_name } => {
            state.finish_pending(&entry_id);
            if !state.catalog.apply_rename(&entry_id, &new_name) {
                logging::debug_warn!("renamed entry {entry_id} is no longer listed");
            }
        }
        DriveAction::RenameFailed { entry_id, error } => {
            logging::warn!("rename {entry_id} failed: {error}");
            state.finish_pending(&entry_id);
            surface(state, DriveFailure::Rename, &mut effects);
        }
        DriveAction::RequestDelete { entry_id } => {
            if state.catalog.get(&entry_id).is_none() {
                return Err(ReducerError::EntryNotFound(entry_id));
            }
            if state.pending_action(&entry_id).is_none() {
                effects.push(DriveEffect::ConfirmDelete { entry_id });
            }
        }
        DriveAction::DeleteConfirmed { entry_id } => {
            if state.catalog.get(&entry_id).is_none() {
                return Err(ReducerError::EntryNotFound(entry_id));
            }
            if state.begin_pending(&entry_id, PendingActionKind::Delete) {
                effects.push(DriveEffect::DeleteEntry { entry_id });
            } else {
                logging::debug_warn!("delete ignored: {entry_id} already has a pending action");
            }
        }
        DriveAction::DeleteSucceeded { entry_id } => {
            state.finish_pending(&entry_id);
            state.catalog.apply_delete(&entry_id);
            if state.preview.as_deref() == Some(entry_id.as_str()) {
                state.preview = None;
                effects.push(DriveEffect::ClosePreview);
            }
        }
        DriveAction::DeleteFailed { entry_id, error } => {
            logging::warn!("delete {entry_id} failed: {error}");
            state.finish_pending(&entry_id);
            surface(state, DriveFailure::Delete, &mut effects);
        }
        DriveAction::RefreshAccounts => effects.push(DriveEffect::FetchAccounts),
        DriveAction::AccountsLoaded { accounts } => {
            state
                .accounts
                .rebuild(accounts.into_iter().map(|account| account.email));
            if !state.accounts.admits(&state.filter.account) {
                logging::log!(
                    "active account {} disconnected; showing all accounts",
                    state.filter.account.as_str()
                );
                state.filter.set_account(AccountFilter::All);
                state.navigation.reset_to_root();
                effects.push(DriveEffect::FetchListing(state.issue_listing()));
            }
        }
        DriveAction::AccountsFailed { error } => {
            logging::warn!("listing accounts failed: {error}");
            surface(state, DriveFailure::ListAccounts, &mut effects);
        }
        DriveAction::RequestRemoveAccount { email } => {
            effects.push(DriveEffect::ConfirmRemoveAccount { email });
        }
        DriveAction::RemoveAccountConfirmed { email } => {
            effects.push(DriveEffect::RemoveAccount { email });
        }
        DriveAction::AccountRemoved { email } => {
            state.accounts.remove(&email);
            if state.filter.account.email() == Some(email.as_str()) {
                state.filter.set_account(AccountFilter::All);
            }
            state.navigation.reset_to_root();
            effects.push(DriveEffect::FetchAccounts);
            effects.push(DriveEffect::FetchListing(state.issue_listing()));
        }
        DriveAction::RemoveAccountFailed { email, error } => {
            logging::warn!("removing account {email} failed: {error}");
            surface(state, DriveFailure::RemoveAccount, &mut effects);
        }
        DriveAction::AddAccount => effects.push(DriveEffect::BeginAccountAuthorization),
        DriveAction::ClosePreview => {
            if state.preview.take().is_some() {
                effects.push(DriveEffect::ClosePreview);
            }
        }
        DriveAction::DismissNotice => state.notice = None,
    }

    Ok(effects)
}

fn enter_folder(
    state: &mut SessionState,
    folder_id: String,
    display_name: String,
    effects: &mut Vec<DriveEffect>,
) -> Result<(), ReducerError> {
    if !state.navigation.enter(folder_id, display_name) {
        return Err(ReducerError::EmptyFolderId);
    }
    effects.push(DriveEffect::FetchListing(state.issue_listing()));
    Ok(())
}

fn surface(state: &mut SessionState, failure: DriveFailure, effects: &mut Vec<DriveEffect>) {
    state.notice = Some(failure.to_string());
    effects.push(DriveEffect::Alert(failure));
}
