//! Session-scoped explorer state: navigation, filters, the listed batch and accounts.

mod accounts;
mod catalog;
mod filter;
mod navigation;

use std::collections::BTreeMap;

use drive_host::FileEntry;
use serde::{Deserialize, Serialize};

pub use accounts::AccountRegistry;
pub use catalog::{FileCatalog, ListingView};
pub use filter::{AccountFilter, FilterState, TypeFilter};
pub use navigation::{FolderPathEntry, NavigationStack};

/// Token identifying one folder-listing request; later requests carry larger tokens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ListingToken(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// A folder listing that has been issued and not yet resolved.
pub struct ListingRequest {
    pub token: ListingToken,
    pub folder_id: String,
    /// Account the remote listing is scoped to; `None` for all accounts.
    pub account: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Remote mutation awaiting server confirmation.
pub enum PendingActionKind {
    Rename,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Coordinator phase derived from the session bookkeeping.
pub enum CoordinatorPhase {
    /// Nothing listed yet and nothing in flight.
    Idle,
    /// A folder listing is in flight.
    Loading { folder_id: String },
    /// A listing is applied and nothing is in flight.
    Ready,
    /// A rename/delete is awaiting the server (the earliest-issued one is reported).
    ActionPending {
        kind: PendingActionKind,
        target_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// The single per-page explorer state object.
pub struct SessionState {
    pub navigation: NavigationStack,
    pub filter: FilterState,
    pub catalog: FileCatalog,
    pub accounts: AccountRegistry,
    /// Latest listing issued and still unresolved.
    pub active_listing: Option<ListingRequest>,
    /// Last token handed out.
    pub last_listing_token: ListingToken,
    /// Pending remote mutations keyed by entry id, tagged with issue order.
    pub pending_actions: BTreeMap<String, (u64, PendingActionKind)>,
    pub pending_sequence: u64,
    /// File id of the open preview surface.
    pub preview: Option<String>,
    /// Latest failure message surfaced to the user.
    pub notice: Option<String>,
}

impl SessionState {
    /// Issues a listing request for the current folder and account scope.
    ///
    /// The new request supersedes any request still in flight.
    pub fn issue_listing(&mut self) -> ListingRequest {
        self.last_listing_token = ListingToken(self.last_listing_token.0 + 1);
        let request = ListingRequest {
            token: self.last_listing_token,
            folder_id: self.navigation.current_folder_id().to_string(),
            account: self.filter.account_scope().map(str::to_string),
        };
        self.active_listing = Some(request.clone());
        request
    }

    /// Whether a listing result for `token`/`folder_id` is still wanted.
    pub fn accepts_listing(&self, token: ListingToken, folder_id: &str) -> bool {
        self.active_listing
            .as_ref()
            .is_some_and(|active| active.token == token)
            && self.navigation.current_folder_id() == folder_id
    }

    pub fn phase(&self) -> CoordinatorPhase {
        if let Some(active) = &self.active_listing {
            return CoordinatorPhase::Loading {
                folder_id: active.folder_id.clone(),
            };
        }
        if let Some((target_id, (_, kind))) = self
            .pending_actions
            .iter()
            .min_by_key(|(_, (sequence, _))| *sequence)
        {
            return CoordinatorPhase::ActionPending {
                kind: *kind,
                target_id: target_id.clone(),
            };
        }
        if self.catalog.is_loaded() {
            CoordinatorPhase::Ready
        } else {
            CoordinatorPhase::Idle
        }
    }

    pub fn pending_action(&self, entry_id: &str) -> Option<PendingActionKind> {
        self.pending_actions.get(entry_id).map(|(_, kind)| *kind)
    }

    /// Marks `entry_id` pending. Returns `false` if it already was.
    pub fn begin_pending(&mut self, entry_id: &str, kind: PendingActionKind) -> bool {
        if self.pending_actions.contains_key(entry_id) {
            return false;
        }
        self.pending_sequence += 1;
        self.pending_actions
            .insert(entry_id.to_string(), (self.pending_sequence, kind));
        true
    }

    pub fn finish_pending(&mut self, entry_id: &str) -> Option<PendingActionKind> {
        self.pending_actions.remove(entry_id).map(|(_, kind)| kind)
    }

    /// The view of the current batch under the active filters.
    ///
    /// An unloaded catalog only reads as loading while a listing is actually in flight.
    pub fn listing_view(&self) -> ListingView {
        match self.catalog.view(&self.filter) {
            ListingView::NotLoaded if self.active_listing.is_none() => ListingView::Unavailable,
            view => view,
        }
    }

    pub fn visible_entries(&self) -> Vec<FileEntry> {
        self.catalog.visible_entries(&self.filter).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_listing_supersedes_the_previous_one() {
        let mut state = SessionState::default();
        let first = state.issue_listing();
        state.navigation.enter("f2", "Two");
        let second = state.issue_listing();

        assert!(second.token > first.token);
        assert!(!state.accepts_listing(first.token, "root"));
        assert!(state.accepts_listing(second.token, "f2"));
        assert!(!state.accepts_listing(second.token, "root"));
    }

    #[test]
    fn listing_requests_carry_the_account_scope() {
        let mut state = SessionState::default();
        state.filter.account = AccountFilter::from("u@x.com");
        assert_eq!(state.issue_listing().account.as_deref(), Some("u@x.com"));
    }

    #[test]
    fn phase_follows_bookkeeping() {
        let mut state = SessionState::default();
        assert_eq!(state.phase(), CoordinatorPhase::Idle);

        state.issue_listing();
        assert_eq!(
            state.phase(),
            CoordinatorPhase::Loading {
                folder_id: "root".to_string()
            }
        );

        state.active_listing = None;
        state.catalog.replace(Vec::new());
        assert_eq!(state.phase(), CoordinatorPhase::Ready);

        assert!(state.begin_pending("b", PendingActionKind::Delete));
        assert!(state.begin_pending("a", PendingActionKind::Rename));
        assert!(!state.begin_pending("b", PendingActionKind::Rename));
        assert_eq!(
            state.phase(),
            CoordinatorPhase::ActionPending {
                kind: PendingActionKind::Delete,
                target_id: "b".to_string()
            }
        );

        assert_eq!(state.finish_pending("b"), Some(PendingActionKind::Delete));
        assert_eq!(state.pending_action("a"), Some(PendingActionKind::Rename));
        assert_eq!(state.finish_pending("a"), Some(PendingActionKind::Rename));
        assert_eq!(state.phase(), CoordinatorPhase::Ready);
    }

    #[test]
    fn unloaded_view_reads_as_loading_only_while_a_listing_is_in_flight() {
        let mut state = SessionState::default();
        assert_eq!(state.listing_view(), ListingView::Unavailable);

        state.issue_listing();
        assert_eq!(state.listing_view(), ListingView::NotLoaded);

        state.active_listing = None;
        assert_eq!(state.phase(), CoordinatorPhase::Idle);
        assert_eq!(state.listing_view(), ListingView::Unavailable);
    }
}
