use std::{collections::VecDeque, rc::Rc};

use drive_host::{
    AccountInfo, DriveApiCall, DriveApiOp, FileEntry, HostServices, MemoryAlertService,
    MemoryDriveApiService, MemoryPreviewService, ScriptedDialogService, FOLDER_MIME_TYPE,
    PDF_MIME_TYPE,
};
use drive_runtime::{
    reduce_drive, AccountFilter, CoordinatorPhase, DriveAction, DriveEffect, DriveHostContext,
    ListingView, SessionState, TypeFilter,
};
use futures::executor::block_on;
use pretty_assertions::assert_eq;

struct Session {
    state: SessionState,
    host: DriveHostContext,
    api: MemoryDriveApiService,
    dialogs: ScriptedDialogService,
    alerts: MemoryAlertService,
    preview: MemoryPreviewService,
}

impl Session {
    fn new(accounts: &[&str], files: Vec<FileEntry>) -> Self {
        let api = MemoryDriveApiService::seeded(
            accounts.iter().copied().map(AccountInfo::new).collect(),
            files,
        );
        let dialogs = ScriptedDialogService::default();
        let alerts = MemoryAlertService::default();
        let preview = MemoryPreviewService::default();
        let mut services = HostServices::noop();
        services.api = Rc::new(api.clone());
        services.dialogs = Rc::new(dialogs.clone());
        services.alerts = Rc::new(alerts.clone());
        services.preview = Rc::new(preview.clone());
        Self {
            state: SessionState::default(),
            host: DriveHostContext::new(services),
            api,
            dialogs,
            alerts,
            preview,
        }
    }

    /// Reduces `action` and returns the effects without executing them.
    fn reduce(&mut self, action: DriveAction) -> Vec<DriveEffect> {
        reduce_drive(&mut self.state, action).expect("reduce")
    }

    /// Reduces `action` and runs every resulting effect to quiescence.
    fn dispatch(&mut self, action: DriveAction) {
        let effects = self.reduce(action);
        self.settle(effects);
    }

    fn settle(&mut self, effects: Vec<DriveEffect>) {
        let mut queue: VecDeque<DriveEffect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            for action in block_on(self.host.run_effect(effect)) {
                queue.extend(self.reduce(action));
            }
        }
    }

    fn visible_names(&self) -> Vec<String> {
        self.state
            .visible_entries()
            .into_iter()
            .map(|entry| entry.name)
            .collect()
    }
}

fn drive_files() -> Vec<FileEntry> {
    vec![
        FileEntry::new("f1", "Reports", FOLDER_MIME_TYPE, "u@x.com", "root"),
        FileEntry::new("f2", "Photos", FOLDER_MIME_TYPE, "u@x.com", "root"),
        FileEntry::new("p1", "q1.pdf", PDF_MIME_TYPE, "u@x.com", "f1"),
        FileEntry::new("i1", "cat.png", "image/png", "u@x.com", "f2"),
        FileEntry::new("v1", "notes.txt", "text/plain", "v@x.com", "root"),
    ]
}

fn open_folder(folder_id: &str, display_name: &str) -> DriveAction {
    DriveAction::OpenFolder {
        folder_id: folder_id.to_string(),
        display_name: display_name.to_string(),
    }
}

#[test]
fn boot_lists_accounts_and_the_root_of_every_account() {
    let mut session = Session::new(&["u@x.com", "v@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    assert_eq!(session.state.phase(), CoordinatorPhase::Ready);
    assert_eq!(session.state.accounts.emails(), &["u@x.com", "v@x.com"]);
    assert_eq!(
        session.visible_names(),
        vec!["Reports", "Photos", "notes.txt"]
    );
    assert_eq!(
        session.api.calls()[..2].to_vec(),
        vec![
            DriveApiCall::ListAccounts,
            DriveApiCall::ListFiles {
                parent_id: "root".to_string(),
                account: None,
            },
        ]
    );
}

#[test]
fn navigating_in_and_out_refetches_each_folder() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    session.dispatch(DriveAction::OpenEntry {
        entry_id: "f1".to_string(),
    });
    assert_eq!(session.state.navigation.breadcrumb_label(), "My Drive / Reports");
    assert_eq!(session.visible_names(), vec!["q1.pdf"]);

    session.dispatch(DriveAction::GoBack);
    assert_eq!(session.state.navigation.depth(), 1);
    assert_eq!(session.visible_names(), vec!["Reports", "Photos", "notes.txt"]);

    let before = session.api.calls().len();
    session.dispatch(DriveAction::GoBack);
    assert_eq!(session.api.calls().len(), before);
}

#[test]
fn late_response_for_an_abandoned_folder_is_discarded() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    let first = session.reduce(open_folder("f1", "Reports"));
    let second = session.reduce(open_folder("f2", "Photos"));

    // The second folder resolves first; the first one arrives late.
    session.settle(second);
    session.settle(first);

    assert_eq!(
        session.state.navigation.breadcrumb_label(),
        "My Drive / Reports / Photos"
    );
    assert_eq!(session.visible_names(), vec!["cat.png"]);
    assert_eq!(session.state.phase(), CoordinatorPhase::Ready);
}

#[test]
fn type_filter_narrows_without_refetching() {
    let mut session = Session::new(&["u@x.com", "v@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);
    let calls = session.api.calls().len();

    session.dispatch(DriveAction::SwitchType {
        type_filter: TypeFilter::Doc,
    });
    assert_eq!(session.visible_names(), vec!["notes.txt"]);

    session.dispatch(DriveAction::SwitchType {
        type_filter: TypeFilter::Pdf,
    });
    assert_eq!(session.state.listing_view(), ListingView::NoFilesFound);
    assert_eq!(session.api.calls().len(), calls);
}

#[test]
fn account_switch_scopes_the_remote_listing() {
    let mut session = Session::new(&["u@x.com", "v@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    session.dispatch(DriveAction::SwitchAccount {
        account: AccountFilter::from("v@x.com"),
    });

    assert_eq!(session.visible_names(), vec!["notes.txt"]);
    assert_eq!(
        session.api.calls().last(),
        Some(&DriveApiCall::ListFiles {
            parent_id: "root".to_string(),
            account: Some("v@x.com".to_string()),
        })
    );
}

#[test]
fn removing_the_active_account_returns_to_all_at_root() {
    let mut session = Session::new(&["u@x.com", "v@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);
    session.dispatch(DriveAction::SwitchAccount {
        account: AccountFilter::from("u@x.com"),
    });
    session.dispatch(DriveAction::OpenEntry {
        entry_id: "f1".to_string(),
    });

    session.dialogs.push_confirm(true);
    session.dispatch(DriveAction::RequestRemoveAccount {
        email: "u@x.com".to_string(),
    });

    assert_eq!(session.state.filter.account, AccountFilter::All);
    assert_eq!(session.state.navigation.depth(), 1);
    assert_eq!(session.state.accounts.emails(), &["v@x.com"]);
    assert_eq!(session.visible_names(), vec!["notes.txt"]);
    assert_eq!(
        session.api.calls().last(),
        Some(&DriveApiCall::ListFiles {
            parent_id: "root".to_string(),
            account: None,
        })
    );
}

#[test]
fn declining_account_removal_keeps_everything() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);
    let before = session.state.clone();

    session.dialogs.push_confirm(false);
    session.dispatch(DriveAction::RequestRemoveAccount {
        email: "u@x.com".to_string(),
    });

    assert_eq!(session.state, before);
    assert_eq!(session.api.account_emails(), vec!["u@x.com".to_string()]);
}

#[test]
fn rename_flow_prompts_then_applies_the_confirmed_name() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    session.dialogs.push_prompt(Some("Archive"));
    session.dispatch(DriveAction::BeginRename {
        entry_id: "f1".to_string(),
    });

    assert_eq!(session.visible_names()[0], "Archive");
    assert_eq!(
        session.api.calls().last(),
        Some(&DriveApiCall::RenameFile {
            file_id: "f1".to_string(),
            new_name: "Archive".to_string(),
        })
    );
}

#[test]
fn renaming_to_the_same_name_sends_nothing() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);
    let calls = session.api.calls().len();

    session.dialogs.push_prompt(Some("Reports"));
    session.dispatch(DriveAction::BeginRename {
        entry_id: "f1".to_string(),
    });
    session.dispatch(DriveAction::BeginRename {
        entry_id: "f1".to_string(),
    });

    assert_eq!(session.api.calls().len(), calls);
    assert_eq!(session.visible_names()[0], "Reports");
}

#[test]
fn delete_requires_confirmation() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    session.dialogs.push_confirm(false);
    session.dispatch(DriveAction::RequestDelete {
        entry_id: "f2".to_string(),
    });
    assert_eq!(session.visible_names().len(), 3);

    session.dialogs.push_confirm(true);
    session.dispatch(DriveAction::RequestDelete {
        entry_id: "f2".to_string(),
    });
    assert_eq!(session.visible_names(), vec!["Reports", "notes.txt"]);
    assert!(session.api.files().iter().all(|entry| entry.id != "f2"));
}

#[test]
fn remote_failures_alert_and_leave_the_listing_alone() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);

    session.api.set_failing(DriveApiOp::DeleteFile, true);
    session.dialogs.push_confirm(true);
    session.dispatch(DriveAction::RequestDelete {
        entry_id: "f2".to_string(),
    });

    session.api.set_failing(DriveApiOp::ListFiles, true);
    session.dispatch(DriveAction::Reload);

    assert_eq!(
        session.alerts.messages(),
        vec![
            "Failed to delete file".to_string(),
            "Failed to load files".to_string()
        ]
    );
    assert_eq!(session.visible_names().len(), 3);
    assert_eq!(session.state.phase(), CoordinatorPhase::Ready);
}

#[test]
fn opening_a_file_shows_one_preview_and_a_listing_closes_it() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.dispatch(DriveAction::Boot);
    session.dispatch(DriveAction::OpenEntry {
        entry_id: "f1".to_string(),
    });

    session.dispatch(DriveAction::OpenEntry {
        entry_id: "p1".to_string(),
    });
    assert_eq!(
        session.preview.current().as_deref(),
        Some("https://drive.google.com/file/d/p1/preview")
    );

    session.dispatch(DriveAction::GoBack);
    assert_eq!(session.preview.current(), None);
    assert_eq!(session.state.preview, None);
}

#[test]
fn failed_first_listing_offers_a_retry_instead_of_loading_forever() {
    let mut session = Session::new(&["u@x.com"], drive_files());
    session.api.set_failing(DriveApiOp::ListFiles, true);
    session.dispatch(DriveAction::Boot);

    assert_eq!(session.state.phase(), CoordinatorPhase::Idle);
    assert_eq!(session.state.listing_view(), ListingView::Unavailable);
    assert_eq!(session.alerts.messages(), vec!["Failed to load files".to_string()]);

    session.api.set_failing(DriveApiOp::ListFiles, false);
    session.dispatch(DriveAction::Reload);
    assert_eq!(session.state.phase(), CoordinatorPhase::Ready);
    assert_eq!(session.visible_names(), vec!["Reports", "Photos", "notes.txt"]);
}
