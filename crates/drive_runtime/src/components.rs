//! Explorer UI composition: account sidebar, toolbar, breadcrumb and file grid.

use drive_host::{account_avatar_letter, account_username, FileEntry, FOLDER_MIME_TYPE};
use leptos::*;

use crate::{
    model::{AccountFilter, ListingView, TypeFilter},
    reducer::DriveAction,
};

pub use crate::runtime_context::{use_drive_runtime, DriveProvider, DriveRuntimeContext};

fn entry_glyph(mime_type: &str) -> &'static str {
    if mime_type == FOLDER_MIME_TYPE {
        "📁"
    } else if TypeFilter::Pdf.matches(mime_type) {
        "📕"
    } else if TypeFilter::Image.matches(mime_type) {
        "🖼"
    } else if TypeFilter::Doc.matches(mime_type) {
        "📄"
    } else {
        "📦"
    }
}

/// Secondary card line built from the optional modification time and size.
fn entry_details(entry: &FileEntry) -> String {
    let modified = entry
        .modified_time
        .as_deref()
        .map(|stamp| stamp.split('T').next().unwrap_or(stamp));
    let size = entry
        .size
        .as_deref()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(format_size);
    match (modified, size) {
        (Some(modified), Some(size)) => format!("{modified} · {size}"),
        (Some(modified), None) => modified.to_string(),
        (None, Some(size)) => size,
        (None, None) => String::new(),
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[component]
/// Renders the explorer and routes every user intent through the runtime dispatch.
pub fn DriveShell() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let preview_host_id = runtime.host.with_value(|host| host.config().preview_host_id.clone());

    let breadcrumb = Signal::derive(move || state.with(|s| s.navigation.breadcrumb_label()));
    let can_go_back = Signal::derive(move || state.with(|s| s.navigation.can_go_back()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    view! {
        <div class="drive-shell" data-ui-slot="drive-shell">
            <AccountSidebar />

            <section class="drive-main">
                <div class="drive-toolbar" data-ui-slot="drive-toolbar">
                    <button
                        type="button"
                        class="drive-back"
                        disabled=move || !can_go_back.get()
                        on:click=move |_| runtime.dispatch_action(DriveAction::GoBack)
                    >
                        "← Back"
                    </button>
                    <div class="drive-breadcrumb" aria-label="Current folder">
                        {move || breadcrumb.get()}
                    </div>
                    <button
                        type="button"
                        class="drive-reload"
                        on:click=move |_| runtime.dispatch_action(DriveAction::Reload)
                    >
                        "Reload"
                    </button>
                </div>

                <TypeFilterBar />

                <Show when=move || notice.get().is_some() fallback=|| ()>
                    <div class="drive-notice" role="alert">
                        <span>{move || notice.get().unwrap_or_default()}</span>
                        <button
                            type="button"
                            aria-label="Dismiss"
                            on:click=move |_| runtime.dispatch_action(DriveAction::DismissNotice)
                        >
                            "✖"
                        </button>
                    </div>
                </Show>

                <FileGrid />
            </section>

            <aside class="drive-preview" aria-label="Preview">
                <Show when=move || state.with(|s| s.preview.is_some()) fallback=|| ()>
                    <button
                        type="button"
                        class="drive-preview-close"
                        on:click=move |_| runtime.dispatch_action(DriveAction::ClosePreview)
                    >
                        "Close preview"
                    </button>
                </Show>
                <div id=preview_host_id class="drive-preview-host"></div>
            </aside>
        </div>
    }
}

#[component]
fn AccountSidebar() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let options = Signal::derive(move || state.with(|s| s.accounts.options()));

    view! {
        <aside class="drive-accounts" aria-label="Accounts">
            <div class="drive-accounts-header">"Accounts"</div>
            <ul class="drive-account-list">
                <For each=move || options.get() key=|option| option.clone() let:option>
                    <AccountRow option=option />
                </For>
            </ul>
            <button
                type="button"
                class="drive-add-account"
                on:click=move |_| runtime.dispatch_action(DriveAction::AddAccount)
            >
                "+ Add account"
            </button>
        </aside>
    }
}

#[component]
fn AccountRow(option: AccountFilter) -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let is_selected = {
        let option = option.clone();
        Signal::derive(move || state.with(|s| s.filter.account == option))
    };
    let (avatar, label) = match option.email() {
        Some(email) => (
            account_avatar_letter(email),
            account_username(email).to_string(),
        ),
        None => ("∗".to_string(), "All accounts".to_string()),
    };
    let title = option.email().unwrap_or_default().to_string();
    let remove_email = option.email().map(str::to_string);

    view! {
        <li class="drive-account-row">
            <button
                type="button"
                class=move || if is_selected.get() { "drive-account selected" } else { "drive-account" }
                title=title
                on:click=move |_| {
                    runtime.dispatch_action(DriveAction::SwitchAccount {
                        account: option.clone(),
                    })
                }
            >
                <span class="drive-avatar">{avatar}</span>
                <span>{label}</span>
            </button>
            {remove_email.map(|email| {
                view! {
                    <button
                        type="button"
                        class="drive-account-remove"
                        aria-label="Remove account"
                        on:click=move |_| {
                            runtime.dispatch_action(DriveAction::RequestRemoveAccount {
                                email: email.clone(),
                            });
                        }
                    >
                        "✖"
                    </button>
                }
            })}
        </li>
    }
}

#[component]
fn TypeFilterBar() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;

    view! {
        <div class="drive-type-filters" role="toolbar" aria-label="Type filter">
            {TypeFilter::ALL_FILTERS
                .into_iter()
                .map(move |type_filter| {
                    let is_selected = Signal::derive(move || {
                        state.with(|s| s.filter.type_filter == type_filter)
                    });
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected.get() { "drive-type selected" } else { "drive-type" }
                            aria-pressed=move || is_selected.get().to_string()
                            on:click=move |_| {
                                runtime.dispatch_action(DriveAction::SwitchType { type_filter })
                            }
                        >
                            {type_filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FileGrid() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let open_menu = create_rw_signal(None::<String>);
    let view_state = Signal::derive(move || state.with(|s| s.listing_view()));

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if open_menu.get_untracked().is_some() {
            open_menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <div class="drive-grid-wrap" data-ui-slot="drive-grid">
            {move || match view_state.get() {
                ListingView::NotLoaded => {
                    view! { <div class="drive-empty">"Loading…"</div> }.into_view()
                }
                ListingView::Unavailable => {
                    view! {
                        <div class="drive-empty">
                            <span>"Files could not be loaded"</span>
                            <button
                                type="button"
                                class="drive-retry"
                                on:click=move |_| runtime.dispatch_action(DriveAction::Reload)
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                        .into_view()
                }
                ListingView::NoFilesFound => {
                    view! { <div class="drive-empty">"No files found"</div> }.into_view()
                }
                ListingView::Entries(entries) => {
                    view! {
                        <div class="drive-grid" role="grid">
                            <For
                                each=move || entries.clone()
                                key=|entry| (entry.id.clone(), entry.name.clone())
                                let:entry
                            >
                                <FileCard entry=entry open_menu=open_menu />
                            </For>
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn FileCard(entry: FileEntry, open_menu: RwSignal<Option<String>>) -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let id = entry.id.clone();

    let is_pending = {
        let id = id.clone();
        Signal::derive(move || state.with(|s| s.pending_action(&id).is_some()))
    };
    let menu_open = {
        let id = id.clone();
        Signal::derive(move || open_menu.with(|open| open.as_deref() == Some(id.as_str())))
    };
    let open_id = id.clone();
    let toggle_id = id.clone();
    let rename_id = id.clone();
    let delete_id = id;

    view! {
        <div
            class=move || if is_pending.get() { "drive-card pending" } else { "drive-card" }
            role="gridcell"
            title=entry.name.clone()
            on:click=move |_| {
                runtime.dispatch_action(DriveAction::OpenEntry {
                    entry_id: open_id.clone(),
                })
            }
        >
            <span class="drive-card-glyph">{entry_glyph(&entry.mime_type)}</span>
            <span class="drive-card-name">{entry.name.clone()}</span>
            <span class="drive-card-account">{account_username(&entry.account).to_string()}</span>
            <span class="drive-card-meta">{entry_details(&entry)}</span>
            <button
                type="button"
                class="drive-card-menu"
                aria-label="Actions"
                disabled=move || is_pending.get()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    let id = toggle_id.clone();
                    open_menu.update(|open| {
                        *open = if open.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                    });
                }
            >
                "⋮"
            </button>
            <Show when=move || menu_open.get() fallback=|| ()>
                <div
                    class="drive-card-actions"
                    role="menu"
                    on:mousedown=move |ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        role="menuitem"
                        on:click={
                            let rename_id = rename_id.clone();
                            move |ev| {
                                ev.stop_propagation();
                                open_menu.set(None);
                                runtime.dispatch_action(DriveAction::BeginRename {
                                    entry_id: rename_id.clone(),
                                });
                            }
                        }
                    >
                        "Rename"
                    </button>
                    <button
                        type="button"
                        role="menuitem"
                        on:click={
                            let delete_id = delete_id.clone();
                            move |ev| {
                                ev.stop_propagation();
                                open_menu.set(None);
                                runtime.dispatch_action(DriveAction::RequestDelete {
                                    entry_id: delete_id.clone(),
                                });
                            }
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
