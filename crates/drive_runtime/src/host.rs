//! Host-side execution of reducer effects.
//!
//! Every [`DriveEffect`] is resolved against the injected [`HostServices`] and turned into the
//! follow-up [`DriveAction`]s the reducer expects. Nothing here touches session state.

use drive_host::{DriveConfig, HostServices};
use leptos::logging;

use crate::reducer::{DriveAction, DriveEffect};

#[derive(Clone)]
/// Host service bundle for drive runtime side effects.
pub struct DriveHostContext {
    services: HostServices,
}

impl DriveHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    pub fn config(&self) -> &DriveConfig {
        &self.services.config
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`DriveEffect`] and returns the actions its outcome produces.
    pub async fn run_effect(&self, effect: DriveEffect) -> Vec<DriveAction> {
        let services = &self.services;
        match effect {
            DriveEffect::FetchListing(request) => {
                let result = services
                    .api
                    .list_files(&request.folder_id, request.account.as_deref())
                    .await;
                vec![match result {
                    Ok(entries) => DriveAction::ListingLoaded {
                        token: request.token,
                        folder_id: request.folder_id,
                        entries,
                    },
                    Err(error) => DriveAction::ListingFailed {
                        token: request.token,
                        folder_id: request.folder_id,
                        error,
                    },
                }]
            }
            DriveEffect::FetchAccounts => vec![match services.api.list_accounts().await {
                Ok(accounts) => DriveAction::AccountsLoaded { accounts },
                Err(error) => DriveAction::AccountsFailed { error },
            }],
            DriveEffect::OpenPreview { file_id } => {
                let url = services.config.preview_url(&file_id);
                if let Err(err) = services.preview.show_preview(&url).await {
                    logging::warn!("preview {file_id} failed: {err}");
                }
                Vec::new()
            }
            DriveEffect::ClosePreview => {
                if let Err(err) = services.preview.close_preview().await {
                    logging::warn!("closing preview failed: {err}");
                }
                Vec::new()
            }
            DriveEffect::PromptRename {
                entry_id,
                current_name,
            } => services
                .dialogs
                .prompt(&services.config.rename_prompt, &current_name)
                .await
                .map(|new_name| DriveAction::RequestRename { entry_id, new_name })
                .into_iter()
                .collect(),
            DriveEffect::RenameEntry { entry_id, new_name } => {
                vec![match services.api.rename_file(&entry_id, &new_name).await {
                    Ok(()) => DriveAction::RenameSucceeded { entry_id, new_name },
                    Err(error) => DriveAction::RenameFailed { entry_id, error },
                }]
            }
            DriveEffect::ConfirmDelete { entry_id } => {
                if services.dialogs.confirm(&services.config.delete_prompt).await {
                    vec![DriveAction::DeleteConfirmed { entry_id }]
                } else {
                    Vec::new()
                }
            }
            DriveEffect::DeleteEntry { entry_id } => {
                vec![match services.api.delete_file(&entry_id).await {
                    Ok(()) => DriveAction::DeleteSucceeded { entry_id },
                    Err(error) => DriveAction::DeleteFailed { entry_id, error },
                }]
            }
            DriveEffect::ConfirmRemoveAccount { email } => {
                let message = format!("{} {email}", services.config.remove_account_prompt);
                if services.dialogs.confirm(&message).await {
                    vec![DriveAction::RemoveAccountConfirmed { email }]
                } else {
                    Vec::new()
                }
            }
            DriveEffect::RemoveAccount { email } => {
                vec![match services.api.remove_account(&email).await {
                    Ok(()) => DriveAction::AccountRemoved { email },
                    Err(error) => DriveAction::RemoveAccountFailed { email, error },
                }]
            }
            DriveEffect::BeginAccountAuthorization => {
                if let Err(err) = services.auth.redirect(&services.config.auth_path).await {
                    logging::warn!("account authorization redirect failed: {err}");
                }
                Vec::new()
            }
            DriveEffect::Alert(failure) => {
                if let Err(err) = services.alerts.alert(&failure.to_string()).await {
                    logging::warn!("alert delivery failed: {err}");
                }
                Vec::new()
            }
        }
    }
}
