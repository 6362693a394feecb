//! Runtime provider and context wiring for the drive explorer.
//!
//! This module owns the long-lived session signal, the effect queue and the reducer dispatch
//! callback. UI composition stays in [`crate::components`].

use drive_host::HostServices;
use leptos::*;

use crate::{
    effect_executor,
    host::DriveHostContext,
    model::SessionState,
    reducer::{reduce_drive, DriveAction, DriveEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading explorer state and dispatching [`DriveAction`] values.
pub struct DriveRuntimeContext {
    /// Host service bundle for executing reducer side effects.
    pub host: StoredValue<DriveHostContext>,
    /// Reactive session state signal.
    pub state: RwSignal<SessionState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<DriveEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DriveAction>,
}

impl DriveRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DriveAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DriveRuntimeContext`] to descendant components and boots the session.
pub fn DriveProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DriveHostContext::new(host_services));
    let state = create_rw_signal(SessionState::default());
    let effects = create_rw_signal(Vec::<DriveEffect>::new());

    let dispatch = Callback::new(move |action: DriveAction| {
        let mut session = state.get_untracked();
        let previous = session.clone();

        match reduce_drive(&mut session, action) {
            Ok(new_effects) => {
                if session != previous {
                    state.set(session);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("drive reducer error: {err}"),
        }
    });

    let runtime = DriveRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    logging::log!(
        "drive runtime using {} host",
        host.get_value().host_strategy_name()
    );

    effect_executor::install(runtime);
    runtime.dispatch_action(DriveAction::Boot);

    children().into_view()
}

/// Returns the current [`DriveRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DriveProvider`].
pub fn use_drive_runtime() -> DriveRuntimeContext {
    use_context::<DriveRuntimeContext>().expect("DriveRuntimeContext not provided")
}
