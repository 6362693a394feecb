//! Explicit effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DriveRuntimeContext;

/// Installs the effect executor that drains reducer-emitted effects in order.
pub fn install(runtime: DriveRuntimeContext) {
    // Clear the current queue before processing so completions dispatched from the spawned tasks
    // enqueue a fresh batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            let host = runtime.host.get_value();
            spawn_local(async move {
                for action in host.run_effect(effect).await {
                    runtime.dispatch_action(action);
                }
            });
        }
    });
}
