//! Drains reducer-emitted [`RuntimeEffect`](crate::reducer::RuntimeEffect)s into the host.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

pub(crate) fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Take the batch before running it; effects dispatched meanwhile form the next batch.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(effect);
        }
    });
}
