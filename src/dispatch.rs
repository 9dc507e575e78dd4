//! Action Dispatch
//!
//! Runs a `Plan` on the event loop: shows the planned view at once, spawns
//! the detached requests, then spawns the main request and applies its
//! answer to the view as it is when the answer lands. Nothing is cancelled
//! or sequenced, so two in-flight actions race and the later answer wins.

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::{GetUntracked, Set};

use crate::actions::{apply, plan, Action};
use crate::api::Transport;
use crate::store::{ViewState, ViewStore};

/// Read and replace the whole view
pub trait ViewHandle: Clone + 'static {
    fn snapshot(&self) -> ViewState;
    fn replace(&self, state: ViewState);
}

impl ViewHandle for ViewStore {
    fn snapshot(&self) -> ViewState {
        self.get_untracked()
    }

    fn replace(&self, state: ViewState) {
        self.set(state);
    }
}

/// Run `action`; `spawn` puts a task on the local executor
pub fn dispatch<T, V, S>(transport: T, view: V, action: Action, now: &str, spawn: S)
where
    T: Transport + Clone + 'static,
    V: ViewHandle,
    S: Fn(LocalBoxFuture<'static, ()>),
{
    let plan = plan(action, &view.snapshot(), now);
    view.replace(plan.state);

    for request in plan.detached {
        let transport = transport.clone();
        spawn(
            async move {
                match transport.send(&request).await {
                    Ok(_) => log::debug!("{} done (detached)", request),
                    Err(err) => log::debug!("{} failed (detached, ignored): {}", request, err),
                }
            }
            .boxed_local(),
        );
    }

    let Some(request) = plan.request else {
        return;
    };
    log::info!("{:?}: {}", action, request);
    spawn(
        async move {
            let outcome = transport.send(&request).await;
            if let Err(err) = &outcome {
                log::warn!("{} failed: {}", request, err);
            }
            view.replace(apply(action, view.snapshot(), outcome));
        }
        .boxed_local(),
    );
}
