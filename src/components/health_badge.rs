//! Service Health Badge
//!
//! Probes `/healthcheck` once on mount. Kept apart from the status slot so
//! it never overwrites an operation's outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::{self, ApiError, Transport};
use crate::context::use_console;
use crate::models::Health;

pub const UNREACHABLE: &str = "Unreachable";

#[component]
pub fn HealthBadge() -> impl IntoView {
    let console = use_console();
    let (label, set_label) = signal(String::from("…"));
    let (healthy, set_healthy) = signal(false);

    Effect::new(move |_| {
        let transport = console.transport();
        spawn_local(async move {
            let outcome = transport.send(&api::healthcheck()).await;
            if let Err(err) = &outcome {
                log::warn!("health probe failed: {}", err);
            }
            let (text, ok) = health_label(outcome);
            set_label.set(text);
            set_healthy.set(ok);
        });
    });

    view! {
        <span class=move || if healthy.get() { "health-badge ok" } else { "health-badge down" }>
            "Service: " {move || label.get()}
        </span>
    }
}

/// Badge text and whether the service reported itself healthy
pub fn health_label(outcome: Result<Value, ApiError>) -> (String, bool) {
    match outcome.and_then(|body| Ok(serde_json::from_value::<Health>(body)?)) {
        Ok(health) => (health.message, true),
        Err(_) => (UNREACHABLE.to_string(), false),
    }
}
