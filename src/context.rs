//! Console Context
//!
//! Shared handles provided via Leptos Context API.

use chrono::{SecondsFormat, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::Action;
use crate::api::HttpTransport;
use crate::config::ConsoleConfig;
use crate::dispatch::dispatch;
use crate::store::ViewStore;

/// Console-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    /// View state shared by every panel
    pub store: ViewStore,
    transport: StoredValue<HttpTransport>,
}

impl ConsoleContext {
    pub fn new(store: ViewStore, config: &ConsoleConfig) -> Self {
        Self {
            store,
            transport: StoredValue::new(HttpTransport::new(config.api_base.clone())),
        }
    }

    /// Run a button's action against the service
    pub fn run(&self, action: Action) {
        dispatch(self.transport(), self.store, action, &timestamp_now(), |task| spawn_local(task));
    }

    pub fn transport(&self) -> HttpTransport {
        self.transport.get_value()
    }
}

/// Get the console context
pub fn use_console() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}

/// Creation stamp for new wishlists, same shape as `Date.toJSON()`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
