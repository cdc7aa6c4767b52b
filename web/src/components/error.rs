use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Inline error banner; without a message it shows the generic places error.
#[component]
pub fn ErrorView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "Failed to load places".to_string())}
        </MessageBar>
    }
}
