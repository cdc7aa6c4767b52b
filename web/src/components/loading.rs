use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Small />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading places...".to_string())}
            </p>
        </div>
    }
}
