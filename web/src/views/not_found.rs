use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="container not-found">
            <h1>"404"</h1>
            <p>"Nothing to see here. Head back to the map to find places nearby."</p>
            <button on:click=move |_| navigate("/", Default::default())>
                "🗺️ Back to the map"
            </button>
        </div>
    }
}
