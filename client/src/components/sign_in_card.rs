//! Sign-in prompt shown while unauthenticated.

use leptos::prelude::*;

use crate::components::config_panel::ConfigPanel;
use crate::net::types::ConfigSummary;

#[component]
pub fn SignInCard(on_sign_in: Callback<()>, config: RwSignal<Option<ConfigSummary>>) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Sign-in required"</h2>
            <button class="button" on:click=move |_| on_sign_in.run(())>
                "Sign in with Cognito"
            </button>
            <ConfigPanel config/>
        </div>
    }
}
