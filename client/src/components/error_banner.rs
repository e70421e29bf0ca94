//! Error banner for callback, sign-in and sign-out failures.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ErrorBanner(auth: RwSignal<AuthState>) -> impl IntoView {
    let message = move || auth.with(|state| state.message.clone());

    view! {
        <Show when=move || message().is_some()>
            <div class="alert alert--error" role="alert">
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
