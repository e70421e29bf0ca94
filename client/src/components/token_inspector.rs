//! Toggle revealing the raw ID token.

#[cfg(test)]
#[path = "token_inspector_test.rs"]
mod token_inspector_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

pub fn token_toggle_label(show: bool) -> &'static str {
    if show { "Hide token" } else { "Show ID token" }
}

#[component]
pub fn TokenInspector(auth: RwSignal<AuthState>) -> impl IntoView {
    let show = move || auth.with(|state| state.show_token);
    let id_token = move || {
        auth.with(|state| {
            state
                .view
                .tokens()
                .map(|tokens| tokens.id_token.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="token-inspector">
            <h4 class="card__title">"Authentication tokens"</h4>
            <button class="button button--outlined" on:click=move |_| auth.update(AuthState::toggle_token)>
                {move || token_toggle_label(show())}
            </button>
            <Show when=show>
                <div class="token">
                    <strong>"ID Token:"</strong>
                    <pre>{id_token}</pre>
                </div>
            </Show>
        </div>
    }
}
