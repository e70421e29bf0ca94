//! Signed-in profile card with the token inspector and sign-out control.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::components::token_inspector::TokenInspector;
use crate::state::auth::{AuthState, UserProfile};

/// Label/value rows shown for a profile. Email and name appear only when set.
pub fn profile_rows(profile: &UserProfile) -> Vec<(&'static str, String)> {
    let mut rows = vec![("User ID", profile.username.clone())];
    if let Some(email) = profile.email() {
        rows.push(("Email", email.to_owned()));
    }
    if let Some(name) = profile.display_name() {
        rows.push(("Name", name.to_owned()));
    }
    rows
}

#[component]
pub fn ProfileCard(auth: RwSignal<AuthState>, on_sign_out: Callback<()>) -> impl IntoView {
    let rows = move || {
        auth.with(|state| state.view.profile().map(profile_rows).unwrap_or_default())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="row">
                        <span class="row__label">{label}</span>
                        <span class="row__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };
    let is_admin = move || auth.with(|state| state.view.profile().is_some_and(UserProfile::is_admin));
    let has_tokens = move || auth.with(|state| state.view.tokens().is_some());

    view! {
        <div class="panel">
            <h2>"Welcome!"</h2>
            <div class="card">
                <h3 class="card__title">"User information"</h3>
                <Show when=is_admin>
                    <span class="badge">"Administrator"</span>
                </Show>
                {rows}
                <Show when=has_tokens>
                    <TokenInspector auth/>
                </Show>
            </div>
            <button class="button button--secondary" on:click=move |_| on_sign_out.run(())>
                "Sign out"
            </button>
        </div>
    }
}
