//! The demo's only page: loading indicator, sign-in prompt, or profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! On hydrate the page reads any provider error from the URL exactly once,
//! then runs a single reconcile pass against the identity client. Sign-in
//! and sign-out are the only other transitions; nothing polls.
//!
//! TRADE-OFFS
//! ==========
//! The server always renders `Loading`. All identity calls run in the browser
//! after hydration so the first paint matches the server markup.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::{error_banner::ErrorBanner, profile_card::ProfileCard, sign_in_card::SignInCard};
use crate::net::types::ConfigSummary;
use crate::state::auth::{AuthState, ViewState};

/// Top-level screen for a view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    SignIn,
    Profile,
}

pub fn screen_for(view: &ViewState) -> Screen {
    match view {
        ViewState::Loading => Screen::Loading,
        ViewState::Unauthenticated => Screen::SignIn,
        ViewState::Authenticated { .. } => Screen::Profile,
    }
}

#[cfg(feature = "hydrate")]
fn browser_reconciler() -> crate::state::auth::Reconciler<crate::net::identity::HttpIdentityClient> {
    crate::state::auth::Reconciler::new(
        crate::net::identity::HttpIdentityClient,
        crate::net::identity::SignInOptions::default(),
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = RwSignal::new(None::<ConfigSummary>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let pending = crate::util::query::read_pending_error();
            if let Some(error) = &pending {
                log::error!("authentication error: {} ({})", error.code, error.description);
            }
            auth.set(AuthState::new(pending.as_ref()));
            auth.update(AuthState::begin_reconcile);
            let view = browser_reconciler().reconcile().await;
            auth.update(|state| state.finish_reconcile(view));
        });
        leptos::task::spawn_local(async move {
            config.set(crate::net::api::fetch_config_summary().await);
        });
    }

    let on_sign_in = Callback::new(move |()| {
        auth.update(AuthState::begin_sign_in);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = browser_reconciler().sign_in().await;
            auth.update(|state| state.apply_sign_in(result));
        });
    });

    let on_sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = browser_reconciler().sign_out().await;
            auth.update(|state| state.apply_sign_out(result));
        });
    });

    let screen = move || auth.with(|state| screen_for(&state.view));

    view! {
        <Show when=move || screen() != Screen::Loading fallback=|| view! { <LoadingIndicator/> }>
            <div class="page">
                <h1 class="page__title">"Managed Login Sample"</h1>
                <ErrorBanner auth/>
                <Show
                    when=move || screen() == Screen::SignIn
                    fallback=move || view! { <ProfileCard auth on_sign_out/> }
                >
                    <SignInCard on_sign_in config/>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <span>"Loading..."</span>
        </div>
    }
}
