//! Development panel listing the identity configuration the server loaded.

#[cfg(test)]
#[path = "config_panel_test.rs"]
mod config_panel_test;

use leptos::prelude::*;

use crate::net::types::ConfigSummary;

/// Shown in every row until `/api/config` answers, or if it never does.
pub const UNAVAILABLE: &str = "unavailable";

/// Label/value rows for the panel. Values come verbatim from the server's
/// summary, which decides how unset identifiers read.
pub fn config_rows(summary: Option<&ConfigSummary>) -> Vec<(&'static str, String)> {
    let value = |pick: fn(&ConfigSummary) -> &str| {
        summary.map_or_else(|| UNAVAILABLE.to_owned(), |s| pick(s).to_owned())
    };
    vec![
        ("Region", value(|s| s.region.as_str())),
        ("User Pool ID", value(|s| s.user_pool_id.as_str())),
        ("Client ID", value(|s| s.client_id.as_str())),
        ("Domain", value(|s| s.domain.as_str())),
        ("Redirect URL", value(|s| s.redirect_sign_in.as_str())),
    ]
}

#[component]
pub fn ConfigPanel(config: RwSignal<Option<ConfigSummary>>) -> impl IntoView {
    let rows = move || {
        config
            .with(|summary| config_rows(summary.as_ref()))
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

    view! {
        <div class="card card--muted">
            <h3 class="card__title">"Configuration (development)"</h3>
            {rows}
        </div>
    }
}
