//! Main dashboard view.
//!
//! Balance, transactions and spending are static placeholders; only the
//! navigation and session guard are live.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::prefs::Preferences;
use crate::state::session::Session;
use crate::util::guard::{RouteKind, install_guard};
use crate::util::i18n::{Text, t};

const BALANCE_MINOR: i64 = 1_245_075;

/// `(label, amount in bani)`.
const TRANSACTIONS: [(&str, i64); 4] = [
    ("Kaufland", -18_430),
    ("Salariu", 650_000),
    ("Netflix", -5_999),
    ("Transfer Maria", -25_000),
];

/// `(month, spent in bani)`.
const SPENDING: [(&str, i64); 3] = [("Aug", 312_000), ("Sep", 287_450), ("Oct", 301_020)];

/// Render an amount in bani as `-12.34 RON`.
pub(crate) fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02} RON", abs / 100, abs % 100)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let prefs = expect_context::<RwSignal<Preferences>>();
    install_guard(session, RouteKind::Protected, use_navigate());
    let lang = move || prefs.get().lang;

    view! {
        <NavBar/>
        <main class="home-page">
            <section class="card">
                <h2>{move || t(lang(), Text::Balance)}</h2>
                <p class="card__amount">{format_amount(BALANCE_MINOR)}</p>
            </section>
            <section class="card">
                <h2>{move || t(lang(), Text::Transactions)}</h2>
                <ul>
                    {TRANSACTIONS
                        .iter()
                        .map(|(label, amount)| view! {
                            <li>
                                <span>{*label}</span>
                                " "
                                <span>{format_amount(*amount)}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
            <section class="card">
                <h2>{move || t(lang(), Text::Spending)}</h2>
                <ul>
                    {SPENDING
                        .iter()
                        .map(|(month, amount)| view! {
                            <li>{*month} ": " {format_amount(*amount)}</li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </main>
    }
}
