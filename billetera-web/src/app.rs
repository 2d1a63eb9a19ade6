//! Billetera IO App - Leptos Frontend
//!
//! Session-gated single page: the lock screen until the simulated
//! biometric check passes, then the tabbed wallet shell.

use leptos::prelude::*;
use shared::Panel;

use crate::components::{Header, TabBar};
use crate::pages::{AuthPage, BridgePage, DashboardPage, HistoryPage, SwapPage};
use crate::state::wallet::{provide_wallet_context, use_wallet_context};

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_wallet_context();

    view! {
        {move || if ctx.is_unlocked() {
            view! { <WalletShell/> }.into_any()
        } else {
            view! { <AuthPage/> }.into_any()
        }}
    }
}

/// Everything behind the session gate: header, tab bar, active panel.
#[component]
fn WalletShell() -> impl IntoView {
    let ctx = use_wallet_context();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-blue-900 to-indigo-900">
            <Header/>
            <TabBar/>
            <div class="p-4">
                {move || match ctx.panel() {
                    Panel::Dashboard => view! { <DashboardPage/> }.into_any(),
                    Panel::Swap => view! { <SwapPage/> }.into_any(),
                    Panel::Bridge => view! { <BridgePage/> }.into_any(),
                    Panel::History => view! { <HistoryPage/> }.into_any(),
                }}
            </div>
        </div>
    }
}
