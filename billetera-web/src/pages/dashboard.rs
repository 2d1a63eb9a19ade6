//! Dashboard panel: totals, per-token balances, quick actions, recent
//! activity. Read-only over the wallet state apart from the visibility
//! toggle, which changes formatting only.

use leptos::logging::log;
use leptos::prelude::*;
use shared::utils::format_token_amount;
use shared::{Panel, TxKind};

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{
    DAILY_CHANGE_DISPLAY, MASKED_AMOUNT, MASKED_TOTAL, RECENT_TX_COUNT, TOTAL_BALANCE_DISPLAY,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_wallet_context();

    let quick_actions: [(&'static str, Option<Panel>); 4] = [
        ("Swap", Some(Panel::Swap)),
        ("Bridge", Some(Panel::Bridge)),
        ("Send", None),
        ("Add Token", None),
    ];

    view! {
        <div class="space-y-6">
            // Total balance card
            <div class="bg-gradient-to-r from-blue-500/20 to-purple-600/20 backdrop-blur-lg rounded-3xl p-6 border border-white/10">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold text-white">"Total Balance"</h2>
                    <button
                        class="p-2 hover:bg-white/10 rounded-full transition-colors text-white"
                        on:click=move |_| ctx.toggle_balance_visibility()
                    >
                        {move || if ctx.show_balance() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <div class="text-3xl font-bold text-white mb-2">
                    {move || if ctx.show_balance() { TOTAL_BALANCE_DISPLAY } else { MASKED_TOTAL }}
                </div>
                <div class="text-green-400 text-sm">{DAILY_CHANGE_DISPLAY}</div>
            </div>

            // Per-token balance cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {move || ctx.balances().entries().into_iter().map(|(token, amount)| {
                    view! {
                        <div class="bg-black/20 backdrop-blur-lg rounded-2xl p-4 border border-white/10">
                            <div class="flex items-center space-x-3">
                                <div class="w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                    <span class="text-white font-bold text-sm">{token.symbol()}</span>
                                </div>
                                <div>
                                    <div class="text-white font-semibold">
                                        {if ctx.show_balance() {
                                            format_token_amount(amount)
                                        } else {
                                            MASKED_AMOUNT.to_string()
                                        }}
                                    </div>
                                    <div class="text-white/60 text-sm">{token.symbol()}</div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>

            // Quick actions
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {quick_actions.into_iter().map(|(label, target)| {
                    view! {
                        <button
                            class="bg-black/20 backdrop-blur-lg rounded-2xl p-4 border border-white/10 hover:bg-white/10 transition-all"
                            on:click=move |_| match target {
                                Some(panel) => ctx.select_panel(panel),
                                None => log!("{} is not wired up", label),
                            }
                        >
                            <div class="text-white font-medium">{label}</div>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            // Recent transactions
            <div class="bg-black/20 backdrop-blur-lg rounded-2xl p-6 border border-white/10">
                <h3 class="text-lg font-semibold text-white mb-4">"Recent Transactions"</h3>
                <div class="space-y-3">
                    {move || ctx.recent_transactions(RECENT_TX_COUNT).into_iter().map(|tx| {
                        let title = match tx.kind {
                            TxKind::Swap => tx.headline(),
                            _ => tx.kind.label().to_string(),
                        };
                        view! {
                            <div class="flex items-center space-x-3 p-3 hover:bg-white/5 rounded-xl transition-colors">
                                <div class="w-10 h-10 bg-gradient-to-r from-green-500 to-blue-500 rounded-full flex items-center justify-center">
                                    <span class="text-white text-sm">"⇅"</span>
                                </div>
                                <div class="flex-1">
                                    <div class="text-white font-medium">{title}</div>
                                    <div class="text-white/60 text-sm">{tx.time.clone()}</div>
                                </div>
                                <div class="text-right">
                                    <div class="text-white font-medium">{tx.amount.clone()}</div>
                                    <div class="text-white/60 text-sm">{tx.value.clone()}</div>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
