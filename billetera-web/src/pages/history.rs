//! History panel: the full transaction list, read-only.

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;
use crate::utils::format::status_badge_class;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let ctx = use_wallet_context();

    view! {
        <div class="max-w-2xl mx-auto">
            <div class="bg-black/20 backdrop-blur-lg rounded-3xl p-6 border border-white/10">
                <h2 class="text-xl font-semibold text-white mb-6">"Transaction History"</h2>

                <div class="space-y-3">
                    {move || ctx.transactions().into_iter().map(|tx| {
                        let badge = status_badge_class(tx.status);
                        view! {
                            <div class="flex items-center space-x-4 p-4 bg-white/5 rounded-xl border border-white/10">
                                <div class="w-12 h-12 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                    <span class="text-white">"⇅"</span>
                                </div>
                                <div class="flex-1">
                                    <div class="text-white font-medium">{tx.headline()}</div>
                                    <div class="text-white/60 text-sm">{tx.time.clone()}</div>
                                </div>
                                <div class="text-right">
                                    <div class="text-white font-medium">{tx.amount.clone()}</div>
                                    <div class="text-white/60 text-sm">{tx.value.clone()}</div>
                                </div>
                                <div class=format!("px-3 py-1 rounded-full text-xs font-medium {}", badge)>
                                    {tx.status.label()}
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
