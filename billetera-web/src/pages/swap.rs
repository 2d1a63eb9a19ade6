//! Swap panel. Validation and record synthesis live in the view model;
//! this page wires the form controls and runs the simulated delay.

use leptos::logging::log;
use leptos::prelude::*;
use shared::Token;

use crate::services::latency;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{
    NETWORK_FEE_DISPLAY, PRICE_IMPACT_DISPLAY, RATE_DISPLAY, SWAP_LATENCY_MS,
};
use crate::utils::format::quote_display;

#[component]
pub fn SwapPage() -> impl IntoView {
    let ctx = use_wallet_context();

    let on_submit = move |_| {
        let ticket = match ctx.begin_swap() {
            Ok(ticket) => ticket,
            Err(e) => {
                // Rejections stay silent in the UI.
                log!("swap rejected: {}", e);
                return;
            }
        };

        leptos::task::spawn_local(async move {
            latency::simulate(SWAP_LATENCY_MS).await;
            ctx.complete_swap(ticket);
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <div class="bg-black/20 backdrop-blur-lg rounded-3xl p-6 border border-white/10">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold text-white">"Swap Tokens"</h2>
                    <div class="flex items-center space-x-1 bg-green-500/20 text-green-400 px-3 py-1 rounded-full text-sm">
                        <span>"Uniswap V4"</span>
                    </div>
                </div>

                <div class="space-y-4">
                    // Source side
                    <div class="bg-white/5 rounded-2xl p-4 border border-white/10">
                        <div class="flex items-center justify-between mb-2">
                            <span class="text-white/60 text-sm">"From"</span>
                            <span class="text-white/60 text-sm">
                                {move || format!("Balance: {}", ctx.balances().eth)}
                            </span>
                        </div>
                        <div class="flex items-center space-x-3">
                            <TokenSelect
                                value=Signal::derive(move || ctx.swap_from())
                                on_pick=move |token| ctx.set_swap_from(token)
                            />
                            <input
                                type="number"
                                placeholder="0.0"
                                class="bg-transparent text-white text-lg font-semibold text-right flex-1 outline-none"
                                prop:value=move || ctx.swap_amount()
                                on:input=move |ev| ctx.set_swap_amount(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    // Invert pair
                    <div class="flex justify-center">
                        <button
                            class="bg-blue-500/20 hover:bg-blue-500/30 p-3 rounded-full transition-colors text-blue-400"
                            on:click=move |_| ctx.invert_swap_pair()
                        >
                            "⇅"
                        </button>
                    </div>

                    // Destination side
                    <div class="bg-white/5 rounded-2xl p-4 border border-white/10">
                        <div class="flex items-center justify-between mb-2">
                            <span class="text-white/60 text-sm">"To"</span>
                            <span class="text-white/60 text-sm">
                                {move || format!("Balance: {}", ctx.balances().usdc)}
                            </span>
                        </div>
                        <div class="flex items-center space-x-3">
                            <TokenSelect
                                value=Signal::derive(move || ctx.swap_to())
                                on_pick=move |token| ctx.set_swap_to(token)
                            />
                            <div class="text-white/60 text-lg text-right flex-1">
                                {move || quote_display(ctx.swap_quote())}
                            </div>
                        </div>
                    </div>

                    // Static quote details
                    <div class="bg-white/5 rounded-2xl p-4 border border-white/10 space-y-2">
                        <div class="flex justify-between text-sm">
                            <span class="text-white/60">"Rate"</span>
                            <span class="text-white">{RATE_DISPLAY}</span>
                        </div>
                        <div class="flex justify-between text-sm">
                            <span class="text-white/60">"Network Fee"</span>
                            <span class="text-green-400">{NETWORK_FEE_DISPLAY}</span>
                        </div>
                        <div class="flex justify-between text-sm">
                            <span class="text-white/60">"Price Impact"</span>
                            <span class="text-green-400">{PRICE_IMPACT_DISPLAY}</span>
                        </div>
                    </div>

                    <button
                        class="w-full bg-gradient-to-r from-blue-500 to-purple-600 text-white py-4 px-6 rounded-2xl \
                               font-semibold text-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 \
                               flex items-center justify-center space-x-2 disabled:opacity-50"
                        disabled=move || !ctx.swap_submittable()
                        on:click=on_submit
                    >
                        <span>
                            {move || if ctx.swap_pending() { "Swapping..." } else { "Swap Tokens" }}
                        </span>
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Token dropdown shared by both sides of the form.
#[component]
fn TokenSelect(
    value: Signal<Token>,
    on_pick: impl Fn(Token) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="bg-transparent text-white font-semibold text-lg border-none outline-none"
            prop:value=move || value.get().symbol()
            on:change=move |ev| {
                if let Some(token) = Token::from_symbol(&event_target_value(&ev)) {
                    on_pick(token);
                }
            }
        >
            {Token::ALL.into_iter().map(|token| {
                view! {
                    <option value=token.symbol() class="bg-slate-800">
                        {token.symbol()}
                    </option>
                }
            }).collect::<Vec<_>>()}
        </select>
    }
}
