//! Lock screen with the simulated biometric check.

use leptos::logging::log;
use leptos::prelude::*;

use crate::services::{biometric, latency};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::AUTH_LATENCY_MS;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_wallet_context();

    let authenticate = move |_| {
        if ctx.is_authenticating() {
            return;
        }
        ctx.begin_authentication();

        leptos::task::spawn_local(async move {
            // Capability probe only. Both outcomes continue into the same
            // simulated check; the result is informational.
            match biometric::platform_authenticator_available() {
                Ok(available) => {
                    log!("credential API available: {}", available);
                    latency::simulate(AUTH_LATENCY_MS).await;
                    ctx.complete_authentication();
                }
                Err(e) => {
                    log::error!("biometric probe failed: {:?}", e);
                    ctx.fail_authentication();
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-900 via-purple-900 to-indigo-900 flex items-center justify-center p-4">
            <div class="max-w-md w-full bg-white/10 backdrop-blur-lg rounded-3xl p-8 text-center border border-white/20">
                <div class="mb-8">
                    <div class="w-20 h-20 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center mx-auto mb-4">
                        <span class="text-white text-3xl font-bold">"B"</span>
                    </div>
                    <h1 class="text-3xl font-bold text-white mb-2">"Billetera IO"</h1>
                    <p class="text-blue-200">"Biometric DeFi Wallet"</p>
                </div>

                <div class="space-y-6">
                    <div class="bg-white/10 rounded-2xl p-6 border border-white/20">
                        <h3 class="text-xl font-semibold text-white mb-2">"Secure Authentication"</h3>
                        <p class="text-blue-200 text-sm">"Your wallet is protected by biometric authentication"</p>
                    </div>

                    <button
                        class="w-full bg-gradient-to-r from-blue-500 to-purple-600 text-white py-4 px-6 rounded-2xl \
                               font-semibold text-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 \
                               flex items-center justify-center space-x-2 disabled:opacity-50"
                        disabled=move || ctx.is_authenticating()
                        on:click=authenticate
                    >
                        <span>
                            {move || if ctx.is_authenticating() {
                                "Authenticating..."
                            } else {
                                "Authenticate with Biometrics"
                            }}
                        </span>
                    </button>

                    <div class="text-xs text-blue-300">
                        <p>"✓ Uniswap V4 Integration"</p>
                        <p>"✓ Cross-Protocol Swaps"</p>
                        <p>"✓ Ultra-Low Fees"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
