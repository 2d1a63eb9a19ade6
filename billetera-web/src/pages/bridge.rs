//! Bridge panel. Decorative only: the selectors are uncontrolled and the
//! submit button performs no state change.

use leptos::prelude::*;
use shared::Network;

#[component]
pub fn BridgePage() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto">
            <div class="bg-black/20 backdrop-blur-lg rounded-3xl p-6 border border-white/10">
                <h2 class="text-xl font-semibold text-white mb-6">"Cross-Protocol Bridge"</h2>

                <div class="space-y-4">
                    <NetworkPicker label="From Network" networks=Network::sources()/>
                    <NetworkPicker label="To Network" networks=Network::destinations()/>

                    <div class="bg-white/5 rounded-2xl p-4 border border-white/10">
                        <div class="text-white/60 text-sm mb-2">"Amount"</div>
                        <div class="flex items-center space-x-3">
                            <input
                                type="number"
                                placeholder="0.0"
                                class="bg-transparent text-white text-lg font-semibold flex-1 outline-none"
                            />
                            <select class="bg-transparent text-white border-none outline-none">
                                <option value="USDC" class="bg-slate-800">"USDC"</option>
                                <option value="ETH" class="bg-slate-800">"ETH"</option>
                                <option value="DAI" class="bg-slate-800">"DAI"</option>
                            </select>
                        </div>
                    </div>

                    // No handler: bridging is out of scope for the prototype.
                    <button
                        class="w-full bg-gradient-to-r from-blue-500 to-purple-600 text-white py-4 px-6 rounded-2xl \
                               font-semibold text-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300"
                    >
                        "Bridge Tokens"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NetworkPicker(label: &'static str, networks: &'static [Network]) -> impl IntoView {
    view! {
        <div class="bg-white/5 rounded-2xl p-4 border border-white/10">
            <div class="text-white/60 text-sm mb-2">{label}</div>
            <div class="grid grid-cols-2 gap-2">
                {networks.iter().map(|network| {
                    view! {
                        <button class="flex items-center space-x-2 p-3 bg-white/5 rounded-xl hover:bg-white/10 transition-colors">
                            <div class=format!("w-4 h-4 {} rounded-full", network.color_class())></div>
                            <span class="text-white font-medium">{network.name()}</span>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
