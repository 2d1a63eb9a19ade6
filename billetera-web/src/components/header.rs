//! Top bar: brand, connection pill, settings button

use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="bg-black/20 backdrop-blur-lg border-b border-white/10 p-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <div class="w-8 h-8 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                        <span class="text-white font-bold text-xs">"B"</span>
                    </div>
                    <h1 class="text-xl font-bold text-white">"Billetera IO"</h1>
                </div>
                <div class="flex items-center space-x-2">
                    <div class="flex items-center space-x-1 bg-green-500/20 text-green-400 px-3 py-1 rounded-full text-sm">
                        <div class="w-2 h-2 bg-green-400 rounded-full"></div>
                        <span>"Connected"</span>
                    </div>
                    // Decorative: there is no settings panel behind this.
                    <button
                        class="p-2 hover:bg-white/10 rounded-full transition-colors text-white"
                        on:click=move |_| log!("settings clicked")
                    >
                        "⚙"
                    </button>
                </div>
            </div>
        </div>
    }
}
