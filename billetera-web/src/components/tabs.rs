//! Panel tab bar

use leptos::prelude::*;
use shared::Panel;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_wallet_context();

    view! {
        <div class="bg-black/20 backdrop-blur-lg border-b border-white/10 p-4">
            <div class="flex space-x-1">
                {Panel::ALL.into_iter().map(|panel| {
                    view! {
                        <button
                            class=move || if ctx.panel() == panel {
                                "flex items-center space-x-2 px-4 py-2 rounded-xl transition-all \
                                 bg-blue-500/20 text-blue-400 border border-blue-500/30"
                            } else {
                                "flex items-center space-x-2 px-4 py-2 rounded-xl transition-all \
                                 text-white/70 hover:text-white hover:bg-white/10"
                            }
                            on:click=move |_| ctx.select_panel(panel)
                        >
                            <span class="font-medium">{panel.label()}</span>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
