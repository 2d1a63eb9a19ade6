//! Wallet state management
//!
//! One `RwSignal` over the shared [`WalletVm`]; components read through
//! `.with` selectors and mutate only via the view-model operations.

use leptos::prelude::*;
use shared::{
    Balances, Panel, SwapError, SwapTicket, Token, Transaction, WalletVm,
};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub vm: RwSignal<WalletVm>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            vm: RwSignal::new(WalletVm::default()),
        }
    }

    // --- session -----------------------------------------------------------

    pub fn is_unlocked(&self) -> bool {
        self.vm.with(|vm| vm.session.is_unlocked())
    }

    pub fn is_authenticating(&self) -> bool {
        self.vm.with(|vm| vm.session.is_authenticating())
    }

    pub fn begin_authentication(&self) {
        self.vm.update(|vm| vm.begin_authentication());
    }

    pub fn complete_authentication(&self) {
        self.vm.update(|vm| vm.complete_authentication());
    }

    pub fn fail_authentication(&self) {
        self.vm.update(|vm| vm.fail_authentication());
    }

    // --- navigation --------------------------------------------------------

    pub fn panel(&self) -> Panel {
        self.vm.with(|vm| vm.panel)
    }

    pub fn select_panel(&self, panel: Panel) {
        self.vm.update(|vm| vm.select_panel(panel));
    }

    // --- dashboard ---------------------------------------------------------

    pub fn balances(&self) -> Balances {
        self.vm.with(|vm| vm.balances)
    }

    pub fn show_balance(&self) -> bool {
        self.vm.with(|vm| vm.show_balance)
    }

    pub fn toggle_balance_visibility(&self) {
        self.vm.update(|vm| vm.toggle_balance_visibility());
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.vm.with(|vm| vm.transactions.clone())
    }

    pub fn recent_transactions(&self, count: usize) -> Vec<Transaction> {
        self.vm.with(|vm| vm.recent_transactions(count).to_vec())
    }

    // --- swap --------------------------------------------------------------

    pub fn swap_amount(&self) -> String {
        self.vm.with(|vm| vm.swap.amount.clone())
    }

    pub fn set_swap_amount(&self, amount: String) {
        self.vm.update(|vm| vm.set_swap_amount(amount));
    }

    pub fn swap_from(&self) -> Token {
        self.vm.with(|vm| vm.swap.from)
    }

    pub fn swap_to(&self) -> Token {
        self.vm.with(|vm| vm.swap.to)
    }

    pub fn set_swap_from(&self, token: Token) {
        self.vm.update(|vm| vm.set_swap_from(token));
    }

    pub fn set_swap_to(&self, token: Token) {
        self.vm.update(|vm| vm.set_swap_to(token));
    }

    pub fn invert_swap_pair(&self) {
        self.vm.update(|vm| vm.invert_swap_pair());
    }

    pub fn swap_pending(&self) -> bool {
        self.vm.with(|vm| vm.swap_pending)
    }

    pub fn swap_submittable(&self) -> bool {
        self.vm.with(|vm| vm.swap.has_amount() && !vm.swap_pending)
    }

    pub fn swap_quote(&self) -> Option<f64> {
        self.vm.with(|vm| vm.swap.quote())
    }

    pub fn begin_swap(&self) -> Result<SwapTicket, SwapError> {
        let mut result = Err(SwapError::InvalidAmount);
        self.vm.update(|vm| result = vm.begin_swap());
        result
    }

    pub fn complete_swap(&self, ticket: SwapTicket) {
        self.vm.update(|vm| {
            let tx = vm.complete_swap(ticket);
            log::info!("swap recorded: {} ({})", tx.headline(), tx.value);
        });
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
