//! View model for the wallet interface.
//!
//! Holds the four pieces of state the UI runs on — session gate, active
//! panel, balances, transaction list — plus the swap form, and owns every
//! transition. Rendering code never mutates fields directly; it calls the
//! operations here. Nothing in this module waits on a timer: the simulated
//! latency lives at the UI edge, which is what keeps these transitions
//! deterministic under test.

use thiserror::Error;

use crate::model::{
    seed_transactions, Balances, Token, Transaction, TxKind, TxStatus, SWAP_RATE_USDC,
};
use crate::utils::format_usd;

/// Session gate in front of the main application view.
///
/// `Authenticating` covers the simulated biometric check; a failed
/// credential probe drops back to `Locked` with no user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Locked,
    Authenticating,
    Unlocked,
}

impl SessionState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, SessionState::Unlocked)
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, SessionState::Authenticating)
    }
}

/// The four post-authentication views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Swap,
    Bridge,
    History,
}

impl Panel {
    /// Tab bar order.
    pub const ALL: [Panel; 4] = [Panel::Dashboard, Panel::Swap, Panel::Bridge, Panel::History];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Swap => "Swap",
            Panel::Bridge => "Bridge",
            Panel::History => "History",
        }
    }
}

/// Why a swap submission was rejected. Rejections are silent in the UI
/// beyond a log line; the disabled submit button covers the common cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("swap amount must be a positive number")]
    InvalidAmount,
    #[error("a swap is already in flight")]
    SwapPending,
}

/// Swap form fields: free-text amount plus the selected pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    pub amount: String,
    pub from: Token,
    pub to: Token,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            from: Token::Eth,
            to: Token::Usdc,
        }
    }
}

impl SwapForm {
    /// The amount as a strictly positive finite number, if it is one.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
    }

    /// Whether the submit button should be enabled at all.
    pub fn has_amount(&self) -> bool {
        !self.amount.is_empty()
    }

    /// Exchange source and destination. The amount is left untouched.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Destination-side preview of the current amount at the fixed rate.
    pub fn quote(&self) -> Option<f64> {
        self.parsed_amount().map(|amount| amount * SWAP_RATE_USDC)
    }
}

/// The order captured when a swap is submitted. Edits to the form during
/// the simulated delay do not affect the recorded transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapTicket {
    pub from: Token,
    pub to: Token,
    pub amount: String,
    parsed: f64,
}

/// Aggregate view model. One instance backs the whole session; it resets
/// on reload along with everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletVm {
    pub session: SessionState,
    pub panel: Panel,
    pub balances: Balances,
    pub show_balance: bool,
    pub swap: SwapForm,
    pub swap_pending: bool,
    pub transactions: Vec<Transaction>,
}

impl Default for WalletVm {
    fn default() -> Self {
        Self {
            session: SessionState::Locked,
            panel: Panel::Dashboard,
            balances: Balances::default(),
            show_balance: true,
            swap: SwapForm::default(),
            swap_pending: false,
            transactions: seed_transactions(),
        }
    }
}

impl WalletVm {
    // --- session -----------------------------------------------------------

    pub fn begin_authentication(&mut self) {
        if self.session == SessionState::Locked {
            self.session = SessionState::Authenticating;
        }
    }

    /// The simulated check always succeeds once the delay has elapsed.
    pub fn complete_authentication(&mut self) {
        self.session = SessionState::Unlocked;
    }

    /// Probe threw: back to the lock screen, button re-enabled.
    pub fn fail_authentication(&mut self) {
        self.session = SessionState::Locked;
    }

    // --- navigation --------------------------------------------------------

    pub fn select_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    // --- dashboard ---------------------------------------------------------

    /// Flips display formatting only; balance values are never touched.
    pub fn toggle_balance_visibility(&mut self) {
        self.show_balance = !self.show_balance;
    }

    /// The newest `count` records, for the dashboard preview list.
    pub fn recent_transactions(&self, count: usize) -> &[Transaction] {
        &self.transactions[..count.min(self.transactions.len())]
    }

    // --- swap --------------------------------------------------------------

    pub fn set_swap_amount(&mut self, amount: impl Into<String>) {
        self.swap.amount = amount.into();
    }

    pub fn set_swap_from(&mut self, token: Token) {
        self.swap.from = token;
    }

    pub fn set_swap_to(&mut self, token: Token) {
        self.swap.to = token;
    }

    pub fn invert_swap_pair(&mut self) {
        self.swap.invert();
    }

    /// Validate the form and capture the order. On success the pending flag
    /// is raised; the caller runs the simulated delay and then calls
    /// [`complete_swap`](Self::complete_swap) with the ticket.
    pub fn begin_swap(&mut self) -> Result<SwapTicket, SwapError> {
        if self.swap_pending {
            return Err(SwapError::SwapPending);
        }
        let parsed = self.swap.parsed_amount().ok_or(SwapError::InvalidAmount)?;
        self.swap_pending = true;
        Ok(SwapTicket {
            from: self.swap.from,
            to: self.swap.to,
            amount: self.swap.amount.clone(),
            parsed,
        })
    }

    /// Synthesize the completed record, prepend it, and reset the form.
    /// Ids are assigned as list length + 1, matching the display-only
    /// numbering the history view expects.
    pub fn complete_swap(&mut self, ticket: SwapTicket) -> Transaction {
        let tx = Transaction {
            id: self.transactions.len() as u64 + 1,
            kind: TxKind::Swap,
            from: Some(ticket.from.symbol().to_string()),
            to: ticket.to.symbol().to_string(),
            amount: ticket.amount,
            value: format_usd(ticket.parsed * SWAP_RATE_USDC),
            time: "Just now".to_string(),
            status: TxStatus::Completed,
        };
        self.transactions.insert(0, tx.clone());
        self.swap.amount.clear();
        self.swap_pending = false;
        tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_vm() -> WalletVm {
        let mut vm = WalletVm::default();
        vm.begin_authentication();
        vm.complete_authentication();
        vm
    }

    #[test]
    fn starts_locked_on_dashboard_with_seed_data() {
        let vm = WalletVm::default();
        assert_eq!(vm.session, SessionState::Locked);
        assert_eq!(vm.panel, Panel::Dashboard);
        assert!(vm.show_balance);
        assert!(!vm.swap_pending);
        assert_eq!(vm.transactions.len(), 3);
    }

    #[test]
    fn authentication_always_unlocks_after_the_delay() {
        // The credential probe outcome is irrelevant; completion unlocks.
        let mut vm = WalletVm::default();
        vm.begin_authentication();
        assert!(vm.session.is_authenticating());
        vm.complete_authentication();
        assert!(vm.session.is_unlocked());
    }

    #[test]
    fn failed_probe_resets_to_locked() {
        let mut vm = WalletVm::default();
        vm.begin_authentication();
        vm.fail_authentication();
        assert_eq!(vm.session, SessionState::Locked);
        assert!(!vm.session.is_authenticating());
    }

    #[test]
    fn begin_is_a_noop_once_unlocked() {
        let mut vm = unlocked_vm();
        vm.begin_authentication();
        assert!(vm.session.is_unlocked());
    }

    #[test]
    fn panel_selection() {
        let mut vm = unlocked_vm();
        for panel in Panel::ALL {
            vm.select_panel(panel);
            assert_eq!(vm.panel, panel);
        }
    }

    #[test]
    fn visibility_toggle_never_mutates_balances() {
        let mut vm = unlocked_vm();
        let before = vm.balances;
        vm.toggle_balance_visibility();
        assert!(!vm.show_balance);
        assert_eq!(vm.balances, before);
        vm.toggle_balance_visibility();
        assert!(vm.show_balance);
        assert_eq!(vm.balances, before);
    }

    #[test]
    fn invert_exchanges_pair_without_touching_amount() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("0.5");
        vm.invert_swap_pair();
        assert_eq!(vm.swap.from, Token::Usdc);
        assert_eq!(vm.swap.to, Token::Eth);
        assert_eq!(vm.swap.amount, "0.5");
        vm.invert_swap_pair();
        assert_eq!(vm.swap.from, Token::Eth);
        assert_eq!(vm.swap.to, Token::Usdc);
    }

    #[test]
    fn invalid_amounts_are_rejected_without_new_records() {
        let mut vm = unlocked_vm();
        for amount in ["", "0", "-1", "abc", "0.0", "NaN", "inf"] {
            vm.set_swap_amount(amount);
            assert_eq!(vm.begin_swap(), Err(SwapError::InvalidAmount), "{amount:?}");
            assert!(!vm.swap_pending);
            assert_eq!(vm.transactions.len(), 3);
        }
    }

    #[test]
    fn empty_amount_submit_is_a_noop() {
        let mut vm = unlocked_vm();
        assert!(!vm.swap.has_amount());
        assert!(vm.begin_swap().is_err());
        assert_eq!(vm.transactions.len(), 3);
    }

    #[test]
    fn swap_half_eth_records_the_expected_transaction() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("0.5");
        let ticket = vm.begin_swap().expect("0.5 is a valid amount");
        assert!(vm.swap_pending);

        let tx = vm.complete_swap(ticket);
        assert_eq!(tx.kind, TxKind::Swap);
        assert_eq!(tx.from.as_deref(), Some("ETH"));
        assert_eq!(tx.to, "USDC");
        assert_eq!(tx.amount, "0.5");
        assert_eq!(tx.value, "$1235.50");
        assert_eq!(tx.time, "Just now");
        assert_eq!(tx.status, TxStatus::Completed);

        // Prepended, amount cleared, pending flag dropped.
        assert_eq!(vm.transactions.len(), 4);
        assert_eq!(vm.transactions[0], tx);
        assert_eq!(vm.swap.amount, "");
        assert!(!vm.swap_pending);
    }

    #[test]
    fn recorded_value_is_amount_times_rate_to_two_decimals() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("2");
        let ticket = vm.begin_swap().unwrap();
        assert_eq!(vm.complete_swap(ticket).value, "$4942.00");
    }

    #[test]
    fn ticket_captures_form_at_submit_time() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("1.5");
        let ticket = vm.begin_swap().unwrap();

        // Edits while the swap is in flight must not leak into the record.
        vm.set_swap_amount("999");
        vm.set_swap_from(Token::Dai);
        vm.set_swap_to(Token::Aave);

        let tx = vm.complete_swap(ticket);
        assert_eq!(tx.amount, "1.5");
        assert_eq!(tx.from.as_deref(), Some("ETH"));
        assert_eq!(tx.to, "USDC");
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("1");
        let ticket = vm.begin_swap().unwrap();
        assert_eq!(vm.begin_swap(), Err(SwapError::SwapPending));
        vm.complete_swap(ticket);
        vm.set_swap_amount("1");
        assert!(vm.begin_swap().is_ok());
    }

    #[test]
    fn ids_follow_list_length() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("1");
        let ticket = vm.begin_swap().unwrap();
        assert_eq!(vm.complete_swap(ticket).id, 4);
        vm.set_swap_amount("2");
        let ticket = vm.begin_swap().unwrap();
        assert_eq!(vm.complete_swap(ticket).id, 5);
    }

    #[test]
    fn quote_preview_matches_rate() {
        let mut vm = unlocked_vm();
        vm.set_swap_amount("0.5");
        assert_eq!(vm.swap.quote(), Some(1235.5));
        vm.set_swap_amount("garbage");
        assert_eq!(vm.swap.quote(), None);
    }

    #[test]
    fn recent_transactions_clamps_to_list_length() {
        let vm = unlocked_vm();
        assert_eq!(vm.recent_transactions(3).len(), 3);
        assert_eq!(vm.recent_transactions(10).len(), 3);
        assert_eq!(vm.recent_transactions(1)[0].id, 1);
    }
}
