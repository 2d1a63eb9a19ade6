//! # Billetera IO Shared Library
//!
//! Data model and view model for the Billetera IO wallet prototype. This
//! crate has no rendering or browser dependency: the frontend wraps these
//! types in reactive signals, and the unit tests exercise them directly.
//!
//! ## Structure
//!
//! - **[`model`]**: wallet entities and seed data
//!   - **[`model::token`]**: the tradable token list
//!   - **[`model::network`]**: the bridgeable network list
//!   - **[`model::transaction`]**: transaction records and seed history
//! - **[`vm`]**: the view model — session gate, panel navigation, swap form,
//!   and every state transition the UI can perform
//! - **[`utils`]**: display formatting helpers
//!
//! ## Wire Format
//!
//! Entity structs serialize to JSON via `serde` with default snake_case
//! field names. Optional fields are omitted when `None` (using
//! `#[serde(skip_serializing_if = "Option::is_none")]`).
//!
//! Everything here is fake by design: balances are fixed seed values, the
//! swap rate is a constant, and transactions live only in memory.

pub mod model;
pub mod utils;
pub mod vm;

// Re-export commonly used types for convenience
pub use model::*;
pub use vm::{Panel, SessionState, SwapError, SwapForm, SwapTicket, WalletVm};
