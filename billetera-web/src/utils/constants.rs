//! Application constants

// Simulated latency for the two async flows
pub const AUTH_LATENCY_MS: u32 = 2000;
pub const SWAP_LATENCY_MS: u32 = 3000;

// Dashboard display literals (the totals are not computed anywhere)
pub const TOTAL_BALANCE_DISPLAY: &str = "$4,387.97";
pub const DAILY_CHANGE_DISPLAY: &str = "+2.45% today";
pub const MASKED_TOTAL: &str = "••••••";
pub const MASKED_AMOUNT: &str = "•••••";

// Swap panel display literals
pub const RATE_DISPLAY: &str = "1 ETH = 2,471 USDC";
pub const NETWORK_FEE_DISPLAY: &str = "~$0.45";
pub const PRICE_IMPACT_DISPLAY: &str = "< 0.01%";

/// How many records the dashboard preview shows.
pub const RECENT_TX_COUNT: usize = 3;
