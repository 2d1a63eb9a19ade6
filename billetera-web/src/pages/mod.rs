//! Page modules - one per panel plus the lock screen

pub mod auth;
pub mod bridge;
pub mod dashboard;
pub mod history;
pub mod swap;

pub use auth::AuthPage;
pub use bridge::BridgePage;
pub use dashboard::DashboardPage;
pub use history::HistoryPage;
pub use swap::SwapPage;
