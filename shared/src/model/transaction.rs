//! Transaction records and the seeded history.

use serde::{Deserialize, Serialize};

/// What kind of activity a record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Swap,
    Bridge,
    Send,
}

impl TxKind {
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Swap => "Swap",
            TxKind::Bridge => "Bridge",
            TxKind::Send => "Send",
        }
    }
}

/// Settlement state of a record. The only write path always produces
/// `Completed`; the other variants exist for the status badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
}

impl TxStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Completed => "completed",
            TxStatus::Pending => "pending",
            TxStatus::Failed => "failed",
        }
    }
}

/// A single history entry. All money fields are pre-formatted display
/// strings; nothing downstream re-computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequence number, assigned as list length + 1 at insertion time.
    pub id: u64,
    pub kind: TxKind,
    /// Source side. Sends have no source leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    pub amount: String,
    pub value: String,
    pub time: String,
    pub status: TxStatus,
}

impl Transaction {
    /// History row title, e.g. "ETH → USDC" or "Send to 0x742d...8f3a".
    pub fn headline(&self) -> String {
        match self.kind {
            TxKind::Swap => format!(
                "{} → {}",
                self.from.as_deref().unwrap_or_default(),
                self.to
            ),
            TxKind::Bridge => format!(
                "Bridge: {} → {}",
                self.from.as_deref().unwrap_or_default(),
                self.to
            ),
            TxKind::Send => format!("Send to {}", self.to),
        }
    }
}

/// History present before the user does anything.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            kind: TxKind::Swap,
            from: Some("ETH".to_string()),
            to: "USDC".to_string(),
            amount: "0.5".to_string(),
            value: "$1,235.50".to_string(),
            time: "2 mins ago".to_string(),
            status: TxStatus::Completed,
        },
        Transaction {
            id: 2,
            kind: TxKind::Bridge,
            from: Some("Ethereum".to_string()),
            to: "Polygon".to_string(),
            amount: "100 USDC".to_string(),
            value: "$100.00".to_string(),
            time: "1 hour ago".to_string(),
            status: TxStatus::Completed,
        },
        Transaction {
            id: 3,
            kind: TxKind::Send,
            from: None,
            to: "0x742d...8f3a".to_string(),
            amount: "0.1 ETH".to_string(),
            value: "$247.10".to_string(),
            time: "3 hours ago".to_string(),
            status: TxStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_history_shape() {
        let txs = seed_transactions();
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].kind, TxKind::Swap);
        assert_eq!(txs[1].kind, TxKind::Bridge);
        assert_eq!(txs[2].kind, TxKind::Send);
        assert!(txs.iter().all(|tx| tx.status == TxStatus::Completed));
        assert_eq!(txs.iter().map(|tx| tx.id).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn headlines_per_kind() {
        let txs = seed_transactions();
        assert_eq!(txs[0].headline(), "ETH → USDC");
        assert_eq!(txs[1].headline(), "Bridge: Ethereum → Polygon");
        assert_eq!(txs[2].headline(), "Send to 0x742d...8f3a");
    }

    #[test]
    fn send_omits_source_leg_in_json() {
        let send = &seed_transactions()[2];
        let json = serde_json::to_value(send).unwrap();
        assert!(json.get("from").is_none());
        assert_eq!(json["kind"], "send");
        assert_eq!(json["status"], "completed");
    }

    #[test]
    fn swap_round_trips_through_json() {
        let swap = &seed_transactions()[0];
        let json = serde_json::to_string(swap).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, swap);
    }
}
