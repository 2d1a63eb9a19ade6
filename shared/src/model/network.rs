//! Networks listed on the bridge panel.

use serde::{Deserialize, Serialize};

/// Bridgeable networks. Selection is decorative: picking one changes no
/// state anywhere in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Polygon,
    Arbitrum,
    Optimism,
    Base,
}

impl Network {
    /// Every network, in display order.
    pub const ALL: [Network; 5] = [
        Network::Ethereum,
        Network::Polygon,
        Network::Arbitrum,
        Network::Optimism,
        Network::Base,
    ];

    /// The first two networks are offered as bridge sources.
    pub fn sources() -> &'static [Network] {
        &NETWORKS[..2]
    }

    /// The remaining networks are offered as bridge destinations.
    pub fn destinations() -> &'static [Network] {
        &NETWORKS[2..]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Polygon => "Polygon",
            Network::Arbitrum => "Arbitrum",
            Network::Optimism => "Optimism",
            Network::Base => "Base",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Network::Ethereum => "ETH",
            Network::Polygon => "MATIC",
            Network::Arbitrum => "ARB",
            Network::Optimism => "OP",
            Network::Base => "BASE",
        }
    }

    /// Utility class for the colored network dot.
    pub fn color_class(&self) -> &'static str {
        match self {
            Network::Ethereum => "bg-blue-500",
            Network::Polygon => "bg-purple-500",
            Network::Arbitrum => "bg-blue-600",
            Network::Optimism => "bg-red-500",
            Network::Base => "bg-blue-400",
        }
    }
}

static NETWORKS: [Network; 5] = Network::ALL;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_attributes() {
        assert_eq!(Network::Polygon.name(), "Polygon");
        assert_eq!(Network::Polygon.symbol(), "MATIC");
        assert_eq!(Network::Base.color_class(), "bg-blue-400");
    }

    #[test]
    fn bridge_split_covers_all_networks() {
        assert_eq!(Network::sources(), &[Network::Ethereum, Network::Polygon]);
        assert_eq!(
            Network::destinations(),
            &[Network::Arbitrum, Network::Optimism, Network::Base]
        );
        assert_eq!(
            Network::sources().len() + Network::destinations().len(),
            Network::ALL.len()
        );
    }
}
