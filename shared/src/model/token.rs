//! Tradable tokens offered by the swap selectors.

use serde::{Deserialize, Serialize};

/// Supported token symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Eth,
    Usdc,
    Dai,
    Wbtc,
    Link,
    Uni,
    Aave,
}

impl Token {
    /// Every token, in selector order.
    pub const ALL: [Token; 7] = [
        Token::Eth,
        Token::Usdc,
        Token::Dai,
        Token::Wbtc,
        Token::Link,
        Token::Uni,
        Token::Aave,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Eth => "ETH",
            Token::Usdc => "USDC",
            Token::Dai => "DAI",
            Token::Wbtc => "WBTC",
            Token::Link => "LINK",
            Token::Uni => "UNI",
            Token::Aave => "AAVE",
        }
    }

    /// Parse a selector value back into a token.
    pub fn from_symbol(symbol: &str) -> Option<Token> {
        match symbol {
            "ETH" => Some(Token::Eth),
            "USDC" => Some(Token::Usdc),
            "DAI" => Some(Token::Dai),
            "WBTC" => Some(Token::Wbtc),
            "LINK" => Some(Token::Link),
            "UNI" => Some(Token::Uni),
            "AAVE" => Some(Token::Aave),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for token in Token::ALL {
            assert_eq!(Token::from_symbol(token.symbol()), Some(token));
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(Token::from_symbol("DOGE"), None);
        assert_eq!(Token::from_symbol(""), None);
        assert_eq!(Token::from_symbol("eth"), None);
    }
}
