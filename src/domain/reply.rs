use std::fmt;

/// A response token handed back to the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    ServiceOk,
    InvalidCommand,
    InvalidCoin,
    InvalidItem,
    OutOfStock,
    InsufficientFunds,
    InsufficientChange,
    /// A vended item, by catalog id.
    Item(String),
    /// A coin paid out, by denomination id.
    Coin(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::ServiceOk => f.write_str("SERVICE-OK"),
            Reply::InvalidCommand => f.write_str("INVALID-COMMAND"),
            Reply::InvalidCoin => f.write_str("INVALID-COIN"),
            Reply::InvalidItem => f.write_str("INVALID-ITEM"),
            Reply::OutOfStock => f.write_str("OUT-OF-STOCK"),
            Reply::InsufficientFunds => f.write_str("INSUFFICIENT-FUNDS"),
            Reply::InsufficientChange => f.write_str("INSUFFICIENT-CHANGE"),
            Reply::Item(id) | Reply::Coin(id) => f.write_str(id),
        }
    }
}

/// Joins replies into a single response line.
pub fn render(replies: &[Reply]) -> String {
    replies
        .iter()
        .map(Reply::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let replies = vec![
            Reply::Item("A".to_string()),
            Reply::Coin("QUARTER".to_string()),
            Reply::Coin("DIME".to_string()),
            Reply::InsufficientChange,
        ];
        assert_eq!(render(&replies), "A, QUARTER, DIME, INSUFFICIENT-CHANGE");
        assert_eq!(render(&[]), "");
    }
}
