use crate::domain::denomination::DenominationTable;
use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use serde::Serialize;

/// Coins of one denomination held for the current customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holding {
    pub denomination: String,
    pub count: u32,
}

/// The coins inserted in the transaction that is still open.
///
/// Holdings are kept in the order each denomination was first inserted,
/// which is the order a refund hands them back in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentLedger {
    holdings: Vec<Holding>,
}

impl PaymentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_coin(&mut self, denomination: &str) {
        match self
            .holdings
            .iter_mut()
            .find(|h| h.denomination == denomination)
        {
            Some(holding) => holding.count += 1,
            None => self.holdings.push(Holding {
                denomination: denomination.to_string(),
                count: 1,
            }),
        }
    }

    pub fn count(&self, denomination: &str) -> u32 {
        self.holdings
            .iter()
            .find(|h| h.denomination == denomination)
            .map_or(0, |h| h.count)
    }

    /// Sum of the held coins' face values.
    ///
    /// Fails rather than wrapping if the sum does not fit in a `u64`.
    pub fn total(&self, denominations: &DenominationTable) -> Result<Cents> {
        self.holdings
            .iter()
            .try_fold(Cents::ZERO, |total, holding| -> Result<Cents> {
                denominations
                    .face_value(&holding.denomination)?
                    .checked_mul(holding.count)
                    .and_then(|value| total.checked_add(value))
                    .ok_or_else(|| {
                        VendingError::ValidationError("Inserted funds overflow".to_string())
                    })
            })
    }

    /// Every held coin, one id per coin. The ledger itself is left as is.
    pub fn refund(&self) -> impl Iterator<Item = &str> {
        self.holdings.iter().flat_map(|h| {
            std::iter::repeat_n(h.denomination.as_str(), h.count as usize)
        })
    }

    /// Empties the ledger once a sale captures the payment.
    pub fn clear(&mut self) {
        self.holdings.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.iter()
    }
}
