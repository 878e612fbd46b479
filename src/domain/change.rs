//! Greedy change computation against a finite coin reserve.
//!
//! Change is worked out in two passes. [`plan_change`] reads the reserve and
//! produces a complete [`ChangePlan`] or fails without touching anything;
//! [`CoinReserve::dispense`] then removes the planned coins in one step.
//!
//! Denominations are tried from the highest face value down, taking as many
//! coins of each as the remaining amount and the reserve allow. For
//! non-canonical coin systems this can use more coins than necessary, or fail
//! where another combination would succeed. That is the required behaviour.

use crate::domain::coin_reserve::CoinReserve;
use crate::domain::denomination::DenominationTable;
use crate::domain::money::Cents;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot make exact change with available reserve")]
pub struct InsufficientChange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinBatch {
    pub denomination: String,
    pub count: u32,
}

impl CoinBatch {
    pub fn new(denomination: impl Into<String>, count: u32) -> Self {
        Self {
            denomination: denomination.into(),
            count,
        }
    }
}

/// Coins to pay out, grouped by denomination from the highest value down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangePlan {
    batches: Vec<CoinBatch>,
}

impl ChangePlan {
    pub fn from_batches(batches: Vec<CoinBatch>) -> Self {
        Self { batches }
    }

    pub fn batches(&self) -> impl Iterator<Item = &CoinBatch> {
        self.batches.iter()
    }

    /// One denomination id per coin, in payout order.
    pub fn coins(&self) -> impl Iterator<Item = &str> {
        self.batches.iter().flat_map(|b| {
            std::iter::repeat_n(b.denomination.as_str(), b.count as usize)
        })
    }

    pub fn coin_count(&self) -> u32 {
        self.batches.iter().map(|b| b.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Plans exact change for `amount` from the coins currently in `reserve`.
pub fn plan_change(
    amount: Cents,
    denominations: &DenominationTable,
    reserve: &CoinReserve,
) -> Result<ChangePlan, InsufficientChange> {
    let mut remaining = amount;
    let mut batches = Vec::new();

    for denomination in denominations.iter() {
        if remaining.is_zero() {
            break;
        }
        let wanted = remaining.units_of(denomination.face_value());
        let available = u64::from(reserve.count(denomination.id()));
        // bounded by the reserve count, so it fits in u32
        let take = wanted.min(available) as u32;
        if take > 0 {
            let paid = denomination
                .face_value()
                .checked_mul(take)
                .ok_or(InsufficientChange)?;
            remaining = remaining - paid;
            batches.push(CoinBatch::new(denomination.id(), take));
        }
    }

    if remaining.is_zero() {
        Ok(ChangePlan { batches })
    } else {
        Err(InsufficientChange)
    }
}
