use crate::domain::change::ChangePlan;
use crate::error::{Result, VendingError};
use serde::Serialize;

/// Coins per denomination after a service visit.
pub const RESTOCK_COIN_COUNT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinSlot {
    pub denomination: String,
    pub count: u32,
}

impl CoinSlot {
    /// Creates a slot holding `count` coins of `denomination`.
    pub fn new(denomination: impl Into<String>, count: u32) -> Self {
        Self {
            denomination: denomination.into(),
            count,
        }
    }
}

/// The machine's stock of coins used to pay out change.
#[derive(Debug, Clone, Default)]
pub struct CoinReserve {
    slots: Vec<CoinSlot>,
}

impl CoinReserve {
    /// Creates an empty reserve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reserve from its starting slots.
    ///
    /// Fails on the first denomination that appears twice.
    pub fn from_slots<I: IntoIterator<Item = CoinSlot>>(slots: I) -> Result<Self> {
        let mut reserve = Self::new();
        for slot in slots {
            reserve.add(slot)?;
        }
        Ok(reserve)
    }

    /// Adds a slot for a denomination that has none yet.
    pub fn add(&mut self, slot: CoinSlot) -> Result<()> {
        if self.contains(&slot.denomination) {
            return Err(VendingError::DuplicateDenomination(slot.denomination));
        }
        self.slots.push(slot);
        Ok(())
    }

    pub fn contains(&self, denomination: &str) -> bool {
        self.slots.iter().any(|s| s.denomination == denomination)
    }

    /// Coins available for `denomination`; zero when there is no slot for it.
    pub fn count(&self, denomination: &str) -> u32 {
        self.slots
            .iter()
            .find(|s| s.denomination == denomination)
            .map_or(0, |s| s.count)
    }

    /// Removes a single coin from the reserve.
    pub fn eject_coin(&mut self, denomination: &str) -> Result<()> {
        let slot = self.slot_mut(denomination)?;
        if slot.count == 0 {
            return Err(VendingError::ValidationError(format!(
                "Coin slot {denomination} is empty"
            )));
        }
        slot.count -= 1;
        Ok(())
    }

    /// Removes every coin in `plan` from the reserve, or nothing at all.
    pub fn dispense(&mut self, plan: &ChangePlan) -> Result<()> {
        for batch in plan.batches() {
            let available = self.slot(&batch.denomination)?.count;
            if available < batch.count {
                return Err(VendingError::ValidationError(format!(
                    "Coin slot {} holds {available}, plan needs {}",
                    batch.denomination, batch.count
                )));
            }
        }
        for batch in plan.batches() {
            self.slot_mut(&batch.denomination)?.count -= batch.count;
        }
        Ok(())
    }

    pub fn restock(&mut self) {
        for slot in &mut self.slots {
            slot.count = RESTOCK_COIN_COUNT;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoinSlot> {
        self.slots.iter()
    }

    fn slot(&self, denomination: &str) -> Result<&CoinSlot> {
        self.slots
            .iter()
            .find(|s| s.denomination == denomination)
            .ok_or_else(|| VendingError::UnknownDenomination(denomination.to_string()))
    }

    fn slot_mut(&mut self, denomination: &str) -> Result<&mut CoinSlot> {
        self.slots
            .iter_mut()
            .find(|s| s.denomination == denomination)
            .ok_or_else(|| VendingError::UnknownDenomination(denomination.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::change::CoinBatch;

    #[test]
    fn test_add_and_count() {
        let mut reserve = CoinReserve::new();
        reserve.add(CoinSlot::new("NICKEL", 5)).unwrap();

        assert!(reserve.contains("NICKEL"));
        assert_eq!(reserve.count("NICKEL"), 5);
        assert_eq!(reserve.count("DIME"), 0);
        assert!(matches!(
            reserve.add(CoinSlot::new("NICKEL", 1)),
            Err(VendingError::DuplicateDenomination(_))
        ));
    }

    #[test]
    fn test_from_slots_rejects_duplicates() {
        let result = CoinReserve::from_slots([
            CoinSlot::new("DIME", 1),
            CoinSlot::new("NICKEL", 1),
            CoinSlot::new("DIME", 2),
        ]);
        assert!(matches!(
            result,
            Err(VendingError::DuplicateDenomination(id)) if id == "DIME"
        ));
    }

    #[test]
    fn test_restock() {
        let mut reserve =
            CoinReserve::from_slots([CoinSlot::new("NICKEL", 5), CoinSlot::new("DIME", 0)])
                .unwrap();
        reserve.restock();

        assert_eq!(reserve.count("NICKEL"), 100);
        assert_eq!(reserve.count("DIME"), 100);
    }

    #[test]
    fn test_eject_coin() {
        let mut reserve = CoinReserve::from_slots([CoinSlot::new("NICKEL", 5)]).unwrap();
        reserve.eject_coin("NICKEL").unwrap();
        assert_eq!(reserve.count("NICKEL"), 4);
    }

    #[test]
    fn test_eject_coin_for_unknown_denomination() {
        let mut reserve = CoinReserve::new();
        let result = reserve.eject_coin("NICKEL");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Coin denomination not found: NICKEL"
        );
    }

    #[test]
    fn test_eject_coin_never_goes_negative() {
        let mut reserve = CoinReserve::from_slots([CoinSlot::new("DIME", 0)]).unwrap();
        assert!(reserve.eject_coin("DIME").is_err());
        assert_eq!(reserve.count("DIME"), 0);
    }

    #[test]
    fn test_dispense_is_all_or_nothing() {
        let mut reserve =
            CoinReserve::from_slots([CoinSlot::new("QUARTER", 3), CoinSlot::new("DIME", 1)])
                .unwrap();

        let too_many = ChangePlan::from_batches(vec![
            CoinBatch::new("QUARTER", 2),
            CoinBatch::new("DIME", 2),
        ]);
        assert!(reserve.dispense(&too_many).is_err());
        assert_eq!(reserve.count("QUARTER"), 3);
        assert_eq!(reserve.count("DIME"), 1);

        let fits = ChangePlan::from_batches(vec![
            CoinBatch::new("QUARTER", 2),
            CoinBatch::new("DIME", 1),
        ]);
        reserve.dispense(&fits).unwrap();
        assert_eq!(reserve.count("QUARTER"), 1);
        assert_eq!(reserve.count("DIME"), 0);
    }
}
