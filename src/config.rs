//! Startup inventory for a machine.
//!
//! A [`MachineConfig`] is read once, validated and turned into a
//! [`VendingMachine`]. There is no way to change it from the command stream:
//! a service visit restores quantities to fixed amounts, not to these values.

use crate::application::machine::VendingMachine;
use crate::domain::coin_reserve::{CoinReserve, CoinSlot};
use crate::domain::denomination::{Denomination, DenominationTable};
use crate::domain::item_catalog::{ItemCatalog, ItemSlot};
use crate::domain::money::Cents;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationConfig {
    pub id: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinConfig {
    pub id: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    pub price: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub denominations: Vec<DenominationConfig>,
    #[serde(default)]
    pub coins: Vec<CoinConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        let denomination = |id: &str, value| DenominationConfig {
            id: id.to_string(),
            value,
        };
        let coin = |id: &str| CoinConfig {
            id: id.to_string(),
            count: 100,
        };
        let item = |id: &str, price| ItemConfig {
            id: id.to_string(),
            price,
            quantity: 20,
        };

        Self {
            denominations: vec![
                denomination("DOLLAR", 100),
                denomination("DIME", 10),
                denomination("NICKEL", 5),
                denomination("QUARTER", 25),
            ],
            coins: vec![coin("NICKEL"), coin("DIME"), coin("QUARTER"), coin("DOLLAR")],
            items: vec![item("A", 65), item("B", 100), item("C", 150)],
        }
    }
}

impl MachineConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Validates the configuration and builds a machine from it.
    ///
    /// Ids are upper-cased so they match case-normalised commands.
    pub fn build(&self) -> Result<VendingMachine> {
        let denominations = DenominationTable::new(
            self.denominations
                .iter()
                .map(|d| Denomination::new(d.id.to_uppercase(), Cents::new(d.value)))
                .collect::<Result<Vec<_>>>()?,
        )?;

        let reserve = CoinReserve::from_slots(
            self.coins
                .iter()
                .map(|coin| CoinSlot::new(coin.id.to_uppercase(), coin.count)),
        )?;

        let mut catalog = ItemCatalog::new();
        for item in &self.items {
            catalog.add(ItemSlot::new(
                item.id.to_uppercase(),
                Cents::new(item.price),
                item.quantity,
            )?)?;
        }

        VendingMachine::new(denominations, catalog, reserve)
    }
}
