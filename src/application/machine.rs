use crate::domain::change::{InsufficientChange, plan_change};
use crate::domain::coin_reserve::{CoinReserve, CoinSlot};
use crate::domain::command::{Command, parse_batch};
use crate::domain::denomination::DenominationTable;
use crate::domain::item_catalog::{ItemCatalog, ItemSlot};
use crate::domain::ledger::{Holding, PaymentLedger};
use crate::domain::money::Cents;
use crate::domain::reply::{Reply, render};
use crate::error::{Result, VendingError};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Point-in-time copy of everything a command can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    pub coins: Vec<CoinSlot>,
    pub items: Vec<ItemSlot>,
    pub ledger: Vec<Holding>,
}

/// The command processor of a single vending machine.
///
/// `VendingMachine` owns its inventories outright and applies each command
/// against their current state. A command either passes every check and
/// applies all of its effects, or changes nothing.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    denominations: DenominationTable,
    catalog: ItemCatalog,
    reserve: CoinReserve,
    ledger: PaymentLedger,
}

impl VendingMachine {
    /// Creates a machine from its startup inventory.
    ///
    /// Every reserve slot must name a known denomination. Denominations
    /// without a slot get an empty one so that a service visit stocks them.
    pub fn new(
        denominations: DenominationTable,
        catalog: ItemCatalog,
        mut reserve: CoinReserve,
    ) -> Result<Self> {
        if let Some(slot) = reserve
            .iter()
            .find(|slot| !denominations.has_denomination(&slot.denomination))
        {
            return Err(VendingError::UnknownDenomination(slot.denomination.clone()));
        }
        for denomination in denominations.iter() {
            if !reserve.contains(denomination.id()) {
                reserve.add(CoinSlot::new(denomination.id(), 0))?;
            }
        }

        Ok(Self {
            denominations,
            catalog,
            reserve,
            ledger: PaymentLedger::new(),
        })
    }

    /// Runs every command on the line, left to right, and returns the joined
    /// response tokens.
    ///
    /// An `Err` means an internal invariant was broken; customer mistakes are
    /// reported as response tokens.
    pub fn process(&mut self, line: &str) -> Result<String> {
        let mut replies = Vec::new();
        for command in parse_batch(line) {
            self.execute(command, &mut replies)?;
        }
        Ok(render(&replies))
    }

    /// Applies a single command, appending its response tokens to `replies`.
    ///
    /// Checks run before any mutation, so a command that is refused leaves
    /// the inventories and the ledger exactly as they were.
    fn execute(&mut self, command: Command, replies: &mut Vec<Reply>) -> Result<()> {
        debug!(?command, "executing command");
        match command {
            Command::Service => self.service(replies),
            Command::Put(denomination) => self.insert_coin(&denomination, replies),
            Command::CoinReturn => self.coin_return(replies),
            Command::Get(item) => return self.purchase(&item, replies),
            Command::Unrecognized(_) => replies.push(Reply::InvalidCommand),
        }
        Ok(())
    }

    fn service(&mut self, replies: &mut Vec<Reply>) {
        self.catalog.restock();
        self.reserve.restock();
        info!("machine serviced");
        replies.push(Reply::ServiceOk);
    }

    fn insert_coin(&mut self, denomination: &str, replies: &mut Vec<Reply>) {
        if self.denominations.has_denomination(denomination) {
            self.ledger.add_coin(denomination);
        } else {
            replies.push(Reply::InvalidCoin);
        }
    }

    // Hands back what the customer holds without touching the reserve. The
    // ledger keeps its coins, so a second refund repeats them.
    fn coin_return(&self, replies: &mut Vec<Reply>) {
        replies.extend(self.ledger.refund().map(|coin| Reply::Coin(coin.to_string())));
    }

    fn purchase(&mut self, item_id: &str, replies: &mut Vec<Reply>) -> Result<()> {
        if !self.catalog.is_valid_item_id(item_id) {
            replies.push(Reply::InvalidItem);
            return Ok(());
        }

        if !self.catalog.has_stock(item_id)? {
            replies.push(Reply::OutOfStock);
            return Ok(());
        }

        let funds = self.ledger.total(&self.denominations)?;
        let price = self.catalog.price(item_id)?;
        if funds < price {
            replies.push(Reply::InsufficientFunds);
            return Ok(());
        }

        let change = funds - price;
        let plan = match plan_change(change, &self.denominations, &self.reserve) {
            Ok(plan) => plan,
            Err(InsufficientChange) => {
                warn!(item = item_id, %change, "cannot make change, sale refused");
                replies.push(Reply::InsufficientChange);
                return Ok(());
            }
        };

        self.reserve.dispense(&plan)?;
        self.ledger.clear();
        self.catalog.eject_item(item_id)?;
        info!(item = item_id, %price, %funds, coins = plan.coin_count(), "item vended");

        replies.push(Reply::Item(item_id.to_string()));
        replies.extend(plan.coins().map(|coin| Reply::Coin(coin.to_string())));
        Ok(())
    }

    /// Value of the coins inserted so far.
    pub fn funds(&self) -> Result<Cents> {
        self.ledger.total(&self.denominations)
    }

    pub fn denominations(&self) -> &DenominationTable {
        &self.denominations
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn reserve(&self) -> &CoinReserve {
        &self.reserve
    }

    pub fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            coins: self.reserve.iter().cloned().collect(),
            items: self.catalog.iter().cloned().collect(),
            ledger: self.ledger.iter().cloned().collect(),
        }
    }
}
