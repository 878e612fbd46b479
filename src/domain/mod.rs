//! Domain model: money, inventories, the change algorithm and the command
//! grammar. Nothing in here performs I/O apart from the port traits it
//! declares.

pub mod change;
pub mod coin_reserve;
pub mod command;
pub mod denomination;
pub mod item_catalog;
pub mod ledger;
pub mod money;
pub mod ports;
pub mod reply;
