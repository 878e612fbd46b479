#![allow(dead_code)]

use vending::application::machine::VendingMachine;
use vending::config::{CoinConfig, MachineConfig};

/// The stock machine: DOLLAR/QUARTER/DIME/NICKEL, 100 of each, items A/B/C.
pub fn stock_machine() -> VendingMachine {
    MachineConfig::default()
        .build()
        .expect("default config is valid")
}

/// The stock machine with the given coin counts in the reserve.
pub fn machine_with_coins(coins: &[(&str, u32)]) -> VendingMachine {
    let mut config = MachineConfig::default();
    config.coins = coins
        .iter()
        .map(|(id, count)| CoinConfig {
            id: id.to_string(),
            count: *count,
        })
        .collect();
    config.build().expect("coin config is valid")
}

pub fn face_value(id: &str) -> u64 {
    match id {
        "DOLLAR" => 100,
        "QUARTER" => 25,
        "DIME" => 10,
        "NICKEL" => 5,
        other => panic!("not a coin: {other}"),
    }
}

pub fn write_config(json: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}
