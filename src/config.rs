//! Start-up provisioning: the coin float and the stock loaded into a fresh
//! machine.

use crate::domain::coin::Coin;
use crate::domain::inventory::{Item, Slot};
use crate::domain::vault::Vault;
use crate::error::{Result, VendingError};

/// Float loaded when none is given on the command line.
pub fn default_float() -> Vault {
    Vault::from_iter([(Coin::Ten, 200), (Coin::Hundred, 10)])
}

/// Stock loaded when no stock file is given.
pub fn default_stock() -> Vec<Slot> {
    vec![
        Slot::new(Item::new("Canned Coffee", 120), 10),
        Slot::new(Item::new("Water PET bottle", 100), 0),
        Slot::new(Item::new("Sport drinks XT", 150), 5),
    ]
}

/// Parses one `COIN=COUNT` float entry, e.g. `100=10`.
pub fn parse_float_entry(s: &str) -> Result<(Coin, u32)> {
    let (coin, count) = s
        .split_once('=')
        .ok_or_else(|| VendingError::InvalidFloat(format!("{s} is not COIN=COUNT")))?;
    let coin: Coin = coin.trim().parse()?;
    let count = count
        .trim()
        .parse()
        .map_err(|_| VendingError::InvalidFloat(format!("{count} is not a coin count")))?;
    Ok((coin, count))
}

/// Builds the float from command-line entries, falling back to the default
/// float when there are none. Later entries for the same coin win.
pub fn float_from_entries(entries: &[(Coin, u32)]) -> Vault {
    if entries.is_empty() {
        default_float()
    } else {
        entries.iter().copied().collect()
    }
}
