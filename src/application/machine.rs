use crate::domain::coin::{self, Coin};
use crate::domain::inventory::{Item, Slot};
use crate::domain::vault::Vault;
use crate::error::{Result, VendingError};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// The register engine of a coin-operated vending machine.
///
/// `VendingMachine` owns every coin and item in the machine:
///
/// * the vault, coins the machine owns and pays change with,
/// * the input queue, coins the current customer has inserted and not yet spent,
/// * the return tray, coins handed back to the customer,
/// * the outlet, items sold and waiting to be collected.
///
/// All mutation goes through the operations below. A purchase runs against a
/// scratch copy of the vault and input queue and is committed only when change
/// could be made in full, so a failed call never leaves partial state behind.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    vault: Vault,
    input: VecDeque<Coin>,
    returns: Vec<Coin>,
    slots: Vec<Slot>,
    outlet: Vec<Item>,
}

impl VendingMachine {
    /// Creates a machine provisioned with a coin float and its stock.
    pub fn new(vault: Vault, slots: Vec<Slot>) -> Self {
        Self {
            vault,
            input: VecDeque::new(),
            returns: Vec::new(),
            slots,
            outlet: Vec::new(),
        }
    }

    /// Inserts a coin.
    ///
    /// The coin is refused, and dropped into the return tray, when the vault
    /// could not pay change for it.
    pub fn insert(&mut self, coin: Coin) -> Result<()> {
        if !self.vault.can_accept(coin) {
            warn!(%coin, "coin refused, not enough change in vault");
            self.returns.push(coin);
            return Err(VendingError::CannotMakeChange);
        }

        debug!(%coin, "coin accepted");
        self.input.push_back(coin);
        Ok(())
    }

    /// Buys one unit from the slot at `index` (zero-based).
    ///
    /// Inserted coins are spent oldest first. Change is pushed back onto the
    /// front of the input queue so a following purchase can spend it.
    pub fn buy(&mut self, index: usize) -> Result<()> {
        let slot = self.slots.get(index).ok_or(VendingError::InvalidInventory {
            count: self.slots.len(),
        })?;
        if slot.is_sold_out() {
            return Err(VendingError::SoldOut(slot.name().to_string()));
        }
        let price = slot.price();
        if self.total_input() < price {
            return Err(VendingError::InsufficientFunds);
        }

        let mut vault = self.vault;
        let mut input = self.input.clone();

        let mut taken = 0;
        while taken < price {
            let Some(coin) = input.pop_front() else {
                return Err(VendingError::InsufficientFunds);
            };
            taken += coin.value();
            if let Err(e) = vault.add(coin) {
                warn!(%coin, "sale aborted, vault is full");
                return Err(e);
            }
        }

        if let Err(e) = make_change(&mut vault, &mut input, taken - price) {
            warn!(index, price, taken, "sale aborted, vault cannot cover change");
            return Err(e);
        }

        self.vault = vault;
        self.input = input;
        let item = self.slots[index].dispense();
        info!(item = %item.name, price, change = taken - price, "item sold");
        self.outlet.push(item);

        Ok(())
    }

    /// Takes every item waiting in the outlet.
    pub fn take_items(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.outlet)
    }

    /// Moves every unspent inserted coin to the return tray.
    pub fn return_input(&mut self) {
        debug!(coins = self.input.len(), "returning inserted coins");
        self.returns.extend(self.input.drain(..));
    }

    /// Takes every coin waiting in the return tray.
    pub fn take_returns(&mut self) -> Vec<Coin> {
        std::mem::take(&mut self.returns)
    }

    pub fn total_input(&self) -> u32 {
        coin::total(&self.input)
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    pub fn input(&self) -> impl ExactSizeIterator<Item = &Coin> {
        self.input.iter()
    }

    pub fn returns(&self) -> &[Coin] {
        &self.returns
    }

    pub fn outlet(&self) -> &[Item] {
        &self.outlet
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Per change coin, largest first, whether the vault is still stocked to
    /// its reserve threshold.
    pub fn change_status(&self) -> impl Iterator<Item = (Coin, bool)> + '_ {
        Coin::CHANGE
            .into_iter()
            .map(|c| (c, self.vault.can_give_change(c)))
    }
}

/// Pays `change` out of `vault`, preferring the largest change coin, and
/// pushes each paid coin onto the front of `input`.
fn make_change(vault: &mut Vault, input: &mut VecDeque<Coin>, mut change: u32) -> Result<()> {
    while change > 0 {
        let coin = Coin::CHANGE
            .into_iter()
            .find(|c| c.value() <= change && vault.count(*c) > 0)
            .ok_or(VendingError::CannotMakeChange)?;
        vault.take(coin);
        change -= coin.value();
        input.push_front(coin);
    }
    Ok(())
}
