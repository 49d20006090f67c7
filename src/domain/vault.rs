use super::coin::Coin;
use crate::error::{Result, VendingError};

/// The machine's own coin reserve, one counter per denomination.
///
/// `Vault` is `Copy`, so a purchase can work on a scratch copy and only
/// write it back once the whole sale has gone through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vault {
    counts: [u32; Coin::ALL.len()],
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, coin: Coin) -> u32 {
        self.counts[coin.slot()]
    }

    /// Stores one more coin, failing once the counter is saturated.
    pub fn add(&mut self, coin: Coin) -> Result<()> {
        let count = &mut self.counts[coin.slot()];
        *count = count.checked_add(1).ok_or(VendingError::VaultFull(coin))?;
        Ok(())
    }

    /// Removes one coin if there is one to remove.
    pub fn take(&mut self, coin: Coin) -> bool {
        let count = &mut self.counts[coin.slot()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Whether the reserve of `coin` is at or above its change threshold.
    pub fn can_give_change(&self, coin: Coin) -> bool {
        coin.change_reserve()
            .is_some_and(|reserve| self.count(coin) >= reserve)
    }

    /// Admission check for a deposit: every change coin smaller than the
    /// deposited one must be stocked to its reserve.
    pub fn can_accept(&self, coin: Coin) -> bool {
        Coin::CHANGE
            .iter()
            .filter(|change| change.value() < coin.value())
            .all(|change| self.can_give_change(*change))
    }

    pub fn value(&self) -> u64 {
        Coin::ALL
            .iter()
            .map(|c| u64::from(c.value()) * u64::from(self.count(*c)))
            .sum()
    }
}

impl FromIterator<(Coin, u32)> for Vault {
    fn from_iter<I: IntoIterator<Item = (Coin, u32)>>(iter: I) -> Self {
        let mut vault = Vault::new();
        for (coin, count) in iter {
            vault.counts[coin.slot()] = count;
        }
        vault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_never_goes_negative() {
        let mut vault = Vault::from_iter([(Coin::Ten, 1)]);
        assert!(vault.take(Coin::Ten));
        assert!(!vault.take(Coin::Ten));
        assert_eq!(vault.count(Coin::Ten), 0);
    }

    #[test]
    fn test_admission_on_empty_vault() {
        let vault = Vault::new();
        assert!(vault.can_accept(Coin::Ten));
        assert!(!vault.can_accept(Coin::Fifty));
        assert!(!vault.can_accept(Coin::Hundred));
        assert!(!vault.can_accept(Coin::FiveHundred));
    }

    #[test]
    fn test_admission_thresholds() {
        let vault = Vault::from_iter([(Coin::Ten, 5)]);
        assert!(!vault.can_accept(Coin::Fifty));
        assert!(!vault.can_accept(Coin::Hundred));

        let vault = Vault::from_iter([(Coin::Ten, 10)]);
        assert!(vault.can_accept(Coin::Hundred));
        assert!(!vault.can_accept(Coin::FiveHundred));

        let vault = Vault::from_iter([(Coin::Ten, 20), (Coin::Hundred, 3)]);
        assert!(!vault.can_accept(Coin::FiveHundred));

        let vault = Vault::from_iter([(Coin::Ten, 20), (Coin::Hundred, 5)]);
        assert!(vault.can_accept(Coin::FiveHundred));
    }

    #[test]
    fn test_change_status() {
        let vault = Vault::from_iter([(Coin::Ten, 9), (Coin::Hundred, 3), (Coin::Fifty, 100)]);
        assert!(vault.can_give_change(Coin::Ten));
        assert!(!vault.can_give_change(Coin::Hundred));
        assert!(!vault.can_give_change(Coin::Fifty));
    }

    #[test]
    fn test_add_refuses_to_overflow() {
        let mut vault = Vault::from_iter([(Coin::Ten, u32::MAX)]);
        let err = vault.add(Coin::Ten).unwrap_err();
        assert!(matches!(err, VendingError::VaultFull(Coin::Ten)));
        assert_eq!(vault.count(Coin::Ten), u32::MAX);

        vault.add(Coin::Hundred).unwrap();
        assert_eq!(vault.count(Coin::Hundred), 1);
    }

    #[test]
    fn test_value() {
        let vault = Vault::from_iter([(Coin::Ten, 3), (Coin::FiveHundred, 2)]);
        assert_eq!(vault.value(), 1030);

        let full = Vault::from_iter([(Coin::FiveHundred, u32::MAX)]);
        assert_eq!(full.value(), 500 * u64::from(u32::MAX));
    }
}
