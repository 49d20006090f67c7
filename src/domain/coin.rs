use crate::error::VendingError;
use std::fmt;
use std::str::FromStr;

pub const CURRENCY_SYMBOL: &str = "JPY";

/// A coin the machine understands.
///
/// The set is closed: anything else is refused at parse time and never
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coin {
    Ten,
    Fifty,
    Hundred,
    FiveHundred,
}

impl Coin {
    /// Every denomination, smallest first.
    pub const ALL: [Coin; 4] = [Coin::Ten, Coin::Fifty, Coin::Hundred, Coin::FiveHundred];

    /// Denominations the machine pays change with, largest first.
    pub const CHANGE: [Coin; 2] = [Coin::Hundred, Coin::Ten];

    pub const fn value(self) -> u32 {
        match self {
            Coin::Ten => 10,
            Coin::Fifty => 50,
            Coin::Hundred => 100,
            Coin::FiveHundred => 500,
        }
    }

    /// Minimum count the vault must hold of this coin before the machine
    /// advertises it can give change with it. `None` for coins never paid out.
    pub const fn change_reserve(self) -> Option<u32> {
        match self {
            Coin::Ten => Some(9),
            Coin::Hundred => Some(4),
            Coin::Fifty | Coin::FiveHundred => None,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

impl FromStr for Coin {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10" => Ok(Coin::Ten),
            "50" => Ok(Coin::Fifty),
            "100" => Ok(Coin::Hundred),
            "500" => Ok(Coin::FiveHundred),
            other => Err(VendingError::InvalidCoin(other.to_string())),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), CURRENCY_SYMBOL)
    }
}

/// Sums the face value of a run of coins.
pub fn total<'a>(coins: impl IntoIterator<Item = &'a Coin>) -> u32 {
    coins.into_iter().map(|c| c.value()).sum()
}
