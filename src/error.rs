use crate::domain::coin::Coin;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Unable to return change")]
    CannotMakeChange,
    #[error("Invalid inventory, please enter number from (1 to {count})")]
    InvalidInventory { count: usize },
    #[error("{0} is sold out")]
    SoldOut(String),
    #[error("Vault cannot hold any more {0} coins")]
    VaultFull(Coin),
    #[error("Inserted money not enough to buy this item")]
    InsufficientFunds,
    #[error("{0} is not a valid coin")]
    InvalidCoin(String),
    #[error("{0}")]
    MissingArgument(&'static str),
    #[error("Invalid item number: {0}")]
    InvalidItemNumber(#[from] ParseIntError),
    #[error("Invalid commands")]
    UnknownCommand,
    #[error("Invalid stock entry: {0}")]
    InvalidStock(String),
    #[error("Invalid coin float: {0}")]
    InvalidFloat(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VendingError>;
