use crate::application::machine::VendingMachine;
use crate::domain::coin::Coin;
use crate::error::{Result, VendingError};

const INSERT_USAGE: &str = "Command 1 (PUSH) need 2nd argument: coin, example: 1 50";
const BUY_USAGE: &str = "Command 2 (BUY) need 2nd argument: #item, example: 2 1 to buy first item";

/// One line of operator input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(Coin),
    /// Item number as shown on the panel, starting at 1. Zero and negative
    /// numbers parse, and are rejected as invalid inventory when run.
    Buy(i64),
    TakeItems,
    ReturnInput,
    TakeReturns,
}

impl Command {
    /// Parses `<code> [argument]`. Only insert and buy need the argument;
    /// anything after it is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.trim().split(' ');
        let code = tokens.next().unwrap_or_default();
        let argument = tokens.next().filter(|t| !t.is_empty());

        match code {
            "1" => {
                let coin = argument.ok_or(VendingError::MissingArgument(INSERT_USAGE))?;
                Ok(Command::Insert(coin.parse()?))
            }
            "2" => {
                let number = argument.ok_or(VendingError::MissingArgument(BUY_USAGE))?;
                Ok(Command::Buy(number.parse()?))
            }
            "3" => Ok(Command::TakeItems),
            "4" => Ok(Command::ReturnInput),
            "5" => Ok(Command::TakeReturns),
            _ => Err(VendingError::UnknownCommand),
        }
    }

    /// Runs the command against the machine, returning a line for the
    /// customer when something was handed out.
    pub fn execute(self, machine: &mut VendingMachine) -> Result<Option<String>> {
        match self {
            Command::Insert(coin) => machine.insert(coin).map(|_| None),
            Command::Buy(number) => {
                // usize::MAX is out of range for any machine.
                let index = number
                    .checked_sub(1)
                    .and_then(|i| usize::try_from(i).ok())
                    .unwrap_or(usize::MAX);
                machine.buy(index).map(|_| None)
            }
            Command::TakeItems => {
                let names: Vec<String> = machine.take_items().into_iter().map(|i| i.name).collect();
                Ok(handed_out("GOT Items", names))
            }
            Command::ReturnInput => {
                machine.return_input();
                Ok(None)
            }
            Command::TakeReturns => {
                let coins: Vec<String> = machine.take_returns().iter().map(Coin::to_string).collect();
                Ok(handed_out("GOT Changes", coins))
            }
        }
    }
}

fn handed_out(prefix: &str, things: Vec<String>) -> Option<String> {
    if things.is_empty() {
        None
    } else {
        Some(format!("{prefix}: {}", things.join(", ")))
    }
}
