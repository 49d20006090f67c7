use crate::application::machine::VendingMachine;
use crate::domain::coin::{CURRENCY_SYMBOL, Coin};
use std::fmt::{self, Write};

const EMPTY: &str = "Empty";

/// Renders the machine's status panel.
///
/// Only reads state; the return tray and outlet are shown, not drained.
pub fn render(machine: &VendingMachine) -> String {
    let mut out = String::new();
    match write_panel(&mut out, machine) {
        Ok(()) => out.trim().to_string(),
        Err(fmt::Error) => String::new(),
    }
}

/// Writes the panel into any formatter sink.
pub fn write_panel(out: &mut impl Write, machine: &VendingMachine) -> fmt::Result {
    let total_input = machine.total_input();

    writeln!(out, "[Input amount]\t\t\t{total_input} {CURRENCY_SYMBOL}")?;
    for (i, (coin, available)) in machine.change_status().enumerate() {
        let label = if i == 0 { "[Change]\t\t\t\t" } else { "\t\t\t\t\t\t" };
        writeln!(out, "{label}{coin}\t\t\t{}", change_label(available))?;
    }
    writeln!(out, "[Return gate]\t\t\t{}", join_coins(machine.returns()))?;
    writeln!(out, "[Items for sale]")?;
    for (i, slot) in machine.slots().iter().enumerate() {
        write!(
            out,
            "{}. {}\t\t{} {CURRENCY_SYMBOL}",
            i + 1,
            slot.name(),
            slot.price()
        )?;
        if let Some(availability) = slot.availability(total_input) {
            write!(out, "\t\t\t{availability}")?;
        }
        writeln!(out)?;
    }
    let names: Vec<&str> = machine.outlet().iter().map(|i| i.name.as_str()).collect();
    write!(out, "[Outlet]\t\t\t\t{}", or_empty(names.join(", ")))
}

fn change_label(available: bool) -> &'static str {
    if available { "Change" } else { "No Change" }
}

fn join_coins(coins: &[Coin]) -> String {
    let shown: Vec<String> = coins.iter().map(Coin::to_string).collect();
    or_empty(shown.join(", "))
}

fn or_empty(joined: String) -> String {
    if joined.is_empty() {
        EMPTY.to_string()
    } else {
        joined
    }
}
