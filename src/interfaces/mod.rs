//! Outer adapters around the register engine: the operator command router,
//! the status panel and the stock file reader.

pub mod command;
pub mod csv;
pub mod display;
