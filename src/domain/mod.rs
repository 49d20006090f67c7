//! Domain layer: coins, the coin vault and the inventory slots.
//!
//! Nothing in here performs I/O; the types only enforce their own invariants.

pub mod coin;
pub mod inventory;
pub mod vault;
