use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Label shown next to a slot on the status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    SoldOut,
    Purchasable,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::SoldOut => f.write_str("Sold out"),
            Availability::Purchasable => f.write_str("Available for purchase"),
        }
    }
}

/// An item together with how many of it are left in the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub item: Item,
    stock: u32,
}

impl Slot {
    pub fn new(item: Item, stock: u32) -> Self {
        Self { item, stock }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn price(&self) -> u32 {
        self.item.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn is_sold_out(&self) -> bool {
        self.stock == 0
    }

    /// Hands out one unit. Callers check `is_sold_out` first.
    pub(crate) fn dispense(&mut self) -> Item {
        self.stock = self.stock.saturating_sub(1);
        self.item.clone()
    }

    pub fn availability(&self, total_input: u32) -> Option<Availability> {
        if self.is_sold_out() {
            Some(Availability::SoldOut)
        } else if total_input >= self.price() {
            Some(Availability::Purchasable)
        } else {
            None
        }
    }
}
