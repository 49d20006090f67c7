use crate::domain::inventory::{Item, Slot};
use crate::error::{Result, VendingError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct StockRow {
    name: String,
    price: u32,
    stock: u32,
}

impl TryFrom<StockRow> for Slot {
    type Error = VendingError;

    fn try_from(row: StockRow) -> Result<Self> {
        if row.name.is_empty() {
            return Err(VendingError::InvalidStock("item name is empty".to_string()));
        }
        if row.price == 0 {
            return Err(VendingError::InvalidStock(format!(
                "{} must have a positive price",
                row.name
            )));
        }
        Ok(Slot::new(Item::new(row.name, row.price), row.stock))
    }
}

/// Reads inventory slots from a CSV source with a `name,price,stock` header.
///
/// Whitespace around fields is trimmed. Slots keep the order of the rows,
/// which is the order they are numbered on the panel.
pub struct StockReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StockReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and validates each row.
    pub fn slots(self) -> impl Iterator<Item = Result<Slot>> {
        self.reader
            .into_deserialize::<StockRow>()
            .map(|row| row.map_err(VendingError::from).and_then(Slot::try_from))
    }

    /// Reads every row, failing on the first bad one.
    pub fn read_all(self) -> Result<Vec<Slot>> {
        self.slots().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "name, price, stock\nCanned Coffee, 120, 10\nWater PET bottle, 100, 0";
        let slots = StockReader::new(data.as_bytes()).read_all().unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name(), "Canned Coffee");
        assert_eq!(slots[0].price(), 120);
        assert_eq!(slots[0].stock(), 10);
        assert!(slots[1].is_sold_out());
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "name, price, stock\nCanned Coffee, cheap, 10";
        let results: Vec<Result<Slot>> = StockReader::new(data.as_bytes()).slots().collect();

        assert!(matches!(results[0], Err(VendingError::Csv(_))));
    }

    #[test]
    fn test_reader_rejects_free_items() {
        let data = "name, price, stock\nAir, 0, 10";
        let err = StockReader::new(data.as_bytes()).read_all().unwrap_err();

        assert!(matches!(err, VendingError::InvalidStock(_)));
    }

    #[test]
    fn test_reader_empty_file() {
        let data = "name, price, stock\n";
        let slots = StockReader::new(data.as_bytes()).read_all().unwrap();
        assert!(slots.is_empty());
    }
}
