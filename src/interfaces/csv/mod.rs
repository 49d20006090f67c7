pub mod stock_reader;
