pub mod stock;
pub mod transaction;

pub use stock::StockService;
pub use transaction::TransactionService;
