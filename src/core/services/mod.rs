pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{BalanceSign, SummaryService, Totals};
pub use transaction_service::TransactionService;
