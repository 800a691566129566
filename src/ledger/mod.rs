pub mod account;
pub mod category;
pub mod money;
pub mod store;

pub use account::Account;
pub use category::{Category, DEPOSIT, RESERVED_CATEGORIES, TRANSFER, WITHDRAWAL};
pub use store::LedgerStore;
