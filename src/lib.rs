//! Bank and fixed deposit accounts: balance, transactions history and closing.
//!
//! Every account kind implements [`account::Account`]. Accounts do no internal locking, wrap
//! one in a `Mutex` to share it between threads.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod errors;
pub mod summary;

pub use account::{Account, BankAccount, FixedDepositAccount, FixedDepositTerms};
pub use errors::AccountErr;
