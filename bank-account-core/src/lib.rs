pub use account::BankAccount;
pub use builder::BankAccountBuilder;

pub mod account;
pub mod builder;
