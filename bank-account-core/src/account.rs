use std::borrow::Cow;

use super::builder::BankAccountBuilder;

/// A bank account.
///
/// Only [`BankAccountBuilder::build`] produces one, so every account starts out with the fields
/// its builder collected:
///
/// ```
/// use bank_account_core::BankAccount;
///
/// let account = BankAccount::builder(1)
///     .with_owner("Merge")
///     .at_branch("Springfield")
///     .opening_balance(100.0)
///     .at_rate(2.5)
///     .build();
///
/// assert_eq!(account.owner(), "Merge");
/// assert_eq!(account.balance(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BankAccount<'a> {
    pub(crate) account_number: i64,
    pub(crate) owner: Cow<'a, str>,
    pub(crate) branch: Cow<'a, str>,
    pub(crate) balance: f64,
    pub(crate) interest_rate: f64,
}

impl<'a> BankAccount<'a> {
    /// Starts a builder for the account identified by `account_number`.
    pub fn builder(account_number: i64) -> BankAccountBuilder<'a> {
        BankAccountBuilder::new(account_number)
    }

    pub fn account_number(&self) -> i64 {
        self.account_number
    }

    pub fn set_account_number(&mut self, account_number: i64) {
        self.account_number = account_number;
    }

    /// Name of the account holder, empty when never set.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<Cow<'a, str>>) {
        self.owner = owner.into();
    }

    /// Branch holding the account, empty when never set.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn set_branch(&mut self, branch: impl Into<Cow<'a, str>>) {
        self.branch = branch.into();
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn set_interest_rate(&mut self, interest_rate: f64) {
        self.interest_rate = interest_rate;
    }

    /// Converts this account into one that owns its text, keeping every field as is.
    ///
    /// This does not construct a new account; it only changes how `owner` and `branch` are held.
    pub fn into_owned(self) -> BankAccount<'static> {
        BankAccount {
            account_number: self.account_number,
            owner: Cow::Owned(self.owner.into_owned()),
            branch: Cow::Owned(self.branch.into_owned()),
            balance: self.balance,
            interest_rate: self.interest_rate,
        }
    }
}
