use std::borrow::Cow;

use tracing::trace;

use super::account::BankAccount;

/// Collects the fields of a [`BankAccount`] one call at a time.
///
/// The account number is required up front; everything else defaults to an empty string or
/// zero. Setters consume and return the builder so they chain, and the last value given for a
/// field wins.
///
/// `build` only borrows the builder. Calling it again yields another, independent account with
/// the same fields.
#[derive(Clone, Debug, PartialEq)]
pub struct BankAccountBuilder<'a> {
    account_number: i64,
    owner: Cow<'a, str>,
    branch: Cow<'a, str>,
    balance: f64,
    interest_rate: f64,
}

impl<'a> BankAccountBuilder<'a> {
    pub fn new(account_number: i64) -> Self {
        trace!(account_number, "starting bank account builder");
        BankAccountBuilder {
            account_number,
            owner: Cow::Borrowed(""),
            branch: Cow::Borrowed(""),
            balance: 0.0,
            interest_rate: 0.0,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<Cow<'a, str>>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn at_branch(mut self, branch: impl Into<Cow<'a, str>>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn opening_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn at_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }

    pub fn build(&self) -> BankAccount<'a> {
        trace!(account_number = self.account_number, "building bank account");
        BankAccount {
            account_number: self.account_number,
            owner: self.owner.clone(),
            branch: self.branch.clone(),
            balance: self.balance,
            interest_rate: self.interest_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let account = BankAccountBuilder::new(42).build();

        assert_eq!(account.account_number(), 42);
        assert_eq!(account.owner(), "");
        assert_eq!(account.branch(), "");
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.interest_rate(), 0.0);
    }

    #[test]
    fn test_account_number_is_not_validated() {
        assert_eq!(BankAccountBuilder::new(0).build().account_number(), 0);
        assert_eq!(BankAccountBuilder::new(-5).build().account_number(), -5);
        assert_eq!(
            BankAccountBuilder::new(i64::MIN).build().account_number(),
            i64::MIN
        );
    }

    #[test]
    fn test_chained_setters() {
        let account = BankAccountBuilder::new(1)
            .at_rate(2.5)
            .with_owner("Merge")
            .opening_balance(100.0)
            .at_branch(String::from("Springfield"))
            .build();

        assert_eq!(account.account_number(), 1);
        assert_eq!(account.owner(), "Merge");
        assert_eq!(account.branch(), "Springfield");
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.interest_rate(), 2.5);
    }

    #[test]
    fn test_build_leaves_builder_usable() {
        let builder = BankAccountBuilder::new(3).with_owner("Lisa");
        let first = builder.build();
        let second = builder.at_branch("Capital City").build();

        assert_eq!(first.branch(), "");
        assert_eq!(second.branch(), "Capital City");
        assert_eq!(first.owner(), second.owner());
    }

    #[derive(Clone, Debug)]
    enum Step {
        Owner(String),
        Branch(String),
        Balance(f64),
        Rate(f64),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            ".*".prop_map(Step::Owner),
            ".*".prop_map(Step::Branch),
            (-1.0e12..1.0e12f64).prop_map(Step::Balance),
            (-100.0..100.0f64).prop_map(Step::Rate),
        ]
    }

    proptest! {
        #[test]
        fn test_last_write_wins(account_number: i64, steps in prop::collection::vec(step(), 0..32)) {
            let mut builder = BankAccountBuilder::new(account_number);
            let (mut owner, mut branch, mut balance, mut rate) =
                (String::new(), String::new(), 0.0, 0.0);

            for step in steps {
                builder = match step {
                    Step::Owner(s) => {
                        owner = s.clone();
                        builder.with_owner(s)
                    }
                    Step::Branch(s) => {
                        branch = s.clone();
                        builder.at_branch(s)
                    }
                    Step::Balance(n) => {
                        balance = n;
                        builder.opening_balance(n)
                    }
                    Step::Rate(n) => {
                        rate = n;
                        builder.at_rate(n)
                    }
                };
            }

            let account = builder.build();
            prop_assert_eq!(account.account_number(), account_number);
            prop_assert_eq!(account.owner(), owner.as_str());
            prop_assert_eq!(account.branch(), branch.as_str());
            prop_assert_eq!(account.balance(), balance);
            prop_assert_eq!(account.interest_rate(), rate);
        }

        #[test]
        fn test_repeated_build_is_equal(
            account_number: i64,
            owner in ".*",
            balance in -1.0e12..1.0e12f64,
        ) {
            let builder = BankAccountBuilder::new(account_number)
                .with_owner(owner)
                .opening_balance(balance);

            prop_assert_eq!(builder.build(), builder.build());
        }
    }
}
