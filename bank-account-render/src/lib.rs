use bank_account_core::BankAccount;
use std::fmt;
use std::{io, io::Write};
use thiserror::Error;


#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct BasicRenderer {}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Writes `account` as `BankAccount{accountNumber=.., owner='..', ..}`.
pub fn render<W: Write>(w: &mut W, account: &BankAccount<'_>) -> Result<(), BasicRendererError> {
    BasicRenderer::default().render(account, w)
}

/// Renders `account` into a fresh string.
pub fn to_text(account: &BankAccount<'_>) -> String {
    display(account).to_string()
}

/// Adapts `account` to `fmt::Display` using the same format as [`render`].
pub fn display<'r, 'a>(account: &'r BankAccount<'a>) -> AccountDisplay<'r, 'a> {
    AccountDisplay { account }
}

#[derive(Copy, Clone, Debug)]
pub struct AccountDisplay<'r, 'a> {
    account: &'r BankAccount<'a>,
}

impl fmt::Display for AccountDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.account;
        // `{:?}` keeps the fractional part on whole numbers: 100.0, not 100.
        write!(
            f,
            "BankAccount{{accountNumber={}, owner='{}', branch='{}', balance={:?}, interestRate={:?}}}",
            account.account_number(),
            account.owner(),
            account.branch(),
            account.balance(),
            account.interest_rate()
        )
    }
}

#[derive(Error, Debug)]
pub enum BasicRendererError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a BankAccount<'_>, W> for BasicRenderer {
    type Error = BasicRendererError;
    fn render(&self, account: &'a BankAccount<'_>, w: &mut W) -> Result<(), Self::Error> {
        write!(w, "{}", display(account))?;
        Ok(())
    }
}
