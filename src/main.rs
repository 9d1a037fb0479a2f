use bank_account_core::BankAccount;
use bank_account_render::render;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn sample_account() -> BankAccount<'static> {
    BankAccount::builder(1)
        .with_owner("Merge")
        .at_branch("Springfield")
        .opening_balance(100.0)
        .at_rate(2.5)
        .build()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    render(out, &sample_account())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_logging();
    let stdout = io::stdout();
    if let Err(e) = run(&mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
