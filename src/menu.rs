//! Interactive menu front-end
//!
//! Presents a numbered menu (1=bonds, 2=forex, 3=stocks, 4=exit), reads a
//! choice from stdin, fetches the matching listing directly from the
//! provider (no caching in this front-end), and prints a plain-text
//! table. Invalid input redisplays the menu without side effects; a
//! failed fetch prints a notice and the loop survives.

use std::io::{self, Write};

use crate::config::Settings;
use crate::data::bonds::CLI_BOND_LIMIT;
use crate::data::{BondsClient, ForexClient, StocksClient, TableRow};
use crate::table::render_table;

/// A valid menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Bonds,
    Forex,
    Stocks,
    Exit,
}

/// Parses a menu input line into a choice
///
/// Returns `None` for anything other than 1-4; the caller prints an
/// invalid-input message and shows the menu again.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim() {
        "1" => Some(Choice::Bonds),
        "2" => Some(Choice::Forex),
        "3" => Some(Choice::Stocks),
        "4" => Some(Choice::Exit),
        _ => None,
    }
}

/// Interactive menu over the per-category clients
pub struct Menu {
    settings: Settings,
}

impl Menu {
    /// Creates a menu using the given environment settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs the menu loop until the user chooses to exit
    pub async fn run(&self) -> io::Result<()> {
        println!("Welcome to InvestIQ CLI - Financial Market Insights");

        loop {
            println!("\nChoose an option:");
            println!("1. View Bond Market Data");
            println!("2. View Forex Rates");
            println!("3. View Stock Quotes");
            println!("4. Exit");

            let line = prompt("Enter your choice (1-4): ")?;
            match parse_choice(&line) {
                Some(Choice::Bonds) => self.show_bonds().await?,
                Some(Choice::Forex) => self.show_forex().await,
                Some(Choice::Stocks) => self.show_stocks().await?,
                Some(Choice::Exit) => {
                    println!("Exiting InvestIQ CLI. Goodbye!");
                    return Ok(());
                }
                None => println!("Invalid input. Please try again."),
            }
        }
    }

    /// Prompts for a bond type and prints the bond table
    async fn show_bonds(&self) -> io::Result<()> {
        let key = match self.settings.require_rapid_api_key() {
            Ok(key) => key,
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        };
        let host = match self.settings.require_rapid_api_host() {
            Ok(host) => host,
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        };

        let bond_type =
            prompt("Enter a bond type (e.g. CB, SGB, GS, Tbill, MF, ETF): ")?.to_uppercase();

        println!("\nFetching Government Bond Market Data...");
        let client = BondsClient::new(key, host);
        match client.fetch_bonds(&bond_type, CLI_BOND_LIMIT).await {
            Ok(rows) => print_rows(&rows),
            Err(e) => {
                tracing::warn!(error = %e, %bond_type, "bond fetch failed");
                println!("Failed to fetch bond data.");
            }
        }
        Ok(())
    }

    /// Prints the forex table
    async fn show_forex(&self) {
        let key = match self.settings.require_fmp_api_key() {
            Ok(key) => key,
            Err(e) => {
                println!("{e}");
                return;
            }
        };

        println!("\nFetching Forex Exchange Rates...");
        let client = ForexClient::new(key);
        match client.fetch_forex().await {
            Ok(rows) => print_rows(&rows),
            Err(e) => {
                tracing::warn!(error = %e, "forex fetch failed");
                println!("Failed to fetch forex data.");
            }
        }
    }

    /// Prompts for symbols and prints the stock table
    async fn show_stocks(&self) -> io::Result<()> {
        let key = match self.settings.require_fmp_api_key() {
            Ok(key) => key,
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        };

        let raw = prompt("Enter comma-separated stock symbols (e.g. AAPL,MSFT): ")?;
        let symbols = StocksClient::parse_symbols(&raw);
        if symbols.is_empty() {
            println!("No symbols entered.");
            return Ok(());
        }

        println!("\nFetching Stock Quotes...");
        let client = StocksClient::new(key);
        match client.fetch_stocks(&symbols).await {
            Ok(rows) => print_rows(&rows),
            Err(e) => {
                tracing::warn!(error = %e, symbols = %symbols.join(","), "stock fetch failed");
                println!("Failed to fetch stock data.");
            }
        }
        Ok(())
    }
}

/// Prints a row table, or a notice when the listing came back empty
fn print_rows<R: TableRow>(rows: &[R]) {
    if rows.is_empty() {
        println!("No data returned.");
    } else {
        println!("{}", render_table(rows));
    }
}

/// Writes a prompt label and reads one trimmed line from stdin
///
/// A closed stdin is an error rather than an empty line, so the menu
/// loop terminates instead of spinning on EOF.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}
