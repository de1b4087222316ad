//! Command-line argument parsing for InvestIQ
//!
//! Running with no subcommand starts the interactive menu; `serve`
//! starts the web front-end.

use clap::{Parser, Subcommand};

/// InvestIQ - bond, forex, and stock market data in your terminal or browser
#[derive(Parser, Debug)]
#[command(name = "investiq")]
#[command(about = "Financial market insights: bonds, forex, and stock quotes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web front-end instead of the interactive menu
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_selects_menu() {
        let cli = Cli::parse_from(["investiq"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_serve_default_port() {
        let cli = Cli::parse_from(["investiq", "serve"]);
        match cli.command {
            Some(Command::Serve { port }) => assert_eq!(port, 8080),
            other => panic!("expected serve command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_custom_port() {
        let cli = Cli::parse_from(["investiq", "serve", "--port", "9090"]);
        match cli.command {
            Some(Command::Serve { port }) => assert_eq!(port, 9090),
            other => panic!("expected serve command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["investiq", "frobnicate"]).is_err());
    }
}
