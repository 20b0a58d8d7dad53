//! CLI for the SaaS admin backend
//!
//! - `serve`: run the HTTP server
//! - `promote-super-admin`: grant the super-admin role to a user

pub mod promote;
pub mod serve;

use clap::{Parser, Subcommand};

/// SaaS Admin API - super-admin backend
#[derive(Parser)]
#[command(name = "saas-admin-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Grant the super-admin global role, creating the user record if needed
    PromoteSuperAdmin(promote::PromoteArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["saas-admin-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_promote() {
        let cli =
            Cli::try_parse_from(["saas-admin-api", "promote-super-admin", "sub-123"]).unwrap();

        match cli.command {
            Command::PromoteSuperAdmin(args) => assert_eq!(args.user_id, "sub-123"),
            Command::Serve => panic!("expected promote-super-admin"),
        }
    }

    #[test]
    fn test_promote_requires_user_id() {
        assert!(Cli::try_parse_from(["saas-admin-api", "promote-super-admin"]).is_err());
    }
}
