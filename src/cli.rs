use clap::{ArgAction, Parser, ValueEnum};

use crate::hasher::DEFAULT_COST;
use crate::types::Variant;

#[derive(Debug, Parser)]
#[command(name = "bcrypt-cli")]
#[command(about = "Hash a password, verify it against a bcrypt hash, or read a hash's cost.")]
#[command(version)]
// `-h` belongs to --hash, so help is long-only.
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Set bcrypt cost
    #[arg(short, long, default_value_t = DEFAULT_COST)]
    pub cost: u32,

    /// Password to hash, or to verify when --hash is also given
    #[arg(short, long)]
    pub pass: Option<String>,

    /// Hash to validate the password against, or to read the cost of
    #[arg(short = 'h', long)]
    pub hash: Option<String>,

    /// Version prefix of generated hashes
    #[arg(long, value_enum, default_value_t = VariantArg::TwoA)]
    pub variant: VariantArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Hash prefix choices for the `--variant` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    #[value(name = "2a")]
    TwoA,
    #[value(name = "2b")]
    TwoB,
    #[value(name = "2x")]
    TwoX,
    #[value(name = "2y")]
    TwoY,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::TwoA => Variant::TwoA,
            VariantArg::TwoB => Variant::TwoB,
            VariantArg::TwoX => Variant::TwoX,
            VariantArg::TwoY => Variant::TwoY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bcrypt-cli"]).unwrap();
        assert_eq!(cli.cost, 10);
        assert!(cli.pass.is_none());
        assert!(cli.hash.is_none());
        assert_eq!(cli.variant, VariantArg::TwoA);
        assert!(!cli.json);
    }

    #[test]
    fn test_short_h_is_hash_not_help() {
        let cli = Cli::try_parse_from(["bcrypt-cli", "-h", "$2a$10$abc"]).unwrap();
        assert_eq!(cli.hash.as_deref(), Some("$2a$10$abc"));
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = Cli::try_parse_from(["bcrypt-cli", "-p", "testpassword", "-c", "12"]).unwrap();
        assert_eq!(cli.pass.as_deref(), Some("testpassword"));
        assert_eq!(cli.cost, 12);

        let cli = Cli::try_parse_from([
            "bcrypt-cli",
            "--pass",
            "x",
            "--hash",
            "y",
            "--cost",
            "5",
            "--variant",
            "2y",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.pass.as_deref(), Some("x"));
        assert_eq!(cli.hash.as_deref(), Some("y"));
        assert_eq!(cli.cost, 5);
        assert_eq!(cli.variant, VariantArg::TwoY);
        assert!(cli.json);
    }

    #[test]
    fn test_long_help_still_works() {
        let err = Cli::try_parse_from(["bcrypt-cli", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_rejects_non_numeric_cost() {
        assert!(Cli::try_parse_from(["bcrypt-cli", "-c", "ten"]).is_err());
        assert!(Cli::try_parse_from(["bcrypt-cli", "--variant", "3a"]).is_err());
    }

    #[test]
    fn test_parser_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
