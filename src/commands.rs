use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::Error;
use crate::hasher;
use crate::types::{
    CostOutcome, ErrorOutcome, HashOutcome, NothingOutcome, Variant, VerifyOutcome,
};

pub const NOTHING_MESSAGE: &str = "Nothing to do. Exit";
pub const MATCHED_MESSAGE: &str = "Matched hash and pass";

/// The single operation an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Nothing,
    Verify { password: &'a str, hash: &'a str },
    Hash { password: &'a str, cost: u32, variant: Variant },
    Cost { hash: &'a str },
}

impl<'a> Action<'a> {
    /// Pick the action from which inputs are present. Empty strings count as absent.
    pub fn select(
        password: Option<&'a str>,
        hash: Option<&'a str>,
        cost: u32,
        variant: Variant,
    ) -> Self {
        let password = password.filter(|p| !p.is_empty());
        let hash = hash.filter(|h| !h.is_empty());

        match (password, hash) {
            (None, None) => Action::Nothing,
            (Some(password), Some(hash)) => Action::Verify { password, hash },
            (Some(password), None) => Action::Hash {
                password,
                cost,
                variant,
            },
            (None, Some(hash)) => Action::Cost { hash },
        }
    }

    pub fn from_cli(cli: &'a Cli) -> Self {
        Self::select(
            cli.pass.as_deref(),
            cli.hash.as_deref(),
            cli.cost,
            cli.variant.into(),
        )
    }

    fn name(&self) -> &'static str {
        match self {
            Action::Nothing => "nothing",
            Action::Verify { .. } => "verify",
            Action::Hash { .. } => "hash",
            Action::Cost { .. } => "cost",
        }
    }
}

/// Write `data` as pretty JSON if `json` is true, otherwise call `human_fmt`.
fn output<T: Serialize, W: Write>(
    out: &mut W,
    data: &T,
    json: bool,
    human_fmt: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> io::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(data).map_err(io::Error::from)?;
        writeln!(out, "{text}")
    } else {
        human_fmt(out, data)
    }
}

/// Run the action selected by the parsed command line.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Error> {
    execute(Action::from_cli(cli), cli.json, out)
}

/// Perform `action` and write its success rendering to `out`.
pub fn execute<W: Write>(action: Action<'_>, json: bool, out: &mut W) -> Result<(), Error> {
    debug!(action = action.name(), "dispatching");

    match action {
        Action::Nothing => {
            let outcome = NothingOutcome {
                message: NOTHING_MESSAGE.to_string(),
            };
            output(out, &outcome, json, |w, o| writeln!(w, "{}", o.message))?;
        }
        Action::Verify { password, hash } => {
            hasher::verify_password(password, hash)?;
            let outcome = VerifyOutcome { matched: true };
            output(out, &outcome, json, |w, _| writeln!(w, "{MATCHED_MESSAGE}"))?;
        }
        Action::Hash {
            password,
            cost,
            variant,
        } => {
            let cost = hasher::effective_cost(cost)?;
            let outcome = HashOutcome {
                hash: hasher::hash_password(password, cost, variant)?,
                cost,
                variant,
            };
            output(out, &outcome, json, |w, o| writeln!(w, "{}", o.hash))?;
        }
        Action::Cost { hash } => {
            let outcome = CostOutcome {
                cost: hasher::hash_cost(hash)?,
            };
            output(out, &outcome, json, |w, o| writeln!(w, "Cost is: {}", o.cost))?;
        }
    }

    Ok(())
}

/// Write the failure rendering of `err` to `out`.
pub fn report_error<W: Write>(err: &Error, json: bool, out: &mut W) -> io::Result<()> {
    let outcome = ErrorOutcome {
        error: err.to_string(),
        kind: err.kind(),
    };
    output(out, &outcome, json, |w, o| writeln!(w, "{}", o.error))
}
