//! Controller commands and their text form for the interactive prompt

use rust_decimal::Decimal;
use std::str::FromStr;
use crate::{
    errors::DashboardError,
    types::{SortDirection, SortKey, Theme},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    Periodic,
    Manual,
    /// Requested while another fetch was running
    Queued,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh(RefreshTrigger),
    SetQuery(String),
    SetSort(SortKey, SortDirection),
    ToggleSort(SortKey),
    SetFeeRate(Decimal),
    SetInvestment(Decimal),
    SetTheme(Theme),
    ToggleTheme,
    Shutdown,
}

pub const COMMAND_HELP: &str = "commands: refresh | search [text] | sort <buy|sell|spread|profit> [asc|desc] \
| fee <pct> | invest <usd> | theme [light|dark] | quit";

impl FromStr for Command {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let line = input.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "refresh" | "r" => Ok(Command::Refresh(RefreshTrigger::Manual)),
            "search" | "s" | "/" => Ok(Command::SetQuery(rest.to_string())),
            "sort" => parse_sort(line, rest),
            "fee" => parse_amount(line, rest).map(Command::SetFeeRate),
            "invest" | "investment" => parse_amount(line, rest).map(Command::SetInvestment),
            "theme" if rest.is_empty() => Ok(Command::ToggleTheme),
            "theme" => rest
                .parse()
                .map(Command::SetTheme)
                .map_err(|reason: String| DashboardError::invalid_command(line, reason)),
            "quit" | "q" | "exit" => Ok(Command::Shutdown),
            "" => Err(DashboardError::invalid_command(line, "empty command")),
            other => Err(DashboardError::invalid_command(
                line,
                format!("unknown command '{}'", other),
            )),
        }
    }
}

fn parse_sort(line: &str, rest: &str) -> Result<Command, DashboardError> {
    let mut parts = rest.split_whitespace();
    let key: SortKey = parts
        .next()
        .ok_or_else(|| DashboardError::invalid_command(line, "missing sort field"))?
        .parse()
        .map_err(|reason: String| DashboardError::invalid_command(line, reason))?;

    match parts.next() {
        Some(direction) => direction
            .parse()
            .map(|direction| Command::SetSort(key, direction))
            .map_err(|reason: String| DashboardError::invalid_command(line, reason)),
        None => Ok(Command::ToggleSort(key)),
    }
}

fn parse_amount(line: &str, rest: &str) -> Result<Decimal, DashboardError> {
    let cleaned: String = rest
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ',' | '_'))
        .collect();

    let amount = Decimal::from_str(cleaned.trim())
        .map_err(|_| DashboardError::invalid_command(line, "expected a number"))?;

    if amount.is_sign_negative() {
        return Err(DashboardError::invalid_command(line, "value must not be negative"));
    }
    Ok(amount)
}
