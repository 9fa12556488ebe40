//! Parsing of the line-oriented commands typed at the prompt.

use std::str::FromStr;

use petstore_core::{PetStatus, Screen};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  pets | categories            switch screen
  status <available|pending|sold|all>
  edit <id> | add              open an overlay
  set name <text>
  set status <available|pending|sold|none>
  set category <id|none>
  photo add <url> | photo set <index> <url> | photo rm <index>
  submit | cancel
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(Screen),
    Filter(Option<PetStatus>),
    Edit(i64),
    Add,
    SetName(String),
    SetStatus(Option<PetStatus>),
    SetCategory(Option<i64>),
    PhotoAdd(String),
    PhotoSet(usize, String),
    PhotoRemove(usize),
    Submit,
    Cancel,
    Render,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Status(#[from] petstore_core::ParseStatusError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = split_word(line);
        match head {
            "pets" => Ok(Command::Show(Screen::Pets)),
            "categories" => Ok(Command::Show(Screen::Categories)),
            "status" => Ok(Command::Filter(optional_status(rest, "all", "status <available|pending|sold|all>")?)),
            "edit" => Ok(Command::Edit(number(required(rest, "edit <id>")?)?)),
            "add" => Ok(Command::Add),
            "set" => parse_set(rest),
            "photo" => parse_photo(rest),
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "show" => Ok(Command::Render),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_set(args: &str) -> Result<Command, CommandError> {
    let (field, value) = split_word(args);
    match field {
        "name" => Ok(Command::SetName(required(value, "set name <text>")?.to_string())),
        "status" => Ok(Command::SetStatus(optional_status(
            value,
            "none",
            "set status <available|pending|sold|none>",
        )?)),
        "category" => {
            let value = required(value, "set category <id|none>")?;
            if value == "none" {
                Ok(Command::SetCategory(None))
            } else {
                Ok(Command::SetCategory(Some(number(value)?)))
            }
        }
        _ => Err(CommandError::Usage("set <name|status|category> <value>")),
    }
}

fn parse_photo(args: &str) -> Result<Command, CommandError> {
    let (action, rest) = split_word(args);
    match action {
        "add" => Ok(Command::PhotoAdd(required(rest, "photo add <url>")?.to_string())),
        "set" => {
            let (index, url) = split_word(rest);
            let index = number(required(index, "photo set <index> <url>")?)?;
            Ok(Command::PhotoSet(index, required(url, "photo set <index> <url>")?.to_string()))
        }
        "rm" | "remove" => Ok(Command::PhotoRemove(number(required(rest, "photo rm <index>")?)?)),
        _ => Err(CommandError::Usage("photo <add|set|rm> ...")),
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

fn required<'a>(value: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(value)
    }
}

fn number<T: FromStr>(value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::NotANumber(value.to_string()))
}

fn optional_status(value: &str, none: &str, usage: &'static str) -> Result<Option<PetStatus>, CommandError> {
    let value = required(value, usage)?;
    if value.eq_ignore_ascii_case(none) {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}
