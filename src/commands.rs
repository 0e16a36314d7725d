//! Line commands accepted by the terminal front end.
//!
//! Each line maps to one user action on the page: typing in the search box,
//! choosing a sort option, ticking "In stock", or clicking a basket button.

use std::str::FromStr;

use thiserror::Error;

use crate::catalog::SortKey;
use crate::model::ProductId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the search term. An empty term clears the filter.
    Search(String),
    Sort(SortKey),
    Stock(bool),
    Add(ProductId),
    Remove(ProductId),
    /// Show one product's details, including its image file.
    Show(ProductId),
    List,
    Basket,
    Sorts,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid argument for `{command}`: `{value}`")]
    InvalidArgument { command: &'static str, value: String },
}

pub const HELP: &str = "\
commands:
  search [text]     filter by name (no text clears the search)
  sort <key>        AtoZ ZtoA £LtoH £HtoL *LtoH *HtoL, or name_asc .. rating_desc
  stock on|off      only show products in stock
  add <id>          add one unit to the basket
  remove <id>       remove one unit from the basket
  show <id>         show a product's details and image file
  list              show the visible products
  basket            show the basket
  sorts             show the sort options
  help              show this text
  quit              end the session";

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "sort" => {
                let value = required("sort", "a sort key", rest)?;
                value
                    .parse()
                    .map(Command::Sort)
                    .map_err(|_| invalid("sort", value))
            }
            "stock" => match required("stock", "on or off", rest)?.to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" => Ok(Command::Stock(true)),
                "off" | "false" | "no" => Ok(Command::Stock(false)),
                _ => Err(invalid("stock", rest)),
            },
            "add" => parse_product_id("add", rest).map(Command::Add),
            "remove" | "rm" => parse_product_id("remove", rest).map(Command::Remove),
            "show" => parse_product_id("show", rest).map(Command::Show),
            "list" | "ls" => Ok(Command::List),
            "basket" => Ok(Command::Basket),
            "sorts" => Ok(Command::Sorts),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Command::parse(value)
    }
}

fn required<'a>(
    command: &'static str,
    expected: &'static str,
    value: &'a str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(value)
    }
}

fn invalid(command: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}

fn parse_product_id(command: &'static str, value: &str) -> Result<ProductId, CommandError> {
    let value = required(command, "a product id", value)?;
    value
        .parse::<u32>()
        .map(ProductId)
        .map_err(|_| invalid(command, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("search  desk lamp "),
            Ok(Command::Search("desk lamp".to_string()))
        );
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn sort_accepts_every_menu_code() {
        for key in SortKey::ALL {
            let line = format!("sort {}", key.code());
            assert_eq!(Command::parse(&line), Ok(Command::Sort(key)));
        }
        assert_eq!(
            Command::parse("SORT rating_desc"),
            Ok(Command::Sort(SortKey::RatingDesc))
        );
    }

    #[test]
    fn basket_commands_take_numeric_ids() {
        assert_eq!(Command::parse("add 3"), Ok(Command::Add(ProductId(3))));
        assert_eq!(Command::parse("rm 12"), Ok(Command::Remove(ProductId(12))));
        assert_eq!(Command::parse("show 5"), Ok(Command::Show(ProductId(5))));
        assert_eq!(
            Command::parse("add apple"),
            Err(CommandError::InvalidArgument {
                command: "add",
                value: "apple".to_string()
            })
        );
        assert_eq!(
            Command::parse("remove"),
            Err(CommandError::MissingArgument {
                command: "remove",
                expected: "a product id"
            })
        );
    }

    #[test]
    fn stock_toggle() {
        assert_eq!(Command::parse("stock on"), Ok(Command::Stock(true)));
        assert_eq!(Command::parse("stock OFF"), Ok(Command::Stock(false)));
        assert!(matches!(
            Command::parse("stock maybe"),
            Err(CommandError::InvalidArgument { command: "stock", .. })
        ));
    }

    #[test]
    fn rejects_blank_and_unknown_lines() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("checkout now"),
            Err(CommandError::Unknown("checkout".to_string()))
        );
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }
}
