//! # Directory Commands
//!
//! Prompt commands mapping the directory's controls (letter buttons, search
//! bar, sort and filter selectors) to command events.

use anyhow::Result;

use crate::repl::commands::CommandEvent;
use crate::repl::models::{FilterDimension, SortDirection, SortField};

/// Trait for prompt commands
pub trait DirectoryCommand: Send {
    /// Check if this command handles the given command word
    fn can_handle(&self, word: &str) -> bool;

    /// Execute the command with the remaining text and produce events
    fn execute(&self, word: &str, args: &str) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging
    fn name(&self) -> &'static str;
}

/// Single letter `A`..`Z`
pub struct LetterCommand;

impl DirectoryCommand for LetterCommand {
    fn can_handle(&self, word: &str) -> bool {
        let mut chars = word.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
    }

    fn execute(&self, word: &str, args: &str) -> Result<Vec<CommandEvent>> {
        if !args.is_empty() {
            return Err(anyhow::anyhow!("A letter takes no arguments"));
        }
        let letter = word
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or_else(|| anyhow::anyhow!("Missing letter"))?;
        Ok(vec![CommandEvent::LetterRequested { letter }])
    }

    fn name(&self) -> &'static str {
        "LetterCommand"
    }
}

/// `all`
pub struct AllCommand;

impl DirectoryCommand for AllCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "all"
    }

    fn execute(&self, _word: &str, _args: &str) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::AllRequested])
    }

    fn name(&self) -> &'static str {
        "AllCommand"
    }
}

/// `search <text>` or `/<text>`
pub struct SearchCommand;

impl DirectoryCommand for SearchCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "search" || word.starts_with('/')
    }

    fn execute(&self, word: &str, args: &str) -> Result<Vec<CommandEvent>> {
        let text = match word.strip_prefix('/') {
            Some(rest) if args.is_empty() => rest.to_string(),
            Some(rest) => format!("{rest} {args}"),
            None => args.to_string(),
        };
        Ok(vec![CommandEvent::SearchRequested {
            text: text.trim().to_string(),
        }])
    }

    fn name(&self) -> &'static str {
        "SearchCommand"
    }
}

/// `sort <field>` (a direction is accepted too), `asc`, `desc`
pub struct SortCommand;

impl DirectoryCommand for SortCommand {
    fn can_handle(&self, word: &str) -> bool {
        matches!(word, "sort" | "asc" | "desc" | "ascending" | "descending")
    }

    fn execute(&self, word: &str, args: &str) -> Result<Vec<CommandEvent>> {
        if word != "sort" {
            return Ok(vec![CommandEvent::SortDirectionRequested {
                direction: word.parse()?,
            }]);
        }

        if args.is_empty() {
            return Err(anyhow::anyhow!(
                "Usage: sort <name|capital|area|population> [asc|desc]"
            ));
        }

        let mut events = Vec::new();
        for token in args.split_whitespace() {
            if let Ok(direction) = token.parse::<SortDirection>() {
                events.push(CommandEvent::SortDirectionRequested { direction });
            } else {
                let field: SortField = token.parse()?;
                events.push(CommandEvent::SortFieldRequested { field });
            }
        }
        Ok(events)
    }

    fn name(&self) -> &'static str {
        "SortCommand"
    }
}

/// `filter on|off`, `filter by <dimension>`, `filter value <value>`
pub struct FilterCommand;

impl DirectoryCommand for FilterCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "filter"
    }

    fn execute(&self, _word: &str, args: &str) -> Result<Vec<CommandEvent>> {
        let (sub, rest) = match args.split_once(char::is_whitespace) {
            Some((sub, rest)) => (sub, rest.trim()),
            None => (args, ""),
        };

        match sub.to_lowercase().as_str() {
            "on" => Ok(vec![CommandEvent::FilterToggleRequested { enabled: true }]),
            "off" => Ok(vec![CommandEvent::FilterToggleRequested { enabled: false }]),
            "by" if !rest.is_empty() => Ok(vec![CommandEvent::FilterDimensionRequested {
                dimension: rest.parse()?,
            }]),
            "value" if !rest.is_empty() => Ok(vec![CommandEvent::FilterValueRequested {
                value: unquote(rest).to_string(),
            }]),
            _ => Err(anyhow::anyhow!(
                "Usage: filter on|off, filter by <language|continent|region>, filter value <value>"
            )),
        }
    }

    fn name(&self) -> &'static str {
        "FilterCommand"
    }
}

/// `open <n>`, following the map link of card n
pub struct OpenCommand;

impl DirectoryCommand for OpenCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "open" || word == "map"
    }

    fn execute(&self, _word: &str, args: &str) -> Result<Vec<CommandEvent>> {
        let position = args
            .parse::<usize>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| anyhow::anyhow!("Usage: open <card number>"))?;
        Ok(vec![CommandEvent::MapLinkRequested { position }])
    }

    fn name(&self) -> &'static str {
        "OpenCommand"
    }
}

/// `options [dimension]`
pub struct OptionsCommand;

impl DirectoryCommand for OptionsCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "options"
    }

    fn execute(&self, _word: &str, args: &str) -> Result<Vec<CommandEvent>> {
        let dimension = if args.is_empty() {
            None
        } else {
            Some(args.parse()?)
        };
        Ok(vec![CommandEvent::OptionsRequested { dimension }])
    }

    fn name(&self) -> &'static str {
        "OptionsCommand"
    }
}

/// `help`, `?`
pub struct HelpCommand;

impl DirectoryCommand for HelpCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "help" || word == "?"
    }

    fn execute(&self, _word: &str, _args: &str) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::HelpRequested])
    }

    fn name(&self) -> &'static str {
        "HelpCommand"
    }
}

/// `quit`, `exit`
pub struct QuitCommand;

impl DirectoryCommand for QuitCommand {
    fn can_handle(&self, word: &str) -> bool {
        word == "quit" || word == "exit"
    }

    fn execute(&self, _word: &str, _args: &str) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "QuitCommand"
    }
}

fn unquote(text: &str) -> &str {
    let text = text.trim();
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_command_should_uppercase() {
        let events = LetterCommand.execute("b", "").unwrap();
        assert_eq!(events, vec![CommandEvent::LetterRequested { letter: 'B' }]);
        assert!(!LetterCommand.can_handle("ab"));
        assert!(!LetterCommand.can_handle("1"));
    }

    #[test]
    fn search_command_should_accept_slash_form() {
        assert_eq!(
            SearchCommand.execute("/new", "zealand").unwrap(),
            vec![CommandEvent::SearchRequested {
                text: "new zealand".to_string()
            }]
        );
        assert_eq!(
            SearchCommand.execute("search", "").unwrap(),
            vec![CommandEvent::SearchRequested {
                text: String::new()
            }]
        );
    }

    #[test]
    fn sort_command_should_accept_field_and_direction() {
        let events = SortCommand.execute("sort", "population desc").unwrap();
        assert_eq!(
            events,
            vec![
                CommandEvent::SortFieldRequested {
                    field: SortField::Population
                },
                CommandEvent::SortDirectionRequested {
                    direction: SortDirection::Descending
                },
            ]
        );
        assert!(SortCommand.execute("sort", "").is_err());
        assert!(SortCommand.execute("sort", "height").is_err());
    }

    #[test]
    fn filter_command_should_parse_subcommands() {
        assert_eq!(
            FilterCommand.execute("filter", "on").unwrap(),
            vec![CommandEvent::FilterToggleRequested { enabled: true }]
        );
        assert_eq!(
            FilterCommand.execute("filter", "by region").unwrap(),
            vec![CommandEvent::FilterDimensionRequested {
                dimension: FilterDimension::Region
            }]
        );
        assert_eq!(
            FilterCommand.execute("filter", "value \"Western Europe\"").unwrap(),
            vec![CommandEvent::FilterValueRequested {
                value: "Western Europe".to_string()
            }]
        );
        assert!(FilterCommand.execute("filter", "value").is_err());
        assert!(FilterCommand.execute("filter", "sideways").is_err());
    }

    #[test]
    fn open_command_should_require_positive_number() {
        assert_eq!(
            OpenCommand.execute("open", "2").unwrap(),
            vec![CommandEvent::MapLinkRequested { position: 2 }]
        );
        assert!(OpenCommand.execute("open", "0").is_err());
        assert!(OpenCommand.execute("open", "x").is_err());
    }

    #[test]
    fn unquote_should_strip_matching_quotes_only() {
        assert_eq!(unquote("'Asia'"), "Asia");
        assert_eq!(unquote("\"Asia"), "\"Asia");
        assert_eq!(unquote("Asia"), "Asia");
    }
}
