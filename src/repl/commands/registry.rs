//! # Command Registry
//!
//! Splits a prompt line into a command word and its arguments, then hands it
//! to the first registered command that can handle the word.

use anyhow::Result;
use regex::Regex;
use std::sync::{Arc, OnceLock};

use super::directory::{
    AllCommand, DirectoryCommand, FilterCommand, HelpCommand, LetterCommand, OpenCommand,
    OptionsCommand, QuitCommand, SearchCommand, SortCommand,
};
use super::CommandEvent;

type CommandArc = Arc<dyn DirectoryCommand>;

fn line_pattern() -> Result<&'static Regex> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\s*(\S+)\s*(.*?)\s*$"))
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Invalid command pattern: {e}"))
}

pub struct CommandRegistry {
    commands: Vec<CommandArc>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.add_command(Arc::new(LetterCommand));
        self.add_command(Arc::new(AllCommand));
        self.add_command(Arc::new(SearchCommand));
        self.add_command(Arc::new(SortCommand));
        self.add_command(Arc::new(FilterCommand));
        self.add_command(Arc::new(OpenCommand));
        self.add_command(Arc::new(OptionsCommand));
        self.add_command(Arc::new(HelpCommand));
        self.add_command(Arc::new(QuitCommand));
    }

    pub fn add_command(&mut self, command: CommandArc) {
        self.commands.push(command);
    }

    /// Parse one prompt line into events
    ///
    /// Blank lines produce no events. Unknown words are an error.
    pub fn process_line(&self, line: &str) -> Result<Vec<CommandEvent>> {
        let Some(captures) = line_pattern()?.captures(line) else {
            return Ok(Vec::new());
        };

        let raw_word = captures.get(1).map_or("", |m| m.as_str());
        let args = captures.get(2).map_or("", |m| m.as_str());
        let word = if raw_word.starts_with('/') {
            raw_word.to_string()
        } else {
            raw_word.to_lowercase()
        };

        for command in &self.commands {
            if command.can_handle(&word) {
                tracing::debug!("Command {} handles '{}'", command.name(), line.trim());
                return command.execute(&word, args);
            }
        }

        Err(anyhow::anyhow!(
            "Unknown command '{raw_word}'. Type 'help' for a list of commands"
        ))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
