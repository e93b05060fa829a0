//! # View Layer for REPL Architecture
//!
//! Views are responsible for rendering and handling terminal display.
//! They react to view events and write the directory to a render stream.

use crate::repl::events::ViewEvent;
use crate::repl::io::RenderStream;
use crate::repl::models::FilterDimension;
use crate::repl::view_models::ViewModel;
use crate::repl::views::card_view;
use anyhow::Result;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! execute_term {
    ($($arg:expr),* $(,)?) => {
        execute!($($arg),*).map_err(anyhow::Error::from)
    };
}

use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

/// Shown in place of cards when the displayed set is empty
pub const EMPTY_STATE_MESSAGE: &str = "No countries match your search.";

/// Shown while a fetch is pending
pub const LOADING_MESSAGE: &str = "Loading...";

/// Prompt written before each input line
pub const PROMPT: &str = "countryline> ";

const HELP_LINES: [(&str, &str); 12] = [
    ("A-Z", "Countries whose name starts with the letter"),
    ("all", "Every country"),
    ("search <text> | /<text>", "Search by name, capital, language and more"),
    ("sort <field> [asc|desc]", "Sort by name, capital, area or population"),
    ("asc | desc", "Change the sort direction"),
    ("filter on | off", "Enable or disable the filter"),
    ("filter by <dimension>", "Filter by language, continent or region"),
    ("filter value <value>", "Value of the active filter dimension"),
    ("options [dimension]", "List the available filter values"),
    ("open <n>", "Open the map link of card n"),
    ("help", "Show this reference"),
    ("quit", "Exit"),
];

/// Style of a written line
#[derive(Debug, Clone, Copy, PartialEq)]
enum LineStyle {
    Plain,
    Title,
    Dim,
    Notice,
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the output for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the displayed cards, or the empty state
    fn render_cards(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the loading indicator or the current status message
    fn render_status(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render taxonomy values for one dimension, or all of them
    fn render_options(
        &mut self,
        view_model: &ViewModel,
        dimension: Option<FilterDimension>,
    ) -> Result<()>;

    /// Render the command reference
    fn render_help(&mut self) -> Result<()>;

    /// Render the input prompt
    fn render_prompt(&mut self) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Cleanup output on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Line-oriented renderer writing to any render stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create new renderer with injected render stream
    pub fn with_render_stream(render_stream: RS) -> Self {
        Self { render_stream }
    }

    /// Get current terminal width, falling back to 80 columns
    pub fn terminal_width(&self) -> usize {
        self.render_stream
            .get_size()
            .map(|(width, _)| width as usize)
            .unwrap_or(80)
            .max(20)
    }

    fn write_line(&mut self, text: &str, style: LineStyle) -> Result<()> {
        if !self.render_stream.supports_color() || style == LineStyle::Plain {
            writeln!(self.render_stream, "{text}")?;
            return Ok(());
        }

        match style {
            LineStyle::Title => execute_term!(
                self.render_stream,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Cyan),
                Print(text),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print("\n")
            ),
            LineStyle::Dim => execute_term!(
                self.render_stream,
                SetForegroundColor(Color::DarkGrey),
                Print(text),
                ResetColor,
                Print("\n")
            ),
            LineStyle::Notice => execute_term!(
                self.render_stream,
                SetForegroundColor(Color::Yellow),
                Print(text),
                ResetColor,
                Print("\n")
            ),
            LineStyle::Plain => Ok(()),
        }
    }

    /// One-line description of the current sort and filter
    fn summary_line(view_model: &ViewModel) -> String {
        let count = view_model.cards().len();
        let noun = if count == 1 { "country" } else { "countries" };
        let filter = view_model.filter_selection();
        let filter_text = if filter.is_enabled() {
            format!(
                "filter: {} = {}",
                filter.dimension(),
                view_model.active_filter_value().unwrap_or("-")
            )
        } else {
            "filter: off".to_string()
        };

        format!(
            "{count} {noun} | sorted by {} ({}) | {filter_text}",
            view_model.sort_field(),
            view_model.sort_direction()
        )
    }

    /// Wrap comma-separated values to the terminal width
    fn wrap_values(values: &[String], width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::from("  ");

        for (i, value) in values.iter().enumerate() {
            let piece = if i + 1 < values.len() {
                format!("{value}, ")
            } else {
                value.clone()
            };
            if current.len() > 2 && current.len() + piece.trim_end().len() > width {
                lines.push(current.trim_end().to_string());
                current = String::from("  ");
            }
            current.push_str(&piece);
        }
        if current.len() > 2 {
            lines.push(current.trim_end().to_string());
        }
        lines
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.write_line("countryline: type 'help' for commands", LineStyle::Dim)?;
        self.render_stream.flush().map_err(anyhow::Error::from)
    }

    fn render_cards(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;

        if view_model.cards().is_empty() {
            self.write_line(EMPTY_STATE_MESSAGE, LineStyle::Notice)?;
            return self.render_stream.flush().map_err(anyhow::Error::from);
        }

        for (index, card) in view_model.cards().iter().enumerate() {
            let position = index + 1;
            if view_model.is_compact() {
                self.write_line(&card_view::compact_line(position, card), LineStyle::Plain)?;
                continue;
            }

            self.write_line(&card_view::title_line(position, card), LineStyle::Title)?;
            for line in card_view::detail_lines(card) {
                self.write_line(&line, LineStyle::Plain)?;
            }
            self.write_line("", LineStyle::Plain)?;
        }

        self.write_line(&Self::summary_line(view_model), LineStyle::Dim)?;
        self.render_stream.flush().map_err(anyhow::Error::from)
    }

    fn render_status(&mut self, view_model: &ViewModel) -> Result<()> {
        if view_model.is_loading() {
            self.write_line(LOADING_MESSAGE, LineStyle::Dim)?;
        } else if let Some(message) = view_model.status_message() {
            let message = message.to_string();
            self.write_line(&message, LineStyle::Notice)?;
        }
        self.render_stream.flush().map_err(anyhow::Error::from)
    }

    fn render_options(
        &mut self,
        view_model: &ViewModel,
        dimension: Option<FilterDimension>,
    ) -> Result<()> {
        let Some(taxonomy) = view_model.taxonomy() else {
            self.write_line("Filter options are not loaded yet", LineStyle::Notice)?;
            return Ok(());
        };

        let dimensions: Vec<FilterDimension> = match dimension {
            Some(dimension) => vec![dimension],
            None => FilterDimension::ALL.to_vec(),
        };
        let width = self.terminal_width();
        let active = view_model.filter_selection().dimension();

        for dimension in dimensions {
            let values = taxonomy.values(dimension);
            let mut header = format!("{} options ({}):", dimension, values.len());
            if dimension == active {
                if let Some(value) = view_model.active_filter_value() {
                    header.push_str(&format!(" selected {value}"));
                }
            }
            self.write_line(&header, LineStyle::Title)?;
            for line in Self::wrap_values(values, width) {
                self.write_line(&line, LineStyle::Plain)?;
            }
        }
        self.render_stream.flush().map_err(anyhow::Error::from)
    }

    fn render_help(&mut self) -> Result<()> {
        let width = HELP_LINES
            .iter()
            .map(|(usage, _)| usage.len())
            .max()
            .unwrap_or(0);

        self.write_line("Commands:", LineStyle::Title)?;
        for (usage, description) in HELP_LINES {
            self.write_line(
                &format!("  {usage:<width$}  {description}"),
                LineStyle::Plain,
            )?;
        }
        self.render_stream.flush().map_err(anyhow::Error::from)
    }

    fn render_prompt(&mut self) -> Result<()> {
        write!(self.render_stream, "{PROMPT}")?;
        self.render_stream.flush().map_err(anyhow::Error::from)
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::CardsReplaced | ViewEvent::CardsReordered => {
                self.render_cards(view_model)?;
            }
            ViewEvent::StatusUpdateRequired => {
                self.render_status(view_model)?;
            }
            ViewEvent::OptionsRequested { dimension } => {
                self.render_options(view_model, *dimension)?;
            }
            ViewEvent::HelpRequested => {
                self.render_help()?;
            }
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        writeln!(self.render_stream)?;
        self.render_stream.flush().map_err(anyhow::Error::from)
    }
}
