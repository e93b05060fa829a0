//! # REPL Application Controller
//!
//! The controller orchestrates the REPL components and manages the event loop.
//! It connects prompt input to commands, dispatches fetches as background
//! tasks and applies their results through the view model's generation guard.

use crate::cmd_args::CommandLineArgs;
use crate::repl::{
    commands::{CommandEvent, CommandRegistry},
    events::InputEvent,
    io::{EventStream, RenderStream},
    services::{CountrySource, LinkOpener, SearchResolver},
    view_models::{FetchOutcome, FetchRequest, ViewModel},
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{timeout, Instant};

/// How long one input poll may block before fetch results are drained
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound for `settle` to wait on outstanding fetches
const SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Capacity of the fetch outcome channel
const OUTCOME_CHANNEL_CAPACITY: usize = 16;

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<S: CountrySource, ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    resolver: SearchResolver<S>,
    link_opener: Box<dyn LinkOpener>,
    event_stream: ES,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
    current_request: FetchRequest,
    in_flight: usize,
    prompt_due: bool,
    input_closed: bool,
    should_quit: bool,
}

impl<S: CountrySource, ES: EventStream, RS: RenderStream> AppController<S, ES, RS> {
    /// Create new application controller with injected I/O streams (dependency injection)
    pub fn with_io_streams(
        cmd_args: &CommandLineArgs,
        source: S,
        event_stream: ES,
        render_stream: RS,
        link_opener: Box<dyn LinkOpener>,
    ) -> Self {
        let mut view_model = ViewModel::new();
        view_model.set_compact(cmd_args.compact());

        let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);

        Self {
            view_model,
            view_renderer: TerminalRenderer::with_render_stream(render_stream),
            command_registry: CommandRegistry::new(),
            resolver: SearchResolver::new(source),
            link_opener,
            event_stream,
            outcome_tx,
            outcome_rx,
            current_request: FetchRequest::Startup,
            in_flight: 0,
            prompt_due: false,
            input_closed: false,
            should_quit: false,
        }
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Number of dispatched fetches that have not reported back
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Initialize the output and dispatch the startup fetch
    pub fn start(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.start_fetch(FetchRequest::Startup);
        self.prompt_due = true;
        self.render_pending()
    }

    /// Run the main application loop
    ///
    /// Returns when the user quits, or when input is closed and every
    /// dispatched fetch has been applied.
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;

        while !self.should_quit {
            self.drain_outcomes()?;

            if self.input_closed {
                if self.in_flight == 0 {
                    break;
                }
                self.wait_for_outcome(POLL_INTERVAL).await?;
                continue;
            }

            if self.prompt_due {
                self.view_renderer.render_prompt()?;
                self.prompt_due = false;
            }

            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    InputEvent::Line(line) => {
                        tracing::debug!("Received input line: {:?}", line);
                        self.handle_line(&line)?;
                        self.prompt_due = true;
                    }
                    InputEvent::Closed => {
                        tracing::debug!("Input closed, {} fetches in flight", self.in_flight);
                        self.input_closed = true;
                    }
                }
            }
        }

        self.view_renderer.cleanup()
    }

    /// Parse and apply one prompt line, then render what changed
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        self.view_model.clear_status_message();

        match self.command_registry.process_line(line) {
            Ok(events) => {
                tracing::debug!("Command events generated: {:?}", events);
                for event in events {
                    self.apply_command_event(event);
                }
            }
            Err(e) => self.view_model.set_status_message(e.to_string()),
        }

        self.render_pending()
    }

    /// Wait until every dispatched fetch has reported back
    pub async fn settle(&mut self) -> Result<()> {
        let deadline = Instant::now() + SETTLE_TIMEOUT;

        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_for_outcome(remaining).await? {
                return Err(anyhow::anyhow!(
                    "Timed out waiting for {} fetches",
                    self.in_flight
                ));
            }
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::LetterRequested { letter } => {
                self.view_model.clear_search_text();
                self.start_fetch(FetchRequest::Letter { letter });
            }
            CommandEvent::AllRequested => {
                self.view_model.clear_search_text();
                self.start_fetch(FetchRequest::Search {
                    text: String::new(),
                });
            }
            CommandEvent::SearchRequested { text } => {
                self.view_model.set_search_text(&text);
                let text = self.view_model.search_text().to_string();
                self.start_fetch(FetchRequest::Search { text });
            }
            CommandEvent::SortFieldRequested { field } => {
                self.view_model.set_sort_field(field);
            }
            CommandEvent::SortDirectionRequested { direction } => {
                self.view_model.set_sort_direction(direction);
            }
            CommandEvent::FilterToggleRequested { enabled } => {
                self.view_model.set_filter_enabled(enabled);
                self.rerun_current_request();
            }
            CommandEvent::FilterDimensionRequested { dimension } => {
                self.view_model.set_filter_dimension(dimension);
                self.rerun_current_request();
            }
            CommandEvent::FilterValueRequested { value } => {
                match self.view_model.select_filter_value(&value) {
                    Ok(()) => self.rerun_current_request(),
                    Err(e) => self.view_model.set_status_message(e.to_string()),
                }
            }
            CommandEvent::MapLinkRequested { position } => {
                self.open_map_link(position);
            }
            CommandEvent::OptionsRequested { dimension } => {
                self.view_model.request_options(dimension);
            }
            CommandEvent::HelpRequested => {
                self.view_model.request_help();
            }
            CommandEvent::QuitRequested => {
                self.should_quit = true;
            }
        }
    }

    fn open_map_link(&mut self, position: usize) {
        let Some(card) = self.view_model.card_at(position) else {
            let count = self.view_model.cards().len();
            self.view_model
                .set_status_message(format!("No card at position {position} ({count} shown)"));
            return;
        };

        let name = card.record().common_name().to_string();
        let url = card.map_link.clone();
        match self.link_opener.open(&url) {
            Ok(()) => {
                tracing::info!("Opened map link for {}", name);
                self.view_model
                    .set_status_message(format!("Opened map of {name}: {url}"));
            }
            Err(e) => {
                tracing::warn!("Failed to open map link for {}: {}", name, e);
                self.view_model.set_status_message(e.to_string());
            }
        }
    }

    /// Repeat the most recent refetching request with the current filter
    fn rerun_current_request(&mut self) {
        let request = self.current_request.clone();
        self.start_fetch(request);
    }

    /// Dispatch a fetch as a background task tagged with a new generation
    fn start_fetch(&mut self, request: FetchRequest) {
        let generation = self.view_model.begin_fetch(&request);
        self.current_request = request.clone();
        self.in_flight += 1;

        let resolver = self.resolver.clone();
        let sender = self.outcome_tx.clone();

        tokio::spawn(async move {
            let result = match &request {
                FetchRequest::Startup | FetchRequest::Letter { .. } => {
                    resolver.resolve("").await
                }
                FetchRequest::Search { text } => resolver.resolve(text).await,
            };

            let outcome = FetchOutcome {
                generation,
                request,
                result,
            };
            if sender.send(outcome).await.is_err() {
                tracing::debug!("Controller gone, dropping generation {}", generation);
            }
        });
    }

    /// Apply every outcome that has already arrived
    fn drain_outcomes(&mut self) -> Result<()> {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.receive_outcome(outcome)?;
        }
        Ok(())
    }

    /// Wait up to `limit` for one outcome, returns false on timeout
    async fn wait_for_outcome(&mut self, limit: Duration) -> Result<bool> {
        match timeout(limit, self.outcome_rx.recv()).await {
            Ok(Some(outcome)) => {
                self.receive_outcome(outcome)?;
                Ok(true)
            }
            Ok(None) => Err(anyhow::anyhow!("Fetch result channel closed")),
            Err(_) => Ok(false),
        }
    }

    fn receive_outcome(&mut self, outcome: FetchOutcome) -> Result<()> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.view_model.apply_outcome(outcome) {
            self.prompt_due = true;
            self.render_pending()?;
        }
        Ok(())
    }

    /// Process pending view events for selective rendering
    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        for event in &view_events {
            self.view_renderer
                .handle_view_event(event, &self.view_model)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::events::ViewState;
    use crate::repl::io::{MockEventStream, MockRenderStream};
    use crate::repl::models::country::fixtures::country;
    use crate::repl::models::CountryRecord;
    use crate::repl::services::{DirectoryError, RecordingLinkOpener, ResourcePath};
    use std::future::Future;

    /// Source serving a fixed dataset for `all` and failing every lookup
    #[derive(Clone)]
    struct FixedSource {
        records: Vec<CountryRecord>,
    }

    impl CountrySource for FixedSource {
        fn fetch(
            &self,
            path: &ResourcePath,
        ) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send {
            let result: Result<Vec<CountryRecord>> = match path {
                ResourcePath::All => Ok(self.records.clone()),
                other => Err(DirectoryError::request(other.to_string(), Some(404), "Not Found").into()),
            };
            async move { result }
        }
    }

    fn controller(
        lines: &[&str],
    ) -> (
        AppController<FixedSource, MockEventStream, MockRenderStream>,
        MockRenderStream,
        RecordingLinkOpener,
    ) {
        let mut belgium = country("Belgium", "BE");
        belgium.maps.google_maps = "https://maps.example/be".to_string();
        let canada = country("Canada", "CA");
        let render_stream = MockRenderStream::new();
        let opener = RecordingLinkOpener::new();
        let args = CommandLineArgs::parse_from(["countryline"]);

        let app = AppController::with_io_streams(
            &args,
            FixedSource {
                records: vec![canada, belgium],
            },
            MockEventStream::new(lines.iter().copied()),
            render_stream.clone(),
            Box::new(opener.clone()),
        );
        (app, render_stream, opener)
    }

    #[tokio::test]
    async fn startup_should_display_every_country() {
        let (mut app, output, _) = controller(&[]);

        app.start().unwrap();
        app.settle().await.unwrap();

        assert_eq!(app.view_model().state(), ViewState::Idle);
        assert_eq!(app.view_model().cards().len(), 2);
        assert!(app.view_model().taxonomy().is_some());
        assert!(output.output().contains("[1] Belgium - BE"));
    }

    #[tokio::test]
    async fn open_should_pass_map_link_to_opener() {
        let (mut app, _, opener) = controller(&[]);
        app.start().unwrap();
        app.settle().await.unwrap();

        app.handle_line("open 1").unwrap();

        assert_eq!(opener.opened(), vec!["https://maps.example/be".to_string()]);
    }

    #[tokio::test]
    async fn open_out_of_range_should_show_message() {
        let (mut app, output, opener) = controller(&[]);
        app.start().unwrap();
        app.settle().await.unwrap();

        app.handle_line("open 9").unwrap();

        assert!(opener.opened().is_empty());
        assert!(output.output().contains("No card at position 9 (2 shown)"));
    }

    #[tokio::test]
    async fn unknown_command_should_not_change_state() {
        let (mut app, output, _) = controller(&[]);
        app.start().unwrap();
        app.settle().await.unwrap();
        let generation = app.view_model().generation();

        app.handle_line("frobnicate").unwrap();

        assert_eq!(app.view_model().generation(), generation);
        assert_eq!(app.view_model().state(), ViewState::Idle);
        assert!(output.output().contains("Unknown command 'frobnicate'"));
    }

    #[tokio::test]
    async fn filter_value_outside_taxonomy_should_not_refetch() {
        let (mut app, _, _) = controller(&[]);
        app.start().unwrap();
        app.settle().await.unwrap();
        let generation = app.view_model().generation();

        app.handle_line("filter value Klingon").unwrap();

        assert_eq!(app.view_model().generation(), generation);
        assert_eq!(app.in_flight(), 0);
        assert!(app
            .view_model()
            .status_message()
            .is_some_and(|m| m.contains("'Klingon' is not a language option")));
    }

    #[tokio::test]
    async fn letter_should_keep_matching_names_only() {
        let (mut app, _, _) = controller(&[]);
        app.start().unwrap();
        app.settle().await.unwrap();

        app.handle_line("c").unwrap();
        app.settle().await.unwrap();

        let names: Vec<&str> = app
            .view_model()
            .cards()
            .iter()
            .map(|c| c.record().common_name())
            .collect();
        assert_eq!(names, vec!["Canada"]);
    }

    #[tokio::test]
    async fn run_should_stop_on_quit() {
        let (mut app, output, _) = controller(&["help", "quit", "all"]);

        app.run().await.unwrap();

        assert!(app.should_quit());
        assert!(output.output().contains("Commands:"));
    }

    #[tokio::test]
    async fn run_should_finish_pending_fetches_when_input_closes() {
        let (mut app, output, _) = controller(&["sort name desc"]);

        app.run().await.unwrap();

        assert_eq!(app.in_flight(), 0);
        assert_eq!(app.view_model().state(), ViewState::Idle);
        let text = output.output();
        assert!(text.find("[1] Canada - CA").is_some());
        assert!(text.contains("sorted by name (descending)"));
    }
}
