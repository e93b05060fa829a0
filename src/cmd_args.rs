use std::ffi::OsString;
use std::time::Duration;

pub use clap::Parser;

/// Default provider request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Base URL of the countries provider.
    /// Overrides the COUNTRYLINE_BASE_URL environment variable.
    #[clap(long, help = "countries provider base URL")]
    base_url: Option<String>,

    /// Timeout applied to every provider request.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "request timeout in seconds")]
    timeout_secs: u64,

    /// Log at debug level regardless of COUNTRYLINE_LOG_LEVEL.
    #[clap(short = 'v', long, help = "verbose logging")]
    verbose: bool,

    /// Show one line per country instead of the full card.
    #[clap(long, help = "one-line cards")]
    compact: bool,

    /// Disable colored output even on a terminal.
    #[clap(long, help = "disable colors")]
    no_color: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    base_url: Option<String>,
    timeout_secs: u64,
    verbose: bool,
    compact: bool,
    no_color: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url,
            timeout_secs: args.timeout_secs,
            verbose: args.verbose,
            compact: args.compact,
            no_color: args.no_color,
        }
    }
}
