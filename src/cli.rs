use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Women's Football Fixtures Board
///
/// Fetches the day's women's football fixtures across the curated set of
/// competitions, resolves the applicable season for each one, and prints the
/// results grouped by country and competition.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show fixtures for a specific date in YYYY-MM-DD format.
    /// Defaults to today; an unparsable value also falls back to today.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Shift the selected date by this many days (negative for past days).
    /// Combines with --date, e.g. `--date 2025-03-01 --shift -1`.
    #[arg(
        long = "shift",
        short = 's',
        default_value_t = 0,
        allow_hyphen_values = true,
        help_heading = "Display Options"
    )]
    pub shift: i64,

    /// Restrict the board to a single competition id.
    #[arg(long = "league", short = 'L', help_heading = "Display Options")]
    pub league: Option<u32>,

    /// Update the API domain in config.
    #[arg(long = "set-api-domain", help_heading = "Configuration", value_name = "DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update the API key in config.
    #[arg(long = "set-api-key", help_heading = "Configuration", value_name = "KEY")]
    pub new_api_key: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are echoed to stdout in addition to the
    /// log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written to
    /// the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
