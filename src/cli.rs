//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::github::client::DEFAULT_API_URL;
use crate::localization;
use crate::operations::generate::DEFAULT_LANGUAGES;

/// Generate a `Settings.bundle` acknowledging `SwiftPM` dependency licenses
#[derive(Parser, Debug)]
#[command(
    name = "swiftpm-settings-acknowledgements",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate a Settings.bundle listing the licenses of SwiftPM dependencies",
    long_about = "Reads the Package.resolved of an Xcode project (or scans a SwiftPM package \
                  cache), collects the license of every dependency and writes a Settings.bundle \
                  with an Acknowledgements page per package.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  swiftpm-settings-acknowledgements -d ./MyApp -o ./MyApp/Resources\n    \
                  swiftpm-settings-acknowledgements --languages en,fr,ja\n    \
                  swiftpm-settings-acknowledgements --package-cache-path ./SourcePackages/checkouts\n    \
                  GITHUB_TOKEN=... swiftpm-settings-acknowledgements -v"
)]
pub struct Cli {
    /// Directory containing the .xcodeproj (defaults to current directory)
    #[arg(long, short = 'd', value_name = "DIR")]
    pub directory_path: Option<PathBuf>,

    /// Comma-separated language codes for the Acknowledgements title
    #[arg(
        long,
        short = 'l',
        value_name = "CODES",
        default_value = DEFAULT_LANGUAGES,
        long_help = languages_long_help()
    )]
    pub languages: String,

    /// Directory to write the settings bundle into (defaults to current directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_path: Option<PathBuf>,

    /// Scan this package cache for licenses instead of querying GitHub
    #[arg(long, value_name = "DIR")]
    pub package_cache_path: Option<PathBuf>,

    /// Use this Package.resolved instead of searching for one
    #[arg(long, value_name = "FILE")]
    pub package_resolved_path: Option<PathBuf>,

    /// GitHub access token, raises the API rate limit
    #[arg(
        long,
        env = "GITHUB_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub github_token: Option<String>,

    /// GitHub API base URL
    #[arg(
        long,
        env = "GITHUB_API_URL",
        value_name = "URL",
        default_value = DEFAULT_API_URL,
        hide = true
    )]
    pub github_api_url: String,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

fn languages_long_help() -> String {
    format!(
        "Comma-separated language codes for the Acknowledgements title.\n\
         Unknown codes are skipped with a warning.\n\n\
         Available languages:\n{}",
        localization::available_languages_description()
    )
}
