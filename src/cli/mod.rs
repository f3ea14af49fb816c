//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::api::{ResponseFormatter, StreamLinksClient};
use crate::config::{Config, OutputConfig, COOKIES_FILE_ENV};
use crate::cookies::CookieBlob;
use crate::error::{ApiError, Result};
use crate::exit_code::exit_code_for_error;
use crate::logging;
use crate::output::OutputWriter;
use crate::utils::{FileUtils, StringUtils};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::{json, Value};

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    logging::init(matches.get_flag("verbose"));

    if let Err(e) = run_with_args(&matches) {
        error_reporter(&matches).write_error(&e.to_string());
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Stderr reporter honouring `--silent`, usable before a [`Config`] exists
fn error_reporter(matches: &ArgMatches) -> OutputWriter {
    OutputWriter::new(OutputConfig {
        file: None,
        verbose: matches.get_flag("verbose"),
        silent: matches.get_flag("silent"),
        pretty: true,
    })
}

/// Run ytlinks with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let mut config = build_config_from_args(matches)?;
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| ApiError::Config("No command given".to_string()))?;

    let mut use_cookies = false;
    if name == "links" && !sub.get_flag("no-cookies") {
        if let Some(path) = sub.get_one::<String>("cookies") {
            config.cookies = Some(CookieBlob::from_file(path)?);
            use_cookies = true;
        }
    }

    let writer = OutputWriter::new(config.output.clone());
    let formatter = ResponseFormatter::new(config.output.pretty);
    writer.write_verbose(&format!("API base: {}", config.api_base_url));

    let client = StreamLinksClient::new(config)?;

    if name == "links" && sub.get_flag("dry-run") {
        let url = required_url(sub)?;
        let preview = dry_run_preview(&client, url, use_cookies)?;
        return writer.write(&formatter.format(&preview)?);
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| ApiError::Config(format!("Failed to create async runtime: {}", e)))?;

    let rendered = rt.block_on(execute_command(&client, &formatter, name, sub, use_cookies))?;
    writer.write(&rendered)
}

async fn execute_command(
    client: &StreamLinksClient,
    formatter: &ResponseFormatter,
    name: &str,
    sub: &ArgMatches,
    use_cookies: bool,
) -> Result<String> {
    match name {
        "links" => {
            let links = client
                .get_stream_links(required_url(sub)?, use_cookies)
                .await?;
            formatter.format(&links)
        }
        "info" => formatter.format(&client.video_info(required_url(sub)?).await?),
        "formats" => formatter.format(&client.formats(required_url(sub)?).await?),
        "health" => {
            let health = client.health().await?;
            if !health.is_healthy() {
                log::warn!("API reports status '{}'", health.status);
            }
            formatter.format(&health)
        }
        other => Err(ApiError::Config(format!("Unknown command: {}", other))),
    }
}

fn required_url(matches: &ArgMatches) -> Result<&str> {
    matches
        .get_one::<String>("url")
        .map(String::as_str)
        .ok_or_else(|| ApiError::Config("Missing video URL".to_string()))
}

/// Describe the stream-links request that would be sent, with cookie values
/// replaced by their size.
fn dry_run_preview(client: &StreamLinksClient, video_url: &str, use_cookies: bool) -> Result<Value> {
    let request = client.build_stream_links_request(video_url, use_cookies)?;
    let bytes = request
        .body()
        .and_then(|body| body.as_bytes())
        .ok_or_else(|| ApiError::Config("Request body is not buffered".to_string()))?;
    let mut body: Value = serde_json::from_slice(bytes)?;

    if let Some(cookies) = body.get_mut("cookies_text") {
        let size = cookies.as_str().map(str::len).unwrap_or(0);
        *cookies = Value::String(format!("<{} bytes>", size));
    }

    Ok(json!({
        "method": request.method().as_str(),
        "url": request.url().as_str(),
        "body": body,
    }))
}

fn url_arg() -> Arg {
    Arg::new("url")
        .help("Video page URL")
        .value_name("URL")
        .required(true)
        .index(1)
}

/// Create the CLI application structure
fn create_app() -> Command {
    Command::new("ytlinks")
        .version(crate::VERSION)
        .about("Resolve direct stream links through a yt-dlp HTTP API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("api-base")
            .long("api-base")
            .value_name("URL")
            .help("API origin (defaults to $API_BASE_URL or the public deployment)")
            .global(true))
        .arg(Arg::new("timeout")
            .long("timeout")
            .value_name("SECONDS")
            .help("Maximum time for the whole request")
            .default_value("30")
            .global(true))
        .arg(Arg::new("connect-timeout")
            .long("connect-timeout")
            .value_name("SECONDS")
            .help("Maximum time for connection")
            .default_value("10")
            .global(true))
        .arg(Arg::new("user-agent")
            .short('A')
            .long("user-agent")
            .value_name("STRING")
            .help("User-Agent header")
            .global(true))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write output to file")
            .global(true))
        .arg(Arg::new("raw")
            .long("raw")
            .help("Print compact JSON")
            .action(ArgAction::SetTrue)
            .global(true))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Verbose output")
            .action(ArgAction::SetTrue)
            .global(true))
        .arg(Arg::new("silent")
            .short('s')
            .long("silent")
            .help("Silent mode")
            .action(ArgAction::SetTrue)
            .global(true))
        .subcommand(Command::new("links")
            .about("Resolve the best audio and video stream URLs")
            .arg(url_arg())
            .arg(Arg::new("cookies")
                .short('c')
                .long("cookies")
                .value_name("FILE")
                .env(COOKIES_FILE_ENV)
                .help("Netscape cookie file forwarded to the API"))
            .arg(Arg::new("no-cookies")
                .long("no-cookies")
                .help("Do not send cookies even if a cookie file is configured")
                .action(ArgAction::SetTrue))
            .arg(Arg::new("dry-run")
                .long("dry-run")
                .help("Print the request instead of sending it")
                .action(ArgAction::SetTrue)))
        .subcommand(Command::new("info")
            .about("Fetch video metadata")
            .arg(url_arg()))
        .subcommand(Command::new("formats")
            .about("List available formats")
            .arg(url_arg()))
        .subcommand(Command::new("health")
            .about("Check that the API is up"))
}

/// Build configuration from command line arguments
fn build_config_from_args(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(base) = matches.get_one::<String>("api-base") {
        config = config.with_api_base_url(base)?;
    }

    if let Some(timeout_str) = matches.get_one::<String>("timeout") {
        config.timeout = StringUtils::parse_timeout(timeout_str)?;
    }

    if let Some(connect_timeout_str) = matches.get_one::<String>("connect-timeout") {
        config.connect_timeout = StringUtils::parse_timeout(connect_timeout_str)?;
    }

    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        config.user_agent = Some(user_agent.clone());
    }

    config.output.verbose = matches.get_flag("verbose");
    config.output.silent = matches.get_flag("silent");
    config.output.pretty = !matches.get_flag("raw");

    if let Some(output_file) = matches.get_one::<String>("output") {
        config.output.file = Some(FileUtils::expand_path(output_file)?);
    }

    Ok(config)
}
