use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, anyhow};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use url::Url;
use web_analyser_core::{
    Document, FetchConfig, JsonConfig, TextConfig, analyse_document, convert_to_json, convert_to_text, fetch_file,
    fetch_stdin, fetch_url,
};

mod echo;

use echo::{format_size, print_analysis_details, print_banner, print_detail, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Baseline used for stdin input when no `--source-url` is given.
const STDIN_SOURCE_URL: &str = "about:blank";

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Summarise the markup of a web page: version, title, headers, links and login forms
#[derive(Parser, Debug)]
#[command(name = "web-analyser")]
#[command(version)]
#[command(about = "Summarise the markup of a web page", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// List every link in text output
    #[arg(long)]
    links: bool,

    /// URL the page was served from, used to tell internal links from external ones
    /// (file and stdin input only)
    #[arg(long, value_name = "URL")]
    source_url: Option<Url>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

/// Where the HTML came from, and the URL links are judged against.
struct Input {
    html: String,
    source_url: Url,
}

fn is_remote(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn file_source_url(path: &str) -> anyhow::Result<Url> {
    let absolute = fs::canonicalize(Path::new(path)).with_context(|| format!("Failed to resolve path: {}", path))?;
    Url::from_file_path(&absolute).map_err(|_| anyhow!("Cannot express {} as a file:// URL", absolute.display()))
}

async fn read_input(args: &Args, input: &str) -> anyhow::Result<Input> {
    if input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        let html = fetch_stdin().context("Failed to read from stdin")?;
        let source_url = match &args.source_url {
            Some(url) => url.clone(),
            None => Url::parse(STDIN_SOURCE_URL)?,
        };
        Ok(Input { html, source_url })
    } else if is_remote(input) {
        if args.verbose {
            print_step(1, 3, &format!("Fetching from {}", input.bright_white().underline()));
        }

        let defaults = FetchConfig::default();
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.clone().unwrap_or(defaults.user_agent),
        };

        let source_url = Url::parse(input).with_context(|| format!("Invalid URL: {}", input))?;
        let html = fetch_url(input, &config).await.context("Failed to fetch URL")?;
        Ok(Input { html, source_url })
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        let html = fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?;
        let source_url = match &args.source_url {
            Some(url) => url.clone(),
            None => file_source_url(input)?,
        };
        Ok(Input { html, source_url })
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "web-analyser", &mut io::stdout());
        return Ok(());
    }

    let input = args.input.clone().context("INPUT is required")?;

    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let Input { html, source_url } = read_input(&args, &input).await?;

    if args.verbose {
        print_detail("Size", &format_size(html.len()));
        print_detail("Source", source_url.as_str());
        eprintln!();
        print_step(2, 3, "Analysing HTML document");
    }

    let summary = {
        let doc = Document::parse(&html).context("Failed to parse HTML")?;
        analyse_document(&doc, &source_url)
    };

    if args.verbose {
        print_analysis_details(&summary);
    }

    let output = match args.format {
        OutputFormat::Text => convert_to_text(&summary, &TextConfig { list_links: args.links })
            .context("Failed to format summary as text")?,
        OutputFormat::Json => convert_to_json(&summary, &JsonConfig { pretty: true })
            .context("Failed to format summary as JSON")?,
    };

    if args.verbose {
        print_step(3, 3, "Writing output");
        print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
