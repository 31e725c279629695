mod config;
mod error;

use std::io::Read as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use folio_highlight::{escape_html, Registry};
use folio_render::RenderOptions;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio: markdown article renderer with syntax highlighting")]
#[command(version)]
struct Cli {
    /// TOML file with renderer options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Escape HTML in prose before inline formatting
    #[arg(long, global = true)]
    escape_prose: bool,

    /// Discard a code fence left open at end of input
    #[arg(long, global = true)]
    drop_unterminated: bool,

    /// Reading speed used for the reading-time estimate
    #[arg(long, global = true)]
    words_per_minute: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a markdown article to HTML
    Render {
        /// Input markdown file (`-` for stdin)
        path: String,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the fragment in a complete HTML page
        #[arg(long)]
        standalone: bool,
    },

    /// Print the table of contents of a markdown article
    Toc {
        /// Input markdown file (`-` for stdin)
        path: String,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Highlight a source file as an HTML fragment
    Highlight {
        /// Input source file (`-` for stdin)
        path: String,

        /// Language name or alias
        #[arg(short, long)]
        language: String,
    },

    /// List languages with highlighting support
    Languages,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = Overrides {
        escape_prose: cli.escape_prose,
        drop_unterminated: cli.drop_unterminated,
        words_per_minute: cli.words_per_minute,
    };
    let options = config::load(cli.config.as_deref(), overrides)?;

    match cli.command {
        Command::Render {
            path,
            output,
            standalone,
        } => cmd_render(&path, output.as_deref(), standalone, &options),
        Command::Toc { path, json } => cmd_toc(&path, json, &options),
        Command::Highlight { path, language } => cmd_highlight(&path, &language),
        Command::Languages => {
            for name in Registry::builtin().languages() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(source);
    }

    let p = Path::new(path);
    if !p.exists() {
        return Err(CliError::NotFound(p.to_path_buf()));
    }
    std::fs::read_to_string(p).map_err(|source| CliError::Read {
        path: p.to_path_buf(),
        source,
    })
}

fn cmd_render(
    path: &str,
    output: Option<&Path>,
    standalone: bool,
    options: &RenderOptions,
) -> Result<(), CliError> {
    let source = read_source(path)?;
    let article = folio_render::render_article(&source, options);
    info!(
        words = article.reading_time.words,
        minutes = article.reading_time.minutes,
        headings = article.toc.len(),
        "rendered article"
    );

    let html = if standalone {
        let title = article
            .toc
            .first()
            .map(|entry| entry.text.clone())
            .unwrap_or_else(|| page_title_from_path(path));
        standalone_page(&title, &article.html)
    } else {
        format!("{}\n", article.html)
    };

    match output {
        Some(out) => {
            std::fs::write(out, &html).map_err(|source| CliError::Write {
                path: out.to_path_buf(),
                source,
            })?;
            eprintln!("Rendered: {}", out.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn cmd_toc(path: &str, json: bool, options: &RenderOptions) -> Result<(), CliError> {
    let source = read_source(path)?;
    let doc = folio_markdown::parse_with(&source, &options.parse);
    let toc = folio_render::table_of_contents(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
        return Ok(());
    }
    for entry in &toc {
        let indent = "  ".repeat(entry.level - 1);
        println!("{indent}- {} (#{})", entry.text, entry.id);
    }
    Ok(())
}

fn cmd_highlight(path: &str, language: &str) -> Result<(), CliError> {
    let registry = Registry::builtin();
    if registry.get(language).is_none() {
        return Err(CliError::UnsupportedLanguage(language.to_string()));
    }
    let source = read_source(path)?;
    if source.is_empty() {
        warn!(path, "empty input");
    }
    println!("{}", registry.highlight(&source, language));
    Ok(())
}

fn page_title_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| *stem != "-")
        .unwrap_or("Untitled")
        .to_string()
}

/// Wrap a rendered fragment in a minimal HTML page.
fn standalone_page(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    html.push_str("</head>\n<body>\n<article>\n");
    html.push_str(body);
    html.push_str("\n</article>\n</body>\n</html>\n");
    html
}
