use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use rack2svg::links::LinkTemplate;
use rack2svg::{generate_svg_with, parse_source, Dialect, RackError, RenderOptions};

/// Convert RackML or rack-text rack layouts to SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file; reads stdin when absent or "-"
    input: Option<String>,

    /// Output file; writes stdout when absent
    #[arg(short, long)]
    output: Option<String>,

    /// Input dialect (rackml, rack-xml, rack-text, rack); guessed when absent
    #[arg(short, long)]
    dialect: Option<Dialect>,

    /// Layout options file (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// URL template for internal links, e.g. "https://wiki.example/{}"
    #[arg(long)]
    link_template: Option<String>,

    /// Print the parsed model as JSON instead of SVG
    #[arg(long)]
    emit_model: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RackError> {
    let options = load_options(args.config.as_deref())?;
    let source = read_input(args.input.as_deref())?;

    let dialect = args
        .dialect
        .or_else(|| args.input.as_deref().and_then(dialect_from_extension))
        .unwrap_or_else(|| Dialect::detect(&source));
    info!(dialect = dialect.to_string(); "Parsing input");

    let mut rack_set = parse_source(&source, dialect)?;

    if let Some(template) = &args.link_template {
        let links = LinkTemplate::new(template.as_str())?;
        rack_set.rewrite_links(|raw| links.resolve(raw));
    }

    let output = if args.emit_model {
        serde_json::to_string_pretty(&rack_set)?
    } else {
        generate_svg_with(&rack_set, &options)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path.as_str(); "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)?;
        }
    }

    Ok(())
}

fn load_options(path: Option<&str>) -> Result<RenderOptions, RackError> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };
    info!(path = path; "Loading layout options");
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| RackError::Config(format!("{}: {}", path, e)))
}

fn read_input(path: Option<&str>) -> Result<String, RackError> {
    match path {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn dialect_from_extension(path: &str) -> Option<Dialect> {
    let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "xml" | "rackml" => Some(Dialect::RackMl),
        "rack" | "txt" => Some(Dialect::RackText),
        _ => None,
    }
}
