use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use safemode::{extract_scheme, AttributeClass, FilterConfig, SafeModeFilter, Verdict};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod logging;

#[derive(Parser)]
#[command(name = "safemode")]
#[command(about = "Check HTML tags, attributes and URI schemes against the safe-mode whitelists")]
#[command(version)]
struct Cli {
    /// JSON filter configuration (tables left out keep their defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one or more tag names
    Tag {
        /// Tag names, without angle brackets
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Check an attribute of a tag
    Attr {
        /// Tag the attribute appears on
        tag: String,

        /// Attribute name
        name: String,

        /// Attribute value
        #[arg(default_value = "")]
        value: String,
    },

    /// Extract the scheme of a URI and check it against the whitelist
    Scheme {
        /// URI as it would appear in an attribute value
        value: String,
    },

    /// Print the effective whitelist tables as JSON
    DumpConfig,
}

#[derive(Serialize, Debug)]
struct TagReport<'a> {
    tag: &'a str,
    allowed: bool,
}

#[derive(Serialize, Debug)]
struct AttrReport<'a> {
    tag: &'a str,
    name: &'a str,
    value: &'a str,
    class: String,
    scheme: Option<String>,
    allowed: bool,
}

#[derive(Serialize, Debug)]
struct SchemeReport<'a> {
    value: &'a str,
    scheme: Option<String>,
    allowed: bool,
}

fn load_filter(path: Option<&Path>) -> Result<SafeModeFilter> {
    let Some(path) = path else {
        return Ok(SafeModeFilter::new());
    };

    let raw = fs::read(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = FilterConfig::from_json_slice(&raw)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    let filter = SafeModeFilter::from_config(&config)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    tracing::debug!(config = %path.display(), "loaded filter configuration");
    Ok(filter)
}

fn scheme_string(value: &str) -> Option<String> {
    extract_scheme(value.as_bytes()).map(|s| String::from_utf8_lossy(s).into_owned())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs the command; `Ok(true)` when everything checked was allowed.
fn run(cli: Cli) -> Result<bool> {
    let filter = load_filter(cli.config.as_deref())?;

    match cli.command {
        Commands::Tag { names } => {
            let reports: Vec<TagReport<'_>> = names
                .iter()
                .map(|name| TagReport {
                    tag: name,
                    allowed: filter.is_tag_allowed(name.as_bytes()),
                })
                .collect();

            if cli.json {
                print_json(&reports)?;
            } else {
                for report in &reports {
                    println!("{}: {}", report.tag, Verdict::from(report.allowed));
                }
            }
            Ok(reports.iter().all(|r| r.allowed))
        }

        Commands::Attr { tag, name, value } => {
            let class = filter.classify_attribute(name.as_bytes());
            let scheme = match class {
                AttributeClass::UriBearing => scheme_string(&value),
                AttributeClass::EventHandler | AttributeClass::Generic => None,
            };
            let allowed =
                filter.is_attribute_allowed(tag.as_bytes(), name.as_bytes(), value.as_bytes());
            let report = AttrReport {
                tag: &tag,
                name: &name,
                value: &value,
                class: class.to_string(),
                scheme,
                allowed,
            };

            if cli.json {
                print_json(&report)?;
            } else {
                println!("<{} {}=\"{}\">", report.tag, report.name, report.value);
                println!("  class:   {}", report.class);
                if let Some(scheme) = &report.scheme {
                    println!("  scheme:  {}", scheme);
                }
                println!("  verdict: {}", Verdict::from(report.allowed));
            }
            Ok(report.allowed)
        }

        Commands::Scheme { value } => {
            let scheme = extract_scheme(value.as_bytes());
            // Scheme-less URIs are never rejected on account of their scheme.
            let allowed = scheme.map_or(true, |s| filter.is_scheme_allowed(s));
            let report = SchemeReport {
                value: &value,
                scheme: scheme_string(&value),
                allowed,
            };

            if cli.json {
                print_json(&report)?;
            } else {
                println!("scheme:  {}", report.scheme.as_deref().unwrap_or("none"));
                println!("verdict: {}", Verdict::from(report.allowed));
            }
            Ok(report.allowed)
        }

        Commands::DumpConfig => {
            println!("{}", filter.to_config().to_json_pretty()?);
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
