use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use log::LevelFilter;
use simplelog::{Config as LogConfig, WriteLogger};

use rosterui::{
    RosterOutcome, RosterProfile, RosterState, RosterUI, bind_pairs, parse_urlencoded_body,
    seed_json,
};

#[derive(Debug, Parser)]
#[command(
    name = "rosterui",
    version,
    about = "Edit a mailing-list roster in the terminal and emit its formset submission"
)]
struct Cli {
    /// Roster variant to edit
    #[arg(short = 'p', long = "profile", value_enum, default_value = "soft")]
    profile: ProfileArg,

    /// Seed spec: JSON or urlencoded file path, or "-" for stdin
    #[arg(short = 's', long = "seed", value_name = "SPEC")]
    seed: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Serialization of the accepted roster
    #[arg(short = 'f', long = "format", value_enum, default_value = "urlencoded")]
    format: FormatArg,

    /// Overwrite output files even if they already exist
    #[arg(long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Append debug logs to this file (the alternate screen hides stderr)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// Indexed fields, deletions flagged for the backend
    Soft,
    /// Indexed fields, rows removed outright
    Hard,
    /// Repeated plain keys, no management counter
    Plain,
}

impl ProfileArg {
    fn to_profile(self) -> RosterProfile {
        match self {
            ProfileArg::Soft => RosterProfile::soft_delete(),
            ProfileArg::Hard => RosterProfile::hard_delete(),
            ProfileArg::Plain => RosterProfile::plain_list(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// application/x-www-form-urlencoded body
    Urlencoded,
    /// One raw key=value pair per line
    Pairs,
    /// JSON projection of the roster
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, LogConfig::default(), file)
            .wrap_err("failed to install logger")?;
    }

    let profile = cli.profile.to_profile();
    let roster = match cli.seed.as_deref() {
        Some(spec) => load_seed(spec, profile)?,
        None => RosterState::new(profile),
    };

    let destinations = if cli.outputs.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.outputs.clone()
    };
    ensure_destinations_available(&destinations, cli.force)?;

    let mut ui = RosterUI::from_state(roster);
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }

    match ui.run().map_err(|err| eyre!(err))? {
        Some(outcome) => {
            let payload = render_outcome(&outcome, cli.format)?;
            for destination in &destinations {
                write_payload(destination, &payload)?;
            }
            Ok(())
        }
        None => {
            eprintln!("discarded; nothing written");
            Ok(())
        }
    }
}

fn load_seed(spec: &str, profile: RosterProfile) -> Result<RosterState> {
    let contents = if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read seed from stdin")?;
        buffer
    } else {
        fs::read_to_string(spec).wrap_err_with(|| format!("failed to read seed file {spec}"))?
    };

    let trimmed = contents.trim();
    if trimmed.starts_with('{') {
        let value = serde_json::from_str(trimmed).wrap_err("seed is not valid JSON")?;
        seed_json(profile, &value).map_err(|err| eyre!("bad JSON seed at {err}"))
    } else {
        let pairs = parse_urlencoded_body(trimmed)
            .map_err(|err| eyre!("bad urlencoded seed at {err}"))?;
        bind_pairs(profile, &pairs).map_err(|err| eyre!("bad urlencoded seed at {err}"))
    }
}

fn render_outcome(outcome: &RosterOutcome, format: FormatArg) -> Result<String> {
    let payload = match format {
        FormatArg::Urlencoded => outcome.urlencoded_body(),
        FormatArg::Pairs => outcome
            .submission_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        FormatArg::Json => {
            serde_json::to_string_pretty(&outcome.json()).wrap_err("failed to serialize JSON")?
        }
    };
    Ok(payload)
}

fn ensure_destinations_available(destinations: &[String], force: bool) -> Result<()> {
    for destination in destinations {
        if destination != "-" && !force && PathBuf::from(destination).exists() {
            return Err(eyre!(
                "output file {destination} already exists (use --force to overwrite)"
            ));
        }
    }
    Ok(())
}

fn write_payload(destination: &str, payload: &str) -> Result<()> {
    if destination == "-" {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(payload.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .wrap_err("failed to write to stdout")?;
    } else {
        fs::write(destination, payload)
            .wrap_err_with(|| format!("failed to write to file {destination}"))?;
    }
    Ok(())
}
