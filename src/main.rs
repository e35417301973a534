use std::path::{Path, PathBuf};

use anyhow::{self, Context};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use molsym::chartab::registry;
use molsym::io::TableSource;
use molsym::molfile::MolFile;
use molsym::pointgroup::{PointGroup, Representation};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Threshold for approximate character comparisons.
    #[arg(short, long, default_value_t = 1e-7)]
    threshold: f64,

    /// Write a debug log to this file.
    #[arg(short, long)]
    debug: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reduces a reducible representation into its irreducible constituents.
    Reduce {
        /// A Schoenflies symbol or a path to a table resource.
        #[arg(short, long)]
        group: String,

        /// Comma-separated characters, e.g. `4,0,4,0`.
        representation: String,
    },

    /// Convolves two or more irreducible representations and matches the
    /// product against the character table.
    Convolve {
        /// A Schoenflies symbol or a path to a table resource.
        #[arg(short, long)]
        group: String,

        /// Names of the irreducible representations to be convolved.
        #[arg(required = true, num_args = 2..)]
        irreps: Vec<String>,
    },

    /// Matches a representation against the character table.
    Match {
        /// A Schoenflies symbol or a path to a table resource.
        #[arg(short, long)]
        group: String,

        /// Comma-separated characters, e.g. `1,1,1,1`.
        representation: String,
    },

    /// Parses a molfile and summarises its atom and bond tables.
    Mol {
        /// Path to the molfile.
        file: PathBuf,
    },
}

/// Configures a console appender emitting plain `molsym-output` lines, plus an
/// optional debug log file.
fn init_logger(debug: Option<&Path>) -> Result<(), anyhow::Error> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let mut config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));
    if let Some(debug_path) = debug {
        let debug_log = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} {l} {m}{n}")))
            .build(debug_path)
            .with_context(|| {
                format!("Unable to create the debug log `{}`", debug_path.display())
            })?;
        config = config
            .appender(Appender::builder().build("debug", Box::new(debug_log)))
            .logger(
                Logger::builder()
                    .appender("debug")
                    .build("molsym", LevelFilter::Debug),
            );
    }
    let config = config.build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Resolves a group specification: registered Schoenflies symbols take
/// precedence, anything else is treated as a table resource location.
fn load_group(spec: &str, threshold: f64) -> Result<PointGroup, anyhow::Error> {
    let source = if registry::get(spec).is_some() {
        TableSource::Name(spec.to_string())
    } else {
        TableSource::Path(PathBuf::from(spec))
    };
    let table = molsym::io::load_table(source)
        .with_context(|| format!("Unable to obtain a character table for `{spec}`"))?;
    Ok(PointGroup::builder().table(table).threshold(threshold).build()?)
}

fn parse_representation(spec: &str) -> Result<Representation, anyhow::Error> {
    let characters = spec
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Unable to parse `{token}` as a character"))
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(Representation::from(characters))
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    init_logger(cli.debug.as_deref())?;

    match &cli.command {
        Command::Reduce {
            group,
            representation,
        } => {
            let group = load_group(group, cli.threshold)?;
            let representation = parse_representation(representation)?;
            let result = group.reduction(&representation)?;
            println!("{result}");
            group.constituents(&representation)?;
        }
        Command::Convolve { group, irreps } => {
            let group = load_group(group, cli.threshold)?;
            let names: Vec<&str> = irreps.iter().map(String::as_str).collect();
            group.convolution_results(&names)?;
        }
        Command::Match {
            group,
            representation,
        } => {
            let group = load_group(group, cli.threshold)?;
            let representation = parse_representation(representation)?;
            group.show_matched_representation(&representation)?;
        }
        Command::Mol { file } => {
            let mol = MolFile::from_path(file)?;
            println!("{mol}");
        }
    }
    Ok(())
}
