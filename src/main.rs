use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use sokoban_etf::console_interface::write_diagnostic;
use sokoban_etf::core::EtfError;
use sokoban_etf::lts::{get_json_data, render_etf, EtfOptions};
use sokoban_etf::translate_level;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Etf,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Translate a Sokoban screen into an ETF transition system")]
struct Cli {
    /// Sokoban screen to translate
    path: PathBuf,

    /// Skip pushes onto corners and alcoves
    #[arg(long)]
    optimize: bool,

    /// Output format written to stdout
    #[arg(long, value_enum, default_value = "etf")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_level(path: &Path) -> Result<Vec<u8>, EtfError> {
    std::fs::read(path).map_err(|source| EtfError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: &Cli) -> Result<String, EtfError> {
    let level = read_level(&cli.path)?;
    let options = EtfOptions { optimize: cli.optimize };
    info!("translating {} with {:?}", cli.path.display(), options);

    let (grid, lts) = translate_level(&level, &options)?;
    if let Err(err) = write_diagnostic(&grid, options.optimize) {
        log::warn!("could not write diagnostic rendering: {}", err);
    }

    match cli.format {
        OutputFormat::Etf => Ok(render_etf(&lts)),
        OutputFormat::Json => get_json_data(&lts),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logger already initialised: {}", err);
    }

    match run(&cli) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("error: cannot write output: {}", err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
