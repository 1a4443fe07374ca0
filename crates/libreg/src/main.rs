mod logging;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{debug, error};
use serde_json::Value as JsonValue;

use libreg_core::{Entry, Error, HiveTable, Registry, Result, ValueType};

/// libreg: read and modify the filesystem registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Hive table file (JSON, TOML or YAML). Defaults to the standard hives
    /// with HKEY_CURRENT_USER in USER's home directory
    #[arg(long, value_name = "FILE")]
    hives: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// User the operation runs as; owns new per-user values
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a value, or the entries of a key as `name<TAB>type`
    Read {
        path: String,
        /// Printed when nothing exists at PATH
        default: Option<String>,
    },
    /// Store VALUE at PATH as TYPE (dword, qword, bool, str, list, hex, float, double)
    Write {
        path: String,
        #[arg(value_name = "TYPE")]
        ty: String,
        value: String,
    },
    /// Delete a key or value; exits 1 when nothing was deleted
    Delete { path: String },
    /// Apply a file of provisioning directives
    Install { file: PathBuf },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("libreg: logging unavailable: {e}");
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("libreg: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let table = match &args.hives {
        Some(path) => HiveTable::load(path)?,
        None => HiveTable::for_user(&args.user)?,
    };
    debug!("Using hives {:?}", table.resolve());
    let registry = Registry::new(table);

    match args.command {
        Commands::Read { path, default } => {
            match registry.get(&path)? {
                Some(entry) => print_entry(&entry),
                None => {
                    if let Some(default) = default {
                        println!("{default}");
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Write { path, ty, value } => {
            let ty: ValueType = ty.parse()?;
            registry.write_as(&args.user, &path, &JsonValue::String(value), Some(ty))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Delete { path } => {
            if registry.delete(&path)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Install { file } => {
            let text = fs::read_to_string(&file)
                .map_err(|e| Error::io(e, "read_install_file", file.clone()))?;
            let report = registry.install(&args.user, &text)?;
            for action in &report.actions {
                println!("{action}");
            }
            println!(
                "{} written, {} created, {} skipped",
                report.written(),
                report.created(),
                report.skipped()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_entry(entry: &Entry) {
    match entry {
        // Lists print one item per line
        Entry::Value(value) => println!("{value}"),
        Entry::Key(listing) => {
            for (name, kind) in listing {
                println!("{name}\t{kind}");
            }
        }
    }
}
