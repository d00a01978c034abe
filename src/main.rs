use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;

use rcsync::callbacks::NoCallbacks;
use rcsync::config::{CliOverrides, Config};
use rcsync::error::SyncError;
use rcsync::logging::{self, *};
use rcsync::sync;

fn cli() -> Command {
	Command::new("rcsync")
		.version(env!("CARGO_PKG_VERSION"))
		.about("One-way directory sync based on modification times")
		.arg(
			Arg::new("src")
				.long("src")
				.value_name("DIR")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Source folder"),
		)
		.arg(
			Arg::new("dst")
				.long("dst")
				.value_name("DIR")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Destination folder (must exist)"),
		)
		.arg(
			Arg::new("delete-missing")
				.long("delete-missing")
				.value_name("BOOL")
				.action(ArgAction::Set)
				.value_parser(clap::value_parser!(bool))
				.num_args(0..=1)
				.default_missing_value("true")
				.help("Delete destination entries that are missing from the source (true|false)"),
		)
		.arg(
			Arg::new("config")
				.short('c')
				.long("config")
				.value_name("FILE")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Config file (TOML, or JSON5 with .json/.json5 extension)"),
		)
		.arg(
			Arg::new("log-dir")
				.long("log-dir")
				.value_name("DIR")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Directory for timestamped log files [default: log]"),
		)
		.arg(
			Arg::new("no-log-file")
				.long("no-log-file")
				.action(ArgAction::SetTrue)
				.help("Log to stderr instead of a log file"),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.action(ArgAction::SetTrue)
				.help("Print a JSON summary of the run on stdout"),
		)
}

fn load_config(matches: &ArgMatches) -> Result<Config, SyncError> {
	let base = match matches.get_one::<PathBuf>("config") {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};

	Ok(base.merge_cli(CliOverrides {
		source: matches.get_one::<PathBuf>("src").cloned(),
		destination: matches.get_one::<PathBuf>("dst").cloned(),
		delete_missing: matches.get_one::<bool>("delete-missing").copied(),
		log_dir: matches.get_one::<PathBuf>("log-dir").cloned(),
		log_to_file: matches.get_flag("no-log-file").then_some(false),
	}))
}

fn main() -> ExitCode {
	let matches = cli().get_matches();

	let config = match load_config(&matches) {
		Ok(config) => config,
		Err(e) => {
			logging::init_tracing("info");
			error!("{}", e);
			eprintln!("rcsync: {}", e);
			return ExitCode::FAILURE;
		}
	};

	if config.log_to_file {
		if let Some(path) = logging::init_file_logging(&config.log_dir, &config.log_level) {
			eprintln!("log file: {}", path.display());
		}
	} else {
		logging::init_tracing(&config.log_level);
	}

	let result = config.sync_options().and_then(|options| sync::sync(&options, &NoCallbacks));
	match result {
		Ok(report) => {
			if matches.get_flag("json") {
				match serde_json::to_string_pretty(&report) {
					Ok(json) => println!("{}", json),
					Err(e) => warn!("Cannot serialize sync report: {}", e),
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			error!("{}", e);
			eprintln!("rcsync: {}", e);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
