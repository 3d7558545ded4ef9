mod cli;
mod engine;
mod session;

use std::io::{self, BufRead, IsTerminal};

use clap::Parser;
use cli::Cli;
use engine::LoggingEngine;
use pivot_registry::{CaseSensitivity, Config, ParamRegistry};
use session::{Flow, Session};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(&cli.log);

	let file = cli.config.as_deref().map(Config::load).transpose()?.unwrap_or_default();
	let mut config = file.registry_config();
	if cli.case_sensitive {
		config.case = CaseSensitivity::Sensitive;
	}
	if let Some(directory) = cli.directory {
		config.directory = directory;
	}

	let mut registry = ParamRegistry::with_config(config)?;
	registry.attach_engine(Box::new(LoggingEngine::default()));
	let skipped = file.apply(&mut registry).len();
	debug!(settings = file.settings.len(), skipped, "config settings applied");

	let mut session = Session::new(registry, io::stdout().lock());
	if cli.tokens.is_empty() {
		read_stdin(&mut session)?;
	} else {
		session.run(&cli.tokens)?;
	}

	if session.failures() > 0 {
		info!(
			failures = session.failures(),
			engine = session.registry().has_engine(),
			"some tokens were not applied"
		);
	}
	Ok(())
}

/// Reads whitespace-separated tokens line by line until `end` or EOF.
fn read_stdin<W: io::Write>(session: &mut Session<W>) -> io::Result<()> {
	let stdin = io::stdin();
	let interactive = stdin.is_terminal();
	let mut lines = stdin.lock().lines();
	loop {
		if interactive {
			session.prompt()?;
		}
		let Some(line) = lines.next().transpose()? else {
			return Ok(());
		};
		if session.run(line.split_whitespace())? == Flow::Exit {
			return Ok(());
		}
	}
}

fn setup_tracing(default_filter: &str) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
