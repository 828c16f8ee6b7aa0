//! CLI entrypoint.

use std::error::Error;
use std::process;

use clap::Parser;
use vmgen_core::Generator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the vmgen CLI.
struct Cli {
	/// Path to a local cheatcodes JSON file, used instead of fetching the
	/// registry from the network.
	#[arg(long = "from", value_name = "PATH")]
	from: Option<String>,
}

/// Generate the interface file and report the output path.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let mut generator = Generator::new();
	if let Some(path) = &cli.from {
		generator = generator.with_from(path);
	}

	let out_path = generator.run()?;
	println!("Wrote to {}", out_path.display());

	Ok(())
}

fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(&cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}
