use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use elma_state::{format_time, State};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Inspect and edit Elasto Mania state.dat files")]
struct Cli {
	/// Path to state.dat
	#[arg(long, env = "ELMA_STATE", default_value = "state.dat", global = true)]
	state: PathBuf,
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Prints the players, their total times and progress
	Info,
	/// Lists the player names
	Players,
	/// Prints stats.txt, or writes it to a file
	Stats {
		#[arg(long)]
		output: Option<PathBuf>,
		/// Replace an existing output file
		#[arg(long)]
		overwrite: bool,
	},
	/// Prints a total time in hundredths and formatted
	Total {
		/// Player name. If unset, the anonymous total time is printed
		#[arg(long)]
		player: Option<String>,
		/// Use the better of single and multiplayer times per level
		#[arg(long)]
		combined: bool,
	},
	/// Renames a player, best times included, and rewrites state.dat
	Rename {
		old_name: String,
		new_name: String,
		/// Prints the renamed state instead of writing state.dat
		#[arg(long)]
		dry_run: bool,
	},
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
		)
		.init();

	let cli = Cli::parse();
	let state = State::load(&cli.state)
		.with_context(|| format!("Failed to load {}", cli.state.display()))?;

	match cli.command {
		Command::Info => print!("{state}"),
		Command::Players => {
			for (i, player) in state.players.iter().enumerate() {
				println!("{i}: {}", player.name);
			}
		}
		Command::Stats { output: None, .. } => print!("{}", state.stats_txt()),
		Command::Stats { output: Some(output), overwrite } => {
			elma_state::write_stats_txt(&state, &output, overwrite)
				.with_context(|| format!("Failed to write {}", output.display()))?;
		}
		Command::Total { player, combined } => {
			let total = state.total_time(player.as_deref(), combined);
			println!("{total} ({})", format_time(total, true, ":"));
		}
		Command::Rename { old_name, new_name, dry_run } => {
			if state.player(&old_name).is_none() {
				anyhow::bail!("Player '{old_name}' not found");
			}
			let mut state = state;
			state.rename_player(&old_name, &new_name)?;
			if dry_run {
				print!("{state}");
			} else {
				state
					.save(&cli.state, true, false)
					.with_context(|| format!("Failed to write {}", cli.state.display()))?;
			}
		}
	}

	Ok(())
}
