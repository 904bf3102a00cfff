use cardsort::Builtin;
use cardsort::core::config::{self, CliOverrides};
use cardsort::core::engine::Verdict;
use cardsort::core::replay::{self, ScriptedMove};
use cardsort::core::state::App;
use cardsort::tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardsort", about = "Sort cards into the right column", version)]
struct Args {
    /// Quiz file to play (TOML)
    #[arg(short, long, value_name = "PATH", conflicts_with = "builtin")]
    quiz: Option<PathBuf>,

    /// Built-in quiz to play
    #[arg(short, long, value_enum)]
    builtin: Option<Builtin>,

    /// Play these moves without a terminal UI and print the result
    #[arg(long = "play", value_name = "ID=GROUP")]
    play: Vec<ScriptedMove>,

    /// Where to write the log
    #[arg(long, value_name = "PATH", default_value = "cardsort.log")]
    log_file: PathBuf,

    /// Log at info level instead of debug
    #[arg(long)]
    quiet: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger: the TUI owns stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.quiet {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("cardsort {} starting up", env!("CARGO_PKG_VERSION"));

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("cardsort: {e}");
            std::process::exit(2);
        }
    };
    let cli = CliOverrides {
        quiz_path: args.quiz,
        builtin: args.builtin,
    };
    let resolved = match config::resolve(&file_config, &cli) {
        Ok(r) => r,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("cardsort: {e}");
            std::process::exit(2);
        }
    };

    if !args.play.is_empty() {
        let mut app = App::new(resolved.quiz);
        let verdict = replay::replay(&mut app, &args.play);
        print!("{}", replay::summary(&app, verdict));
        if verdict != Some(Verdict::Success) {
            std::process::exit(1);
        }
        return Ok(());
    }

    tui::run(resolved)
}
