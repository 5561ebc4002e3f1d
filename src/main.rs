use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use minios_shell::config::ShellConfig;
use minios_shell::console::AnsiConsole;
use minios_shell::input::{ScriptedInput, TerminalInput};
use minios_shell::session::Session;

#[derive(Parser)]
#[command(name = "minios")]
#[command(about = "A teaching shell over a bounded in-memory file system")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Feed this file as keystrokes instead of the terminal
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// Print the final tree as JSON once the session ends
    #[arg(long = "dump-tree")]
    dump_tree: bool,

    /// Log filter, e.g. `debug` or `minios_shell=trace` (overrides RUST_LOG)
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };

    let mut session = Session::new(config);
    let mut console = AnsiConsole::new(std::io::stdout());

    if let Some(path) = &cli.script {
        let keys = match std::fs::read(path) {
            Ok(keys) => keys,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        info!("running script {} ({} bytes)", path.display(), keys.len());
        let mut input = ScriptedInput::new(keys);
        session.run(&mut console, &mut input).await;
    } else {
        #[cfg(unix)]
        let _raw = {
            use std::io::IsTerminal;
            if std::io::stdin().is_terminal() {
                minios_shell::input::terminal::RawModeGuard::enable()
                    .map_err(|e| warn!("cannot enter raw mode: {}", e))
                    .ok()
            } else {
                None
            }
        };
        let mut input = TerminalInput::new();
        session.run(&mut console, &mut input).await;
    }
    drop(console);

    if cli.dump_tree {
        match serde_json::to_string_pretty(&session.tree().snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Cannot serialise tree: {}", e);
                std::process::exit(1);
            }
        }
    }
}
