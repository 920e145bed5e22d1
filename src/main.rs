use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use bpilot::banner::{BannerInfo, print_banner};
use bpilot::bridge::{Action, BridgeClient};
use bpilot::consts::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, base_url};
use bpilot::panel::StdoutPanel;
use bpilot::repl::{self, Input};
use bpilot::session::Session;

#[derive(Parser)]
#[command(
    name = "bpilot",
    version,
    about = "A terminal co-pilot for Blender: ask for the next step, or just do it."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Port the local Blender bridge listens on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Abort the previous in-flight request when the same action is
    /// triggered again (default: let them race, last reply wins)
    #[arg(long, default_value_t = false)]
    cancel_stale: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for the very next step toward a goal, then exit
    Next { goal: String },
    /// Generate and run a macro for a goal, then exit
    Doit { goal: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let client = Arc::new(BridgeClient::new(
        cli.port,
        Duration::from_secs(cli.timeout),
    )?);
    let panel = Arc::new(StdoutPanel);
    let session = Arc::new(Session::new(client, panel, cli.cancel_stale));

    // One-shot mode: the panel has already shown the result or the error
    // message; a failure still exits non-zero.
    if let Some(command) = cli.command {
        let (action, goal) = match command {
            Command::Next { goal } => (Action::NextStep, goal),
            Command::Doit { goal } => (Action::RunMacro, goal),
        };
        if session.run(action, &goal).await.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    print_banner(&BannerInfo {
        bridge: &base_url(cli.port),
        timeout: &format!("{}s", cli.timeout),
        stale: if cli.cancel_stale {
            "cancelled on retrigger"
        } else {
            "free-running"
        },
    });

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nbpilot> ");
        io::stdout().flush()?;

        // Read next line, interruptible by Ctrl+C
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        match repl::parse_line(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Help => print!("{}", repl::HELP),
            Input::Trigger(action, goal) => {
                // Ctrl+C during a request cancels the request, not the REPL
                tokio::select! {
                    result = session.run(action, &goal) => {
                        // Success and failure both land on the panel already
                        let _ = result;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        println!("\ninterrupted");
                    }
                }
            }
        }
    }

    println!("goodbye.");
    Ok(())
}
