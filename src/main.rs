use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use evobench::cli::{resolve_form, resolve_url, Args};
use evobench::config::Config;
use evobench::form::{ResultDisplay, SubmitForm, TerminalDisplay};
use evobench::session::SessionClient;

// ---------------------------------------------------------------------------
// One-shot display
// ---------------------------------------------------------------------------

/// Forwards each rendered result to the waiting main task. Used by `--once`,
/// which exits after the first one.
struct ChannelDisplay {
    tx: mpsc::UnboundedSender<String>,
}

impl ResultDisplay for ChannelDisplay {
    fn replace(&mut self, text: &str) {
        let _ = self.tx.send(text.to_string());
    }
}

// ---------------------------------------------------------------------------
// Interactive commands
// ---------------------------------------------------------------------------

enum Command {
    Submit,
    Count(String),
    Neff,
    Sato,
    Parallel(bool),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// An empty line is the button press. A bare number is shorthand for setting
/// the count field.
fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => Command::Submit,
        Some("go") | Some("submit") => Command::Submit,
        Some("count") => Command::Count(parts.next().unwrap_or("0").to_string()),
        Some("neff") => Command::Neff,
        Some("sato") => Command::Sato,
        Some("parallel") => {
            Command::Parallel(matches!(parts.next(), None | Some("on") | Some("true")))
        }
        Some("show") => Command::Show,
        Some("help") | Some("?") => Command::Help,
        Some("quit") | Some("exit") | Some("q") => Command::Quit,
        Some(tok) if tok.parse::<i64>().is_ok() => Command::Count(tok.to_string()),
        Some(other) => Command::Unknown(other.to_string()),
    }
}

fn print_form(form: &SubmitForm) {
    println!(
        "  count={} algorithm={} parallelize={}",
        form.count.yellow(),
        form.algorithm().to_string().yellow(),
        if form.parallelize { "on".yellow() } else { "off".yellow() },
    );
}

fn print_help() {
    println!("  <enter> | go      submit the current query");
    println!("  <n> | count <n>   set the vote count field");
    println!("  neff | sato       pick the shuffle algorithm");
    println!("  parallel [on|off] toggle parallel execution");
    println!("  show              print the current field values");
    println!("  quit              leave the session");
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let url = resolve_url(&args, &config);
    let mut form = resolve_form(&args, &config);

    // One-shot mode: submit, print the first result, leave.
    if args.once {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let session = SessionClient::connect(&url, Box::new(ChannelDisplay { tx })).await?;
        session.submit(&form);
        match rx.recv().await {
            Some(result) => println!("{}", result),
            None => {
                eprintln!("{}", "connection closed before a result arrived".red());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let session = SessionClient::connect(&url, Box::new(TerminalDisplay::new())).await?;

    if !args.quiet {
        println!("{} connected to {}", "evobench".cyan().bold(), url.cyan());
        print_form(&form);
        println!("  type 'help' for commands; an empty line submits");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(line.trim()) {
            Command::Submit => {
                session.submit(&form);
                println!(
                    "  {} {} votes, {}{}",
                    "sent".green(),
                    form.count_value(),
                    form.algorithm(),
                    if form.parallelize { ", parallel" } else { "" },
                );
            }
            Command::Count(raw) => form.count = raw,
            Command::Neff => form.neff = true,
            Command::Sato => form.neff = false,
            Command::Parallel(on) => form.parallelize = on,
            Command::Show => print_form(&form),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(tok) => {
                println!("  {} unknown command '{}'", "?".red(), tok);
            }
        }
    }

    Ok(())
}
