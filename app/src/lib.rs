//! Obol - Donation Application Shell
//!
//! Wires the donation route table to a navigator backed by in-memory
//! history and drives it from a line-command terminal shell. The rest
//! of the application (forms, payment, rendering) lives elsewhere; this
//! crate owns navigation only.

mod pages;
mod routes;
mod shell;

use std::io::{self, BufRead, Write};

use obol_core::{Config, Navigator, Result};

pub use pages::{DonationPage, ThankYouPage};
pub use routes::donation_routes;
pub use shell::{execute, ShellCommand, ShellStep};

pub fn run() -> Result<()> {
    obol_core::init_logging();

    let config = Config::from_env();
    let navigator = Navigator::with_config(donation_routes()?, &config)?;

    tracing::info!(base = %config.base_path, "Obol shell started");
    println!("Obol donation shell. Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("obol> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = ShellCommand::parse(&line) else {
            println!("Unrecognized command. Type 'help' for commands.");
            continue;
        };

        let step = execute(&navigator, command);
        println!("{}", step.output);
        if step.done {
            break;
        }
    }

    Ok(())
}
