//! Interactive shell commands
//!
//! Line commands bridging the terminal to the navigator:
//! - `go <path>` — navigate to a path or full URL
//! - `open <name> [key=value…]` — navigate by route name
//! - `back` / `forward` — history traversal
//! - `current` — re-render the active route
//! - `history` — dump the visit log as JSON
//! - `quit`

use obol_core::{Navigator, Outcome, PageProps, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Go(String),
    Open { name: String, params: PageProps },
    Back,
    Forward,
    Current,
    History,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. `None` means the line is empty or not a
    /// recognized command.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().split_whitespace();
        let verb = parts.next()?.to_lowercase();

        match verb.as_str() {
            "go" | "g" => Some(ShellCommand::Go(parts.next()?.to_string())),
            "open" | "o" => {
                let name = parts.next()?.to_string();
                let mut params = PageProps::new();
                for pair in parts {
                    let (key, value) = pair.split_once('=')?;
                    params.insert(key.to_string(), value.to_string());
                }
                Some(ShellCommand::Open { name, params })
            }
            "back" | "b" => Some(ShellCommand::Back),
            "forward" | "f" => Some(ShellCommand::Forward),
            "current" | "c" => Some(ShellCommand::Current),
            "history" | "h" => Some(ShellCommand::History),
            "help" | "?" => Some(ShellCommand::Help),
            "quit" | "q" | "exit" => Some(ShellCommand::Quit),
            _ => None,
        }
    }
}

/// Outcome of executing a command: the text to show, and whether the
/// shell should keep running.
pub struct ShellStep {
    pub output: String,
    pub done: bool,
}

impl ShellStep {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            done: false,
        }
    }
}

pub fn execute(navigator: &Navigator, command: ShellCommand) -> ShellStep {
    match command {
        ShellCommand::Go(location) => match navigator.navigate_location(&location) {
            Ok(outcome) => ShellStep::show(describe(navigator, outcome)),
            Err(e) => ShellStep::show(format!("Error: {}", e)),
        },
        ShellCommand::Open { name, params } => match navigator.navigate_named(&name, &params) {
            Ok(view) => ShellStep::show(describe_view(navigator, &view)),
            Err(e) => ShellStep::show(format!("Error: {}", e)),
        },
        ShellCommand::Back => match navigator.back() {
            Some(outcome) => ShellStep::show(describe(navigator, outcome)),
            None => ShellStep::show("Already at the oldest entry"),
        },
        ShellCommand::Forward => match navigator.forward() {
            Some(outcome) => ShellStep::show(describe(navigator, outcome)),
            None => ShellStep::show("Already at the newest entry"),
        },
        ShellCommand::Current => ShellStep::show(describe(navigator, navigator.current())),
        ShellCommand::History => {
            let visits = navigator.visits();
            match serde_json::to_string_pretty(&visits) {
                Ok(json) => ShellStep::show(json),
                Err(e) => ShellStep::show(format!("Error: {}", e)),
            }
        }
        ShellCommand::Help => ShellStep::show(HELP),
        ShellCommand::Quit => ShellStep {
            output: "Bye".to_string(),
            done: true,
        },
    }
}

const HELP: &str = "Commands:\n  \
    go <path>                navigate to a path or full URL\n  \
    open <name> [k=v…]       navigate by route name\n  \
    back / forward           move through history\n  \
    current                  re-render the active route\n  \
    history                  dump the visit log\n  \
    quit";

fn describe(navigator: &Navigator, outcome: Outcome) -> String {
    match outcome {
        Outcome::Rendered(view) => describe_view(navigator, &view),
        Outcome::NotFound(path) => format!("No route matches {}", path),
    }
}

fn describe_view(navigator: &Navigator, view: &View) -> String {
    format!(
        "{} ({})\n{}",
        view.route,
        navigator.href_for(&view.path),
        view.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go() {
        assert_eq!(
            ShellCommand::parse("go /donate/123"),
            Some(ShellCommand::Go("/donate/123".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("  g /thank-you "),
            Some(ShellCommand::Go("/thank-you".to_string()))
        );
        assert_eq!(ShellCommand::parse("go"), None);
    }

    #[test]
    fn test_parse_open_with_params() {
        let cmd = ShellCommand::parse("open DonationPage eventId=123").unwrap();
        match cmd {
            ShellCommand::Open { name, params } => {
                assert_eq!(name, "DonationPage");
                assert_eq!(params.get("eventId").map(String::as_str), Some("123"));
            }
            other => panic!("Expected Open, got {:?}", other),
        }

        // Malformed pair
        assert_eq!(ShellCommand::parse("open DonationPage eventId"), None);
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(ShellCommand::parse("back"), Some(ShellCommand::Back));
        assert_eq!(ShellCommand::parse("f"), Some(ShellCommand::Forward));
        assert_eq!(ShellCommand::parse("quit"), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse(""), None);
        assert_eq!(ShellCommand::parse("dance"), None);
    }

    #[test]
    fn test_execute_against_donation_table() {
        let navigator = Navigator::new(
            crate::routes::donation_routes().unwrap(),
            obol_core::MemoryHistory::new(),
        );

        let step = execute(&navigator, ShellCommand::Go("/donate/123".to_string()));
        assert!(step.output.contains("DonationPage"));
        assert!(step.output.contains("123"));
        assert!(!step.done);

        let step = execute(&navigator, ShellCommand::Go("/unknown".to_string()));
        assert!(step.output.contains("No route matches /unknown"));

        let step = execute(&navigator, ShellCommand::Quit);
        assert!(step.done);
    }
}
