use anyhow::Context;
use std::sync::Arc;
use stockview_core::client::HttpBackendClient;
use stockview_core::config::InputOptions;
use stockview_core::location::{Navigation, PageLocation};
use stockview_core::page::InputOrchestrator;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal::TerminalSurface;

const HELP: &str = "\
Type a query to see suggestions. Commands:
  :submit          open the result page for the current input
  :compare <B>     compare the current input against B
  :pick <n>        use suggestion n as the input
  :dismiss         close the suggestion list
  :open <loc>      open a page location directly
  :quit            leave";

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Typed(&'a str),
    Submit,
    Compare(Option<&'a str>),
    Pick(Option<usize>),
    Dismiss,
    Open(&'a str),
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Line::Typed(line);
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };
    let arg = (!arg.is_empty()).then_some(arg);

    match name {
        "submit" => Line::Submit,
        "compare" => Line::Compare(arg),
        "pick" => Line::Pick(arg.and_then(|n| n.parse().ok())),
        "dismiss" => Line::Dismiss,
        "open" => Line::Open(arg.unwrap_or("/")),
        "help" => Line::Help,
        "quit" | "q" => Line::Quit,
        other => Line::Unknown(other),
    }
}

/// Reads stdin until EOF or `:quit`. Each typed line replaces the input value and starts a
/// search in the background, so a slow answer can be overtaken by the next line.
pub async fn run(
    backend: Arc<HttpBackendClient>,
    surface: Arc<TerminalSurface>,
    options: InputOptions,
) -> anyhow::Result<()> {
    let orchestrator = Arc::new(InputOrchestrator::new(
        backend.clone(),
        surface.clone(),
        options,
    ));

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match parse_line(&line) {
            Line::Typed(text) => {
                surface.type_input(text);
                let orchestrator = orchestrator.clone();
                let text = text.to_string();
                tokio::spawn(async move {
                    orchestrator.on_input(&text).await;
                });
            }
            Line::Submit => {
                if let Ok(nav) = orchestrator.on_submit(&surface.input_value()) {
                    follow(&backend, &surface, &nav).await;
                }
            }
            Line::Compare(second) => {
                if let Ok(Some(nav)) = orchestrator.on_compare(&surface.input_value(), second) {
                    follow(&backend, &surface, &nav).await;
                }
            }
            Line::Pick(Some(n)) => match surface.suggestion(n) {
                Some(item) => orchestrator.on_pick(&item),
                None => println!("no suggestion #{n}"),
            },
            Line::Pick(None) => println!("usage: :pick <n>"),
            Line::Dismiss => orchestrator.on_dismiss(),
            Line::Open(location) => match PageLocation::parse(location) {
                Ok(location) => crate::open_page(&backend, &surface, &location).await,
                Err(err) => tracing::warn!(error = %err, "bad location"),
            },
            Line::Help => println!("{HELP}"),
            Line::Quit => break,
            Line::Unknown(name) => println!("unknown command :{name}; try :help"),
        }
    }

    Ok(())
}

async fn follow(backend: &Arc<HttpBackendClient>, surface: &Arc<TerminalSurface>, nav: &Navigation) {
    match PageLocation::parse(&nav.location()) {
        Ok(location) => crate::open_page(backend, surface, &location).await,
        Err(err) => tracing::error!(error = %err, "navigation produced an unparsable location"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_typed_input() {
        assert_eq!(parse_line("tc"), Line::Typed("tc"));
        assert_eq!(parse_line(""), Line::Typed(""));
    }

    #[test]
    fn commands_take_optional_arguments() {
        assert_eq!(parse_line(":submit"), Line::Submit);
        assert_eq!(parse_line(":compare INFY.NS"), Line::Compare(Some("INFY.NS")));
        assert_eq!(parse_line(":compare"), Line::Compare(None));
        assert_eq!(parse_line(":compare   "), Line::Compare(None));
        assert_eq!(parse_line(":pick 2"), Line::Pick(Some(2)));
        assert_eq!(parse_line(":pick x"), Line::Pick(None));
        assert_eq!(parse_line(":open /result?symbol=TCS"), Line::Open("/result?symbol=TCS"));
        assert_eq!(parse_line(":q"), Line::Quit);
        assert_eq!(parse_line(":nope"), Line::Unknown("nope"));
    }
}
