use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kami_core::catalog;
use kami_types::{AppEvent, DisplayEntry, Theme, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::outcome_label;
use crate::state::AppState;

/// Line-oriented terminal front-end. Free text submits a translation;
/// `:`-prefixed lines are commands. All real work happens on the other
/// side of the channel pair.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    state: Arc<AppState>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut theme = { *state.theme.read().await };
    let use_color = atty::is(atty::Stream::Stdout);
    let mut selection: Vec<String> = Vec::new();

    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                let _ = ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
                break;
            }
            event = app_to_ui_rx.recv() => {
                render(event?, &mut theme, &mut selection, use_color);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    let _ = ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
                    break;
                };
                match parse_line(&line) {
                    Command::Nothing => {}
                    Command::Help => print_help(),
                    Command::Catalog => print_catalog(&selection),
                    Command::Event(event) => {
                        let closing = matches!(event, UiEvent::Close);
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                        if closing {
                            break;
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

enum Command {
    Nothing,
    Help,
    Catalog,
    Event(UiEvent),
}

fn parse_line(line: &str) -> Command {
    let line = line.trim();

    if line.is_empty() {
        return Command::Nothing;
    }

    if !line.starts_with(':') {
        return Command::Event(UiEvent::SubmitText(line.to_string()));
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim).unwrap_or_default();

    match (command, argument) {
        (":help", _) => Command::Help,
        (":langs", _) => Command::Catalog,
        (":lang", tag) if !tag.is_empty() => Command::Event(UiEvent::ToggleTarget(tag.to_string())),
        (":copy", tag) if !tag.is_empty() => Command::Event(UiEvent::CopyResult(tag.to_string())),
        (":theme", _) => Command::Event(UiEvent::ToggleTheme),
        (":clear", _) => Command::Event(UiEvent::Reset),
        (":quit", _) | (":q", _) => Command::Event(UiEvent::Close),
        _ => {
            println!("unknown command, :help for the list");
            Command::Nothing
        }
    }
}

fn render(event: AppEvent, theme: &mut Theme, selection: &mut Vec<String>, use_color: bool) {
    match event {
        AppEvent::SelectionChanged(tags) => {
            *selection = tags;
            if selection.is_empty() {
                println!("targets: (none, add with :lang <tag>)");
            } else {
                let names: Vec<&str> = selection.iter().map(|t| catalog::name_for(t)).collect();
                println!("targets: {}", names.join(", "));
            }
        }
        AppEvent::ShowResults(entries) => {
            for entry in &entries {
                print_entry(entry, *theme, use_color);
            }
        }
        AppEvent::StatusUpdate { status, busy } => {
            if busy {
                println!("... {status}");
            } else {
                println!("{status}");
            }
        }
        AppEvent::OperationError { message } => {
            if use_color {
                println!("\x1b[31mtranslation failed: {message}\x1b[0m");
            } else {
                println!("translation failed: {message}");
            }
        }
        AppEvent::ThemeChanged(new_theme) => {
            *theme = new_theme;
            println!("theme: {}", new_theme.as_str());
        }
        // Coordinator-side events never reach this channel
        AppEvent::UiEvent(_) | AppEvent::OutcomeSettled { .. } => {}
    }
}

fn print_entry(entry: &DisplayEntry, theme: Theme, use_color: bool) {
    let label = outcome_label(&entry.outcome);
    if use_color {
        println!("  {}{}:{} {}", accent(theme), entry.language, "\x1b[0m", label);
    } else {
        println!("  {}: {}", entry.language, label);
    }
}

fn accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\x1b[96m",
        Theme::Light => "\x1b[34m",
    }
}

fn print_catalog(selection: &[String]) {
    for language in catalog::LANGUAGES {
        let marker = if selection.iter().any(|t| t == language.code) {
            "x"
        } else {
            " "
        };
        println!("  [{marker}] {}  {}", language.code, language.name);
    }
}

fn print_help() {
    println!("kami menu translator");
    println!("  <text>        translate into the selected targets");
    println!("  :lang <tag>   toggle a target language");
    println!("  :langs        list the language catalog");
    println!("  :copy <tag>   copy one result to the clipboard");
    println!("  :theme        toggle light/dark");
    println!("  :clear        reset selection, input and results");
    println!("  :quit         exit");
}
