// Console driver - Line-oriented script commands and the hub event loop
use crate::application::host::{Display, element};
use crate::application::scheduler::{ClickTarget, Scheduler, UiEvent};
use crate::infrastructure::memory_page::MemoryPage;
use crate::presentation::controller::HubController;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Something the user did on the page.
    Ui(UiEvent),
    Show,
    Resolve(String),
}

pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };
    let required = |what: &str| -> Result<String, String> {
        if arg.is_empty() {
            Err(format!("'{}' needs {}", verb, what))
        } else {
            Ok(arg.to_string())
        }
    };

    let command = match verb {
        // An empty search is how the user clears the box.
        "search" => ConsoleCommand::Ui(UiEvent::SearchInput(arg.to_string())),
        "category" | "platform" => {
            let id = required("a facet id")?;
            ConsoleCommand::Ui(UiEvent::FilterClick(ClickTarget::chip(verb, Some(&id))))
        }
        "clear" | "share" => ConsoleCommand::Ui(UiEvent::FilterClick(ClickTarget::chip(verb, None))),
        "fav" => tile_click(&required("a dashboard id")?, "btn-favorite"),
        "copy" => tile_click(&required("a dashboard id")?, "btn-copy-url"),
        "open" => tile_click(&required("a dashboard id")?, "btn-primary"),
        "theme" => ConsoleCommand::Ui(UiEvent::ThemeToggle),
        "resolve" => ConsoleCommand::Resolve(required("a short code")?),
        "show" => ConsoleCommand::Show,
        "quit" | "exit" => ConsoleCommand::Ui(UiEvent::Shutdown),
        other => return Err(format!("unknown command '{}'", other)),
    };
    Ok(Some(command))
}

fn tile_click(id: &str, class: &str) -> ConsoleCommand {
    ConsoleCommand::Ui(UiEvent::GridClick(ClickTarget::tile_button(id, class)))
}

/// Plain-text view of what the page currently shows.
pub fn snapshot(page: &MemoryPage) -> String {
    let mut lines = vec![format!(
        "theme: {}",
        page.body_attribute("data-theme").unwrap_or("light")
    )];

    if let Some(search) = page.value(element::SEARCH_INPUT) {
        lines.push(format!("search: {}", search));
    }
    if let Some(filters) = page.inner_html(element::FILTER_CONTAINER) {
        lines.push(format!("filters: {}", filters));
    }
    match page.display(element::EMPTY_STATE) {
        Some(Display::Block) => {
            lines.push("dashboards: (no dashboards match)".to_string());
        }
        _ => {
            if let Some(grid) = page.inner_html(element::DASHBOARD_GRID) {
                lines.push(format!("dashboards: {}", grid));
            }
        }
    }
    if let (Some(class), Some(text)) = (page.class(element::TOAST), page.text(element::TOAST)) {
        if class.contains("show") {
            lines.push(format!("toast: {}", text));
        }
    }
    lines.join("\n")
}

/// Feed script lines into the hub until `quit` or end of input.
///
/// Page actions are handled before the next line is read, so `show` and
/// `resolve` always see the effect of earlier lines. At end of input the hub
/// keeps running for one more debounce period so a trailing search still
/// settles.
pub async fn run<R, W>(
    hub: &mut HubController<MemoryPage>,
    scheduler: Scheduler,
    mut events: mpsc::UnboundedReceiver<UiEvent>,
    input: R,
    out: &mut W,
    settle: Duration,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => match parse_command(&line) {
                        Ok(Some(ConsoleCommand::Ui(event))) => {
                            if !hub.handle(event).await {
                                break;
                            }
                        }
                        Ok(Some(ConsoleCommand::Show)) => writeln!(out, "{}", snapshot(hub.page()))?,
                        Ok(Some(ConsoleCommand::Resolve(code))) => match hub.resolve_short_url(&code) {
                            Some(url) => writeln!(out, "{} -> {}", code, url)?,
                            None => writeln!(out, "{} -> (unknown code)", code)?,
                        },
                        Ok(None) => {}
                        Err(e) => tracing::warn!("Skipping script line: {}", e),
                    },
                    None => {
                        tracing::debug!("End of input, settling pending events");
                        input_open = false;
                        scheduler.after(settle, UiEvent::Shutdown);
                    }
                }
            }
            event = events.recv() => {
                let Some(event) = event else { break };
                if !hub.handle(event).await {
                    break;
                }
            }
        }
    }

    writeln!(out, "{}", snapshot(hub.page()))?;
    Ok(())
}
