// Console host - Clipboard and prompt stand-ins for a terminal session
use crate::application::host::{Clipboard, ClipboardError, Prompt};
use async_trait::async_trait;
use std::io::{ErrorKind, Write};

/// Terminals have no clipboard API; "copied" text is echoed instead.
#[derive(Debug, Default, Clone)]
pub struct ConsoleClipboard;

#[async_trait]
impl Clipboard for ConsoleClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        echo(&mut std::io::stdout(), text)
    }
}

fn echo(out: &mut impl Write, text: &str) -> Result<(), ClipboardError> {
    writeln!(out, "[clipboard] {}", text).map_err(|e| match e.kind() {
        ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed: {}", e);
            ClipboardError::Unavailable
        }
        _ => ClipboardError::Rejected(e.to_string()),
    })
}

#[derive(Debug, Default, Clone)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn prompt(&self, message: &str, value: &str) {
        println!("[prompt] {}\n{}", message, value);
    }
}
