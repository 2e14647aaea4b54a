//! Scripted walkthrough of the editor
//!
//! Inserts "Hello, World!", selects "World", then runs copy, cut, paste and
//! undo, reporting the document after every step.

use crate::clipboard::SystemClipboard;
use quill_core::{ClipboardBackend, Command, EditorApp, MemoryClipboard, SharedClipboard};
use std::path::PathBuf;

const SCRIPT: [&str; 4] = ["copy", "cut", "paste", "undo"];

/// Command-line arguments
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// Explicit config file instead of the usual lookup
    pub config: Option<PathBuf>,
    /// Force the OS clipboard regardless of config
    pub system_clipboard: bool,
    /// Print every editor event as a JSON line after the transcript
    pub json: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    parsed.config = args.next().map(PathBuf::from);
                }
                "--system-clipboard" => parsed.system_clipboard = true,
                "--json" => parsed.json = true,
                _ => {
                    // Ignore unknown flags
                }
            }
        }

        parsed
    }
}

/// Pick the clipboard store, falling back to memory when the OS one is unavailable
pub fn build_clipboard(backend: ClipboardBackend) -> SharedClipboard {
    match backend {
        ClipboardBackend::Memory => MemoryClipboard::shared(),
        ClipboardBackend::System => SystemClipboard::shared().unwrap_or_else(|e| {
            tracing::warn!("{}; using in-memory clipboard", e);
            MemoryClipboard::shared()
        }),
    }
}

/// Run the scripted session and return the transcript
pub async fn run_demo(app: &EditorApp) -> Vec<String> {
    let mut transcript = Vec::new();

    {
        let mut doc = app.document().lock();
        doc.insert_text("Hello, World!", 0);
        doc.select(7, 5);
        transcript.push(format!("Initial text: {}", doc.content()));
        transcript.push(format!("Selected: {}", doc.selected_text()));
    }

    for name in SCRIPT {
        let success = app.execute_command(name).await;
        let content = app.document().lock().content().to_string();
        transcript.push(format!(
            "{} -> {}: {}",
            name,
            if success { "ok" } else { "failed" },
            content
        ));
    }

    let history = app.history().lock().snapshot();
    transcript.push(format!("Command history: {} commands", history.len()));
    for command in &history {
        transcript.push(format!("- {}: {}", command.name(), command.description()));
    }

    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Args {
        Args::parse_from(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(args(&[]), Args::default());

        let parsed = args(&["--config", "quill.toml", "--json", "--bogus"]);
        assert_eq!(parsed.config, Some(PathBuf::from("quill.toml")));
        assert!(parsed.json);
        assert!(!parsed.system_clipboard);

        assert!(args(&["--system-clipboard"]).system_clipboard);
    }

    #[test]
    fn test_dangling_config_flag() {
        assert_eq!(args(&["-c"]).config, None);
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let app = EditorApp::new();
        let transcript = run_demo(&app).await;

        assert_eq!(
            transcript,
            vec![
                "Initial text: Hello, World!",
                "Selected: World",
                "copy -> ok: Hello, World!",
                "cut -> ok: Hello, !",
                "paste -> ok: Hello, World!",
                "undo -> ok: Hello, !",
                "Command history: 1 commands",
                "- Cut: Cut selected text to clipboard",
            ]
        );
    }
}
