//! Quill - command-driven text editor
//!
//! Runs a scripted editing session against a fresh editor and prints the
//! document after each command.

use quill::{build_clipboard, logging, run_demo, Args, EditorApp, QuillConfig, Result};
use quill_core::config::{load_config, load_from_file};
use quill_core::{ClipboardBackend, CommandExecuted, EventBus, TextChanged};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();
    tracing::debug!(version = quill_core::version(), "starting quill");
    let cwd = std::env::current_dir()?;

    // Load configuration
    let loaded = match &args.config {
        Some(path) => load_from_file(path),
        None => load_config(&cwd),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        QuillConfig::default()
    });

    let backend = if args.system_clipboard {
        ClipboardBackend::System
    } else {
        config.clipboard.backend
    };

    let mut app = EditorApp::with_clipboard(config.history.capacity, build_clipboard(backend));
    app.on_text_changed(|e| tracing::info!(kind = ?e.kind, "text changed"));

    let bus = EventBus::new(1024);
    if args.json {
        app.on_text_changed(bus.listener::<TextChanged>());
        app.on_command_executed(bus.listener::<CommandExecuted>());
    }

    for line in run_demo(&app).await {
        println!("{}", line);
    }

    for event in bus.drain(1024) {
        println!("{}", serde_json::to_string(&event)?);
    }

    Ok(())
}
