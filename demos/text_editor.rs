//! Text Editor History
//!
//! This example drives a tiny editor buffer through the timeline store.
//!
//! Key concepts:
//! - Recording edits with values and updater functions
//! - Undo, redo and jumping to any point in history
//! - Writing after an undo discards the redo branch
//! - Rendering from a derived view
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example text_editor

use rewind::config::TimelineConfig;
use rewind::store::{SetState, TimelineStore, TimelineView};

fn render(view: &TimelineView<String>) {
    println!("  buffer: {:?}", view.current);
    for (text, index) in &view.past {
        println!("    past   #{index}: {text:?}");
    }
    for (text, index) in &view.future {
        println!("    future #{index}: {text:?}");
    }
    println!("  undo: {}  redo: {}", view.can_undo, view.can_redo);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    println!("=== Text Editor History Example ===\n");

    let config = TimelineConfig::from_json(r#"{ "max_timeline_size": 4 }"#)?;
    let editor = TimelineStore::new(String::new(), config);

    for word in ["Hello", ",", " world", "!"] {
        editor.set_state(SetState::updater(move |text: &String| format!("{text}{word}")));
    }
    println!("After typing:");
    render(&editor.view());

    editor.undo();
    editor.undo();
    println!("\nAfter two undos:");
    render(&editor.view());

    editor.set_state(SetState::updater(|text: &String| format!("{text} there")));
    println!("\nAfter typing over the redo branch:");
    render(&editor.view());

    editor.jump_to(0);
    println!("\nAfter jumping to the oldest kept snapshot:");
    render(&editor.view());

    editor.jump_to(99);
    println!("\nJumping out of range is ignored:");
    render(&editor.view());

    editor.clear();
    println!("\nAfter clearing history:");
    render(&editor.view());

    println!("\n=== Example Complete ===");
    Ok(())
}
