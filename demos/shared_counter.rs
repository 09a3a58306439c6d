//! Shared Counter
//!
//! Several writer tasks update one timeline store while a watcher task
//! re-renders on every change.
//!
//! Key concepts:
//! - Writers are serialized by the store, so no increment is lost
//! - Subscribers are woken only when the timeline actually changes
//! - Ignored requests (undo with no past) wake nobody
//!
//! Run with: RUST_LOG=rewind=trace cargo run --example shared_counter

use rewind::config::TimelineConfig;
use rewind::store::{SetState, TimelineStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    println!("=== Shared Counter Example ===\n");

    let config = TimelineConfig::builder().max_timeline_size(10).build()?;
    let store = Arc::new(TimelineStore::new(0u64, config));

    let mut rx = store.subscribe();
    let watcher = tokio::spawn(async move {
        let mut renders = 0;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            renders += 1;
            println!(
                "render #{renders}: current={} history={}",
                state.current(),
                state.len()
            );
        }
        renders
    });

    let writers: Vec<_> = (0..4)
        .map(|id| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for _ in 0..5 {
                    store.set_state(SetState::updater(|n: &u64| n + 1));
                    tokio::task::yield_now().await;
                }
                println!("writer {id} done");
            })
        })
        .collect();

    for writer in writers {
        writer.await?;
    }

    println!("\nFinal count: {}", store.current());
    println!("Kept snapshots: {:?}", store.state().timeline());

    while store.undo() {}
    println!("Oldest kept value: {}", store.current());
    println!("Undo again changed anything: {}", store.undo());

    drop(store);
    let renders = watcher.await?;
    println!("Watcher rendered {renders} times");

    println!("\n=== Example Complete ===");
    Ok(())
}
