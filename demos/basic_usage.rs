//! Basic logger usage example
//!
//! Demonstrates hierarchical thresholds and the per-priority calls.
//!
//! Run with: cargo run --example basic_usage

use rust_hierarchical_logger::prelude::*;
use rust_hierarchical_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Hierarchical Logger - Basic Usage Example ===\n");

    // Loggers need no registration; this one inherits the root settings
    let app = rust_hierarchical_logger::logger("app");
    let db = rust_hierarchical_logger::logger("app.db");
    let pool = rust_hierarchical_logger::logger("app.db.pool");

    println!("1. Logging through the root defaults (threshold Notice):");
    app.debug(&[&"This is a debug message (hidden)"]);
    app.notice(&[&"This is a notice message"]);
    app.warning(&[&"This is a warning message"]);
    app.error(&[&"This is an error message"]);

    println!("\n2. Lowering the threshold for one subtree:");
    db.set_level(Priority::Debug)?;
    pool.debug(&[&"pool size: ", &16]);
    info!(db, "connected to ", "postgres://localhost");
    app.info(&[&"app itself is still at Notice (hidden)"]);

    println!("\n3. Custom template and no colors for the pool:");
    pool.set_format("{{Priority}} {{Logger}}> {{Message}}\n")?;
    pool.set_no_color(true)?;
    warning!(pool, "connections in use: ", 15, "/", 16);

    println!("\n4. Silencing a subtree:");
    db.set_level(Priority::Disable)?;
    db.emergency(&[&"not printed"]);
    rust_hierarchical_logger::logger("app.db.migrations").emergency(&[&"not printed either"]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
