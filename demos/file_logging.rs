//! File logging example
//!
//! Demonstrates redirecting one branch of the logger tree to a file.
//!
//! Run with: cargo run --example file_logging

use rust_hierarchical_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Hierarchical Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("hierarchical_logger_demo.log");
    let registry = Registry::new();

    // Everything under "audit" goes to the file, the rest stays on stderr
    registry.set_output("audit", Output::file(&log_path)?)?;
    registry.set_time_format("audit", "%Y-%m-%d %H:%M:%S")?;
    registry.set_no_color("audit", true)?;

    let login = registry.logger("audit.login");
    let app = registry.logger("app");

    for user in ["alice", "bob", "carol"] {
        login.notice(&[&"user ", &user, &" logged in"]);
    }
    app.warning(&[&"this one goes to stderr"]);

    registry.flush()?;

    println!("Logs written to {}", log_path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
