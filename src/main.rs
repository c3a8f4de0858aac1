//! Courier Inventory CLI
//!
//! Interactive console for moving goods between the store and the shop.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --lexicon russian
//! cargo run -- --format csv
//! RUST_LOG=debug cargo run
//! ```
//!
//! The program prints both inventories, reads one request per line from stdin
//! and reports the courier's progress on stdout until the stop word is typed
//! or input ends. Log output goes to stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally
//! - 1: Error (console I/O failure, invalid initial stock)

use courier_inventory::{cli, console, observability};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    observability::init();

    let mut session = match console::create_session(&args) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut output = std::io::stdout();
    if let Err(e) = session.run(stdin.lock(), &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
