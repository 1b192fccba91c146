//! `galaxy init` - create a new store
//!
//! Idempotent: running it again keeps the existing config and data.

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::store::Store;

pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let root = store.root().display().to_string();
    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "store": root,
            "message": "Store initialized"
        })),
        human => {
            if !cli.quiet {
                println!("Initialized galaxy store at {}", root);
                println!();
                println!("Run `galaxy signup <email> --name <name>` to create an account.");
            }
        },
        records => {
            print_records_header("init", &[("store", root.as_str()), ("status", "ok")]);
        }
    )
}
