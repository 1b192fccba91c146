//! `galaxy reindex` - recompute keyword caches after stopword changes

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::store::Store;

pub fn execute(cli: &Cli, store: &Store, changed: usize) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "store": store.root().display().to_string(),
            "changed": changed,
        })),
        human => {
            if !cli.quiet {
                println!("Reindexed keywords ({} ideas changed)", changed);
            }
        },
        records => {
            print_records_header("reindex", &[("changed", changed.to_string().as_str())]);
        }
    )
}
