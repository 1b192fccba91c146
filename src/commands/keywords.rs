//! `galaxy keywords <text>` - show what the similarity engine sees

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::text::KeywordSet;

pub fn execute(cli: &Cli, keywords: &KeywordSet) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({ "keywords": keywords })),
        human => {
            println!("{}", keywords.to_vec().join(" "));
        },
        records => {
            print_records_header("keywords", &[("count", keywords.len().to_string().as_str())]);
            for keyword in keywords.iter() {
                println!("K {}", keyword);
            }
        }
    )
}
