//! `galaxy related <id>` - other users' ideas similar to one of yours

use crate::cli::Cli;
use crate::commands::format::{
    print_candidates_human, print_candidates_records, print_json, print_records_header,
};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::similarity::RelatedCandidate;

pub fn execute(cli: &Cli, idea_id: &str, related: &[RelatedCandidate]) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&serde_json::to_value(related)?),
        human => {
            if related.is_empty() {
                if !cli.quiet {
                    println!("No related ideas found");
                }
            } else {
                print_candidates_human(related);
            }
        },
        records => {
            print_records_header(
                "related",
                &[("idea", idea_id), ("results", related.len().to_string().as_str())],
            );
            print_candidates_records(related);
        }
    )
}
