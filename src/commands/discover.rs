//! `galaxy discover` - ideas matching everything you have written

use crate::cli::Cli;
use crate::commands::format::{
    print_candidates_human, print_candidates_records, print_json, print_records_header,
};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::store::DiscoverReport;

pub fn execute(cli: &Cli, report: &DiscoverReport) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&serde_json::to_value(report)?),
        human => {
            if report.cold_start && !cli.quiet {
                println!("You have no ideas yet; here are some public ones to start with.");
                println!();
            }
            if report.results.is_empty() {
                if !cli.quiet {
                    println!("Nothing to discover yet");
                }
            } else {
                print_candidates_human(&report.results);
            }
        },
        records => {
            print_records_header(
                "discover",
                &[
                    ("cold_start", report.cold_start.to_string().as_str()),
                    ("results", report.results.len().to_string().as_str()),
                ],
            );
            print_candidates_records(&report.results);
        }
    )
}
