//! Output for `galaxy constellation ...`

use crate::cli::Cli;
use crate::commands::format::{
    constellation_json, constellation_line, constellation_record, print_json, print_records_header,
};
use crate::output_by_format_result;
use galaxy_core::constellation::Constellation;
use galaxy_core::error::Result;
use serde_json::json;

pub fn output_created(cli: &Cli, constellation: &Constellation) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&constellation_json(constellation)),
        human => {
            println!("{}", constellation_line(constellation));
        },
        records => {
            print_records_header("constellation.create", &[]);
            println!("{}", constellation_record(constellation));
        }
    )
}

pub fn output_list(cli: &Cli, constellations: &[Constellation]) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!(constellations
            .iter()
            .map(constellation_json)
            .collect::<Vec<_>>())),
        human => {
            if constellations.is_empty() {
                if !cli.quiet {
                    println!("No constellations yet");
                }
            } else {
                for constellation in constellations {
                    println!("{}", constellation_line(constellation));
                }
            }
        },
        records => {
            print_records_header(
                "constellation.list",
                &[("constellations", constellations.len().to_string().as_str())],
            );
            for constellation in constellations {
                println!("{}", constellation_record(constellation));
            }
        }
    )
}

pub fn output_deleted(cli: &Cli, id: &str) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({ "status": "deleted", "id": id })),
        human => {
            if !cli.quiet {
                println!("Deleted constellation {}", id);
            }
        },
        records => {
            print_records_header("constellation.delete", &[("id", id), ("status", "deleted")]);
        }
    )
}
