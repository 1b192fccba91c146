//! `galaxy profile [user]` - public ideas and constellations of a user

use crate::cli::Cli;
use crate::commands::format::{
    constellation_json, constellation_line, constellation_record, idea_json, idea_line,
    idea_record, print_json, print_records_header,
};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::store::Profile;
use serde_json::json;

pub fn execute(cli: &Cli, profile: &Profile) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "user": {
                "id": profile.user.id,
                "name": profile.user.name,
            },
            "ideas": profile.ideas.iter().map(idea_json).collect::<Vec<_>>(),
            "constellations": profile
                .constellations
                .iter()
                .map(constellation_json)
                .collect::<Vec<_>>(),
        })),
        human => {
            println!("{} ({})", profile.user.name, profile.user.id);
            println!();
            println!("Public ideas: {}", profile.ideas.len());
            for idea in &profile.ideas {
                println!("  {}", idea_line(idea));
            }
            println!("Constellations: {}", profile.constellations.len());
            for constellation in &profile.constellations {
                println!("  {}", constellation_line(constellation));
            }
        },
        records => {
            print_records_header(
                "profile",
                &[
                    ("user", profile.user.id.as_str()),
                    ("ideas", profile.ideas.len().to_string().as_str()),
                    ("constellations", profile.constellations.len().to_string().as_str()),
                ],
            );
            for idea in &profile.ideas {
                println!("{}", idea_record(idea));
            }
            for constellation in &profile.constellations {
                println!("{}", constellation_record(constellation));
            }
        }
    )
}
