//! Output for `galaxy idea ...`

use crate::cli::Cli;
use crate::commands::format::{idea_json, idea_line, idea_record, print_json, print_records_header};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::idea::Idea;
use serde_json::json;

/// A single idea, after create, show or update
pub fn output_idea(cli: &Cli, idea: &Idea, mode: &str) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&idea_json(idea)),
        human => {
            println!("{}", idea_line(idea));
            if mode == "idea.show" {
                if !idea.description.is_empty() {
                    println!();
                    println!("{}", idea.description);
                }
                if let Some(keywords) = idea.keywords.get() {
                    println!();
                    println!("keywords: {}", keywords.to_vec().join(", "));
                }
            }
        },
        records => {
            print_records_header(mode, &[]);
            println!("{}", idea_record(idea));
        }
    )
}

pub fn output_list(cli: &Cli, ideas: &[Idea]) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!(ideas.iter().map(idea_json).collect::<Vec<_>>())),
        human => {
            if ideas.is_empty() {
                if !cli.quiet {
                    println!("No ideas yet");
                }
            } else {
                for idea in ideas {
                    println!("{}", idea_line(idea));
                }
            }
        },
        records => {
            print_records_header("idea.list", &[("ideas", ideas.len().to_string().as_str())]);
            for idea in ideas {
                println!("{}", idea_record(idea));
            }
        }
    )
}

pub fn output_deleted(cli: &Cli, id: &str) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({ "status": "deleted", "id": id })),
        human => {
            if !cli.quiet {
                println!("Deleted idea {}", id);
            }
        },
        records => {
            print_records_header("idea.delete", &[("id", id), ("status", "deleted")]);
        }
    )
}
