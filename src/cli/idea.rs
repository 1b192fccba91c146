//! Idea subcommands

use clap::{Args, Subcommand};

use super::parse::{parse_position, parse_status};
use galaxy_core::idea::{IdeaStatus, Position};

#[derive(Args, Debug)]
pub struct IdeaSubcommand {
    #[command(subcommand)]
    pub command: IdeaCommands,
}

#[derive(Subcommand, Debug)]
pub enum IdeaCommands {
    /// Capture a new idea
    Create(IdeaCreateArgs),

    /// List your ideas, oldest first
    List,

    /// Show one of your ideas
    Show {
        /// Idea id
        id: String,
    },

    /// Change fields of one of your ideas
    Update(IdeaUpdateArgs),

    /// Delete one of your ideas and its constellations
    Delete {
        /// Idea id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct IdeaCreateArgs {
    /// Idea title
    pub title: String,

    /// Longer description
    #[arg(long, short, default_value = "")]
    pub description: String,

    /// Status (spark, developing, refined, completed, archived)
    #[arg(long, short, value_parser = parse_status)]
    pub status: Option<IdeaStatus>,

    /// Canvas position as x,y
    #[arg(long, value_parser = parse_position)]
    pub position: Option<Position>,
}

#[derive(Args, Debug)]
pub struct IdeaUpdateArgs {
    /// Idea id
    pub id: String,

    /// New title
    #[arg(long, short)]
    pub title: Option<String>,

    /// New description
    #[arg(long, short)]
    pub description: Option<String>,

    /// New status
    #[arg(long, short, value_parser = parse_status)]
    pub status: Option<IdeaStatus>,

    /// New canvas position as x,y
    #[arg(long, value_parser = parse_position)]
    pub position: Option<Position>,
}
