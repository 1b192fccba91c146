//! Constellation subcommands

use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ConstellationSubcommand {
    #[command(subcommand)]
    pub command: ConstellationCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConstellationCommands {
    /// Link two of your ideas
    Create {
        /// First idea id
        idea_a: String,

        /// Second idea id
        idea_b: String,
    },

    /// List your constellations
    List,

    /// Remove one of your constellations
    Delete {
        /// Constellation id
        id: String,
    },
}
