//! Top-level galaxy commands

use clap::Subcommand;

pub mod core;

use crate::cli::constellation::ConstellationSubcommand;
use crate::cli::idea::IdeaSubcommand;
use core::*;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new galaxy store
    Init,

    /// Create an account and make it the active user
    Signup(SignupArgs),

    /// Switch the active user
    Login(LoginArgs),

    /// Show the active user
    Whoami,

    /// Create, list, show, update and delete ideas
    Idea(IdeaSubcommand),

    /// Link ideas into constellations
    Constellation(ConstellationSubcommand),

    /// Other users' ideas similar to one of yours
    Related(RelatedArgs),

    /// Other users' ideas matching everything you have written
    Discover,

    /// A user's public ideas and constellations
    Profile(ProfileArgs),

    /// Print the keywords extracted from text
    Keywords(KeywordsArgs),

    /// Recompute every idea's keyword cache
    Reindex,
}
