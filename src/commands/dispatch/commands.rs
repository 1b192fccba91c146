//! Routing from parsed commands to handlers

use super::command::{Command, CommandContext};
use super::{accounts, constellations, discovery, ideas};
use crate::cli::Commands;
use galaxy_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => accounts::handle_init(ctx),
            Commands::Signup(args) => accounts::handle_signup(ctx, args),
            Commands::Login(args) => accounts::handle_login(ctx, args),
            Commands::Whoami => accounts::handle_whoami(ctx),
            Commands::Idea(sub) => ideas::handle(ctx, &sub.command),
            Commands::Constellation(sub) => constellations::handle(ctx, &sub.command),
            Commands::Related(args) => discovery::handle_related(ctx, args),
            Commands::Discover => discovery::handle_discover(ctx),
            Commands::Profile(args) => discovery::handle_profile(ctx, args),
            Commands::Keywords(args) => discovery::handle_keywords(ctx, args),
            Commands::Reindex => discovery::handle_reindex(ctx),
        }
    }
}
