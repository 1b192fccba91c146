//! Handlers for constellation commands

use super::command::CommandContext;
use super::trace_command;
use crate::cli::constellation::ConstellationCommands;
use crate::commands;
use galaxy_core::error::Result;

pub(super) fn handle(ctx: &CommandContext, command: &ConstellationCommands) -> Result<()> {
    let (store, user) = ctx.store_and_user()?;

    let result = match command {
        ConstellationCommands::Create { idea_a, idea_b } => {
            let constellation = store.create_constellation(&user.id, idea_a, idea_b)?;
            commands::constellation::output_created(ctx.cli, &constellation)
        }
        ConstellationCommands::List => {
            let constellations = store.list_constellations(&user.id)?;
            commands::constellation::output_list(ctx.cli, &constellations)
        }
        ConstellationCommands::Delete { id } => {
            store.delete_constellation(&user.id, id)?;
            commands::constellation::output_deleted(ctx.cli, id)
        }
    };
    trace_command!(ctx.cli, ctx.start, "execute_command");
    result
}
