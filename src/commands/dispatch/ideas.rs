//! Handlers for idea commands

use super::command::CommandContext;
use super::trace_command;
use crate::cli::idea::{IdeaCommands, IdeaCreateArgs, IdeaUpdateArgs};
use crate::commands;
use galaxy_core::bail_usage;
use galaxy_core::error::Result;
use galaxy_core::idea::{IdeaPatch, NewIdea};

pub(super) fn handle(ctx: &CommandContext, command: &IdeaCommands) -> Result<()> {
    match command {
        IdeaCommands::Create(args) => handle_create(ctx, args),
        IdeaCommands::List => handle_list(ctx),
        IdeaCommands::Show { id } => handle_show(ctx, id),
        IdeaCommands::Update(args) => handle_update(ctx, args),
        IdeaCommands::Delete { id } => handle_delete(ctx, id),
    }
}

fn handle_create(ctx: &CommandContext, args: &IdeaCreateArgs) -> Result<()> {
    let (store, user) = ctx.store_and_user()?;

    let mut new = NewIdea::new(&args.title)
        .with_description(&args.description)
        .with_status(args.status.unwrap_or(store.config().default_status));
    if let Some(position) = args.position {
        new = new.with_position(position);
    }

    let idea = store.create_idea(&user.id, new)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    commands::idea::output_idea(ctx.cli, &idea, "idea.create")
}

fn handle_list(ctx: &CommandContext) -> Result<()> {
    let (store, user) = ctx.store_and_user()?;
    let ideas = store.list_ideas(&user.id)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    commands::idea::output_list(ctx.cli, &ideas)
}

fn handle_show(ctx: &CommandContext, id: &str) -> Result<()> {
    let (store, user) = ctx.store_and_user()?;
    let idea = store.get_idea(&user.id, id)?;
    commands::idea::output_idea(ctx.cli, &idea, "idea.show")
}

fn handle_update(ctx: &CommandContext, args: &IdeaUpdateArgs) -> Result<()> {
    let patch = IdeaPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        status: args.status,
        position: args.position,
    };
    if patch.is_empty() {
        bail_usage!("nothing to update (pass --title, --description, --status or --position)");
    }

    let (store, user) = ctx.store_and_user()?;
    let idea = store.update_idea(&user.id, &args.id, &patch)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    commands::idea::output_idea(ctx.cli, &idea, "idea.update")
}

fn handle_delete(ctx: &CommandContext, id: &str) -> Result<()> {
    let (mut store, user) = ctx.store_and_user()?;
    store.delete_idea(&user.id, id)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    commands::idea::output_deleted(ctx.cli, id)
}
