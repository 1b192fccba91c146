//! Handlers for related ideas, discovery and keyword maintenance

use super::command::CommandContext;
use super::trace_command;
use crate::cli::commands::core::{KeywordsArgs, ProfileArgs, RelatedArgs};
use crate::commands;
use galaxy_core::error::{GalaxyError, Result};
use galaxy_core::text::extract_keywords;

pub(super) fn handle_related(ctx: &CommandContext, args: &RelatedArgs) -> Result<()> {
    let (store, user) = ctx.store_and_user()?;
    let related = store.related(&user.id, &args.id)?;
    trace_command!(ctx.cli, ctx.start, "rank_related");
    commands::related::execute(ctx.cli, &args.id, &related)
}

pub(super) fn handle_discover(ctx: &CommandContext) -> Result<()> {
    let (store, user) = ctx.store_and_user()?;
    let report = store.discover_ideas(&user.id)?;
    trace_command!(ctx.cli, ctx.start, "discover");
    commands::discover::execute(ctx.cli, &report)
}

pub(super) fn handle_profile(ctx: &CommandContext, args: &ProfileArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user_id = match &args.user_id {
        Some(id) => id.clone(),
        None => store.active_user()?.id,
    };
    let profile = store.profile(&user_id)?;
    commands::profile::execute(ctx.cli, &profile)
}

pub(super) fn handle_keywords(ctx: &CommandContext, args: &KeywordsArgs) -> Result<()> {
    let text = args.text.join(" ");
    // Outside a store the built-in stopwords apply
    let keywords = match ctx.discover_or_open_store() {
        Ok(store) => store.keywords(&text),
        Err(GalaxyError::StoreNotFound { .. }) => extract_keywords(&text),
        Err(e) => return Err(e),
    };
    commands::keywords::execute(ctx.cli, &keywords)
}

pub(super) fn handle_reindex(ctx: &CommandContext) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let changed = store.reindex()?;
    trace_command!(ctx.cli, ctx.start, "reindex");
    commands::reindex::execute(ctx.cli, &store, changed)
}
