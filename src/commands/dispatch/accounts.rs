//! Handlers for store and account commands

use super::command::CommandContext;
use super::trace_command;
use crate::cli::commands::core::{LoginArgs, SignupArgs};
use crate::cli::paths::resolve_store_path;
use crate::commands;
use galaxy_core::error::Result;
use galaxy_core::store::Store;

pub(super) fn handle_init(ctx: &CommandContext) -> Result<()> {
    let store = match &ctx.cli.store {
        Some(path) => Store::init_at(&resolve_store_path(ctx.root, path))?,
        None => Store::init(ctx.root)?,
    };
    trace_command!(ctx.cli, ctx.start, "init_store");
    commands::init::execute(ctx.cli, &store)
}

pub(super) fn handle_signup(ctx: &CommandContext, args: &SignupArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user = store.signup(&args.email, &args.name)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    commands::account::output_user(ctx.cli, &user, "signup")
}

pub(super) fn handle_login(ctx: &CommandContext, args: &LoginArgs) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user = store.login(&args.email)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    commands::account::output_user(ctx.cli, &user, "login")
}

pub(super) fn handle_whoami(ctx: &CommandContext) -> Result<()> {
    let (_store, user) = ctx.store_and_user()?;
    commands::account::output_user(ctx.cli, &user, "whoami")
}
