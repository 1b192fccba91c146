//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use galaxy_core::error::Result;
use galaxy_core::store::Store;
use galaxy_core::user::User;

/// Discover or open a store based on CLI configuration
pub fn discover_or_open_store(cli: &Cli, root: &Path) -> Result<Store> {
    match &cli.store {
        Some(path) => Store::open(&resolve_store_path(root, path)),
        None => Store::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_store(&self) -> Result<Store> {
        let store = discover_or_open_store(self.cli, self.root)?;
        super::trace_command!(self.cli, self.start, "discover_store");
        Ok(store)
    }

    /// Open the store and resolve the user commands act for
    pub fn store_and_user(&self) -> Result<(Store, User)> {
        let store = self.discover_or_open_store()?;
        let user = store.active_user()?;
        Ok((store, user))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("galaxy {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("An idea journal that finds related ideas by keyword overlap.");
        println!();
        println!("Run `galaxy --help` for usage information.");
        Ok(())
    }
}
