//! Command dispatch: bridges CLI args -> core lookups -> output formatting.

pub mod config_cmd;
pub mod player;
pub mod players;
pub mod team;
pub mod teams;
pub mod util;

use mkc_core::RegistryClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a registry-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &RegistryClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Player(args) => player::handle(client, args, global).await,
        Command::Team(args) => team::handle(client, args, global).await,
        Command::Players(args) => players::handle(client, args, global).await,
        Command::Teams(args) => teams::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
