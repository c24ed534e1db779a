use watson_config::WatsonConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding service handler.
pub async fn dispatch(
    command: Commands,
    config: &WatsonConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Stt { action } => commands::stt::handle(&action, config, flags).await,
        Commands::Nlc { action } => commands::nlc::handle(&action, config, flags).await,
        Commands::Cc { action } => commands::cc::handle(&action, config, flags).await,
    }
}
