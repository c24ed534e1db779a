use clap::Subcommand;

use crate::cli::subcommands::{CcCommands, NlcCommands, SttCommands};

/// Top-level command tree, one group per service.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Speech to Text.
    Stt {
        #[command(subcommand)]
        action: SttCommands,
    },
    /// Natural Language Classifier.
    Nlc {
        #[command(subcommand)]
        action: NlcCommands,
    },
    /// Compare and Comply.
    Cc {
        #[command(subcommand)]
        action: CcCommands,
    },
}
