use clap::Subcommand;

/// Compare and Comply commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CcCommands {
    /// List batch requests.
    Batches,
    /// Show one batch request.
    Batch {
        /// Batch ID.
        batch_id: String,
    },
}
