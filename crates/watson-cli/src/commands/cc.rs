use anyhow::Context;
use watson_compare_comply::{CompareComplyV1, GetBatchOptions, ListBatchesOptions};
use watson_config::WatsonConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CcCommands;
use crate::output::output;

pub async fn handle(
    action: &CcCommands,
    config: &WatsonConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    config.service("compare_comply")?;
    let client = CompareComplyV1::from_config(config)
        .context("failed to build compare_comply client")?;

    match action {
        CcCommands::Batches => {
            let response = client
                .list_batches(&ListBatchesOptions::new())
                .await
                .context("failed to list batches")?;
            output(&response.result, flags.format)
        }
        CcCommands::Batch { batch_id } => {
            let response = client
                .get_batch(&GetBatchOptions::new(batch_id))
                .await
                .with_context(|| format!("failed to fetch batch {batch_id}"))?;
            output(&response.result, flags.format)
        }
    }
}
