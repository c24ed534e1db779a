use anyhow::Context;
use watson_config::WatsonConfig;
use watson_natural_language_classifier::{
    ClassifyOptions, ListClassifiersOptions, NaturalLanguageClassifierV1,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NlcCommands;
use crate::output::output;

pub async fn handle(
    action: &NlcCommands,
    config: &WatsonConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    config.service("natural_language_classifier")?;
    let client = NaturalLanguageClassifierV1::from_config(config)
        .context("failed to build natural_language_classifier client")?;

    match action {
        NlcCommands::List => {
            let response = client
                .list_classifiers(&ListClassifiersOptions::new())
                .await
                .context("failed to list classifiers")?;
            output(&response.result, flags.format)
        }
        NlcCommands::Classify {
            classifier_id,
            text,
        } => {
            let response = client
                .classify(&ClassifyOptions::new(classifier_id, text))
                .await
                .with_context(|| format!("failed to classify with {classifier_id}"))?;
            output(&response.result, flags.format)
        }
    }
}
