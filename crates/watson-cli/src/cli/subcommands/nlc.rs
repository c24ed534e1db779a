use clap::Subcommand;

/// Natural Language Classifier commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NlcCommands {
    /// List classifiers.
    List,
    /// Classify a phrase.
    Classify {
        /// Classifier ID.
        classifier_id: String,
        /// Phrase to classify.
        text: String,
    },
}
