use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Speech to Text commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SttCommands {
    /// List the models available for recognition.
    Models,
    /// Describe one model.
    Model {
        /// Model name, e.g. en-US_BroadbandModel.
        model_id: String,
    },
    /// Transcribe an audio file.
    Recognize(RecognizeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RecognizeArgs {
    /// Audio file to send.
    pub file: PathBuf,
    /// Audio content type (guessed from the file extension when omitted).
    #[arg(long)]
    pub content_type: Option<String>,
    /// Model to recognize with.
    #[arg(long)]
    pub model: Option<String>,
    /// Print only the joined transcript instead of the full results.
    #[arg(long)]
    pub transcript: bool,
}
