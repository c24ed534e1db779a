use std::path::Path;

use anyhow::Context;
use watson_config::WatsonConfig;
use watson_speech_to_text::models::ListModelsOptions;
use watson_speech_to_text::recognize::content_type;
use watson_speech_to_text::{GetModelOptions, RecognitionParams, RecognizeOptions, SpeechToTextV1};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SttCommands;
use crate::cli::subcommands::stt::RecognizeArgs;
use crate::output::output;

pub async fn handle(
    action: &SttCommands,
    config: &WatsonConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    config.service("speech_to_text")?;
    let client = SpeechToTextV1::from_config(config)
        .context("failed to build speech_to_text client")?;

    match action {
        SttCommands::Models => {
            let response = client
                .list_models(&ListModelsOptions::new())
                .await
                .context("failed to list models")?;
            output(&response.result, flags.format)
        }
        SttCommands::Model { model_id } => {
            let response = client
                .get_model(&GetModelOptions::new(model_id))
                .await
                .with_context(|| format!("failed to fetch model {model_id}"))?;
            output(&response.result, flags.format)
        }
        SttCommands::Recognize(args) => recognize(&client, args, flags).await,
    }
}

async fn recognize(
    client: &SpeechToTextV1,
    args: &RecognizeArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let audio = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut params = RecognitionParams::new();
    if let Some(model) = &args.model {
        params = params.with_model(model);
    }
    let mut options = RecognizeOptions::new(audio).with_params(params);
    let mime = args
        .content_type
        .as_deref()
        .or_else(|| guess_content_type(&args.file));
    if let Some(mime) = mime {
        options = options.with_content_type(mime);
    }
    tracing::debug!(
        file = %args.file.display(),
        content_type = ?options.content_type,
        "recognizing"
    );

    let response = client
        .recognize(&options)
        .await
        .with_context(|| format!("failed to recognize {}", args.file.display()))?;

    if args.transcript {
        output(&response.result.transcript(), flags.format)
    } else {
        output(&response.result, flags.format)
    }
}

/// Audio content type implied by a file extension.
fn guess_content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "wav" => content_type::AUDIO_WAV,
        "flac" => content_type::AUDIO_FLAC,
        "mp3" => content_type::AUDIO_MP3,
        "ogg" | "opus" => content_type::AUDIO_OGG,
        "webm" => content_type::AUDIO_WEBM,
        "l16" | "pcm" => content_type::AUDIO_L16,
        "ulaw" | "mulaw" => content_type::AUDIO_MULAW,
        _ => return None,
    };
    Some(mime)
}
