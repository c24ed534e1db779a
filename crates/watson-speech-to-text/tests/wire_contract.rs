//! Representative operations of every resource against a mock service.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use watson_core::{Authenticator, BaseService, WatsonError};
use watson_speech_to_text::jobs::event;
use watson_speech_to_text::recognize::content_type;
use watson_speech_to_text::{
    AddAudioOptions, AddCorpusOptions, AddGrammarOptions, AddWordOptions, AddWordsOptions,
    CreateAcousticModelOptions, CreateJobOptions, CreateLanguageModelOptions, CustomWord,
    CustomizationOptions, DeleteUserDataOptions, GetModelOptions, JobOptions,
    ListCustomizationsOptions, ListOptions, ListWordsOptions, RecognitionJob, RecognitionParams,
    RecognizeOptions, RegisterCallbackOptions, ResourceOptions, SpeechToTextV1,
    TrainAcousticModelOptions, TrainLanguageModelOptions, UnregisterCallbackOptions,
    UpgradeAcousticModelOptions,
};
use wiremock::matchers::{
    body_bytes, body_json, body_string_contains, header, header_regex, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> SpeechToTextV1 {
    let service = BaseService::new(server.uri(), Authenticator::bearer("token")).unwrap();
    SpeechToTextV1::with_service(service)
}

#[tokio::test]
async fn list_models_and_get_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("authorization", "Bearer token"))
        .and(header_regex(
            "x-ibmcloud-sdk-analytics",
            "service_name=speech_to_text;service_version=V1;operation_id=ListModels",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "en-US_BroadbandModel", "language": "en-US", "rate": 16000},
                {"name": "en-US_NarrowbandModel", "language": "en-US", "rate": 8000}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/models/en-US_BroadbandModel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "en-US_BroadbandModel",
            "rate": 16000,
            "supported_features": {"custom_language_model": true, "speaker_labels": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let models = stt.list_models(&ListOptions::new()).await.unwrap();
    assert_eq!(models.result.models.len(), 2);
    assert_eq!(models.result.models[1].rate, Some(8000));

    let model = stt
        .get_model(&GetModelOptions::new("en-US_BroadbandModel"))
        .await
        .unwrap();
    assert!(model.result.supported_features.unwrap().custom_language_model);
}

#[tokio::test]
async fn recognize_sends_raw_audio_with_params() {
    let audio = b"RIFF....WAVEfmt ".to_vec();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .and(header("content-type", "audio/wav"))
        .and(query_param("model", "en-US_BroadbandModel"))
        .and(query_param("keywords", "hail,rain"))
        .and(query_param("keywords_threshold", "0.5"))
        .and(query_param("timestamps", "true"))
        .and(query_param_is_missing("speaker_labels"))
        .and(body_bytes(audio.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result_index": 0,
            "results": [{
                "final": true,
                "alternatives": [{
                    "transcript": "hail is likely ",
                    "confidence": 0.91,
                    "timestamps": [["hail", 0.1, 0.5], ["is", 0.5, 0.6], ["likely", 0.6, 1.0]]
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = RecognitionParams::new()
        .with_model("en-US_BroadbandModel")
        .with_keywords(vec!["hail".into(), "rain".into()], 0.5)
        .with_timestamps(true);
    let options = RecognizeOptions::new(audio)
        .with_content_type(content_type::AUDIO_WAV)
        .with_params(params);
    let response = client(&server).recognize(&options).await.unwrap();

    assert_eq!(response.result.transcript(), "hail is likely");
    assert_eq!(response.result.results[0].alternatives[0].timestamps.len(), 3);
}

#[tokio::test]
async fn recognize_defaults_to_octet_stream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .and(header("content-type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .recognize(&RecognizeOptions::new(b"fLaC".to_vec()))
        .await
        .unwrap();
    assert_eq!(response.result.transcript(), "");
}

#[tokio::test]
async fn register_callback_and_create_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/register_callback"))
        .and(query_param("callback_url", "https://example.com/results"))
        .and(query_param("user_secret", "s3cret"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "created",
            "url": "https://example.com/results"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/recognitions"))
        .and(query_param("callback_url", "https://example.com/results"))
        .and(query_param("events", "recognitions.started,recognitions.completed"))
        .and(query_param("user_token", "job-7"))
        .and(query_param("results_ttl", "60"))
        .and(header("content-type", "audio/flac"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "4bd734c0-e575-21f3-de03-f932aa0468a0",
            "status": "waiting",
            "created": "2016-08-17T19:13:23.622Z",
            "url": "https://stream.watsonplatform.net/speech-to-text/api/v1/recognitions/4bd734c0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let registered = stt
        .register_callback(
            &RegisterCallbackOptions::new("https://example.com/results").with_user_secret("s3cret"),
        )
        .await
        .unwrap();
    assert_eq!(registered.status_code, 201);
    assert_eq!(registered.result.status.as_deref(), Some("created"));

    let options = CreateJobOptions::new(b"fLaC-audio".to_vec())
        .with_content_type(content_type::AUDIO_FLAC)
        .with_callback(
            "https://example.com/results",
            vec![event::STARTED.into(), event::COMPLETED.into()],
        )
        .with_user_token("job-7")
        .with_results_ttl(60);
    let job = stt.create_job(&options).await.unwrap();
    assert_eq!(job.result.status.as_deref(), Some(RecognitionJob::STATUS_WAITING));
    assert!(!job.result.is_finished());
    assert!(job.result.created.is_some());
}

#[tokio::test]
async fn check_job_returns_results_and_delete_job() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recognitions/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-1",
            "status": "completed",
            "results": [{"results": [{"final": true, "alternatives": [{"transcript": "done "}]}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/recognitions/job-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let job = stt.check_job(&JobOptions::new("job-1")).await.unwrap();
    assert!(job.result.is_finished());
    assert_eq!(job.result.results[0].transcript(), "done");

    let deleted = stt.delete_job(&JobOptions::new("job-1")).await.unwrap();
    assert_eq!(deleted.status_code, 204);
}

#[tokio::test]
async fn language_model_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations"))
        .and(body_json(json!({
            "name": "Example model",
            "base_model_name": "en-US_BroadbandModel",
            "description": "Example custom language model"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"customization_id": "lm-1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customizations"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customizations": [{"customization_id": "lm-1", "status": "pending"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/lm-1/train"))
        .and(query_param("word_type_to_add", "user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "warnings": [{"code": "invalid_audio_files", "message": "skipped 1 file"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let created = stt
        .create_language_model(
            &CreateLanguageModelOptions::new("Example model", "en-US_BroadbandModel")
                .with_description("Example custom language model"),
        )
        .await
        .unwrap();
    assert_eq!(created.result.customization_id, "lm-1");

    let listed = stt
        .list_language_models(&ListCustomizationsOptions::new().with_language("en-US"))
        .await
        .unwrap();
    assert_eq!(listed.result.customizations.len(), 1);

    let trained = stt
        .train_language_model(&TrainLanguageModelOptions::new("lm-1").with_word_type_to_add("user"))
        .await
        .unwrap();
    assert_eq!(
        trained.result.warnings[0].code.as_deref(),
        Some("invalid_audio_files")
    );
}

#[tokio::test]
async fn add_corpus_uploads_text_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/lm-1/corpora/weather"))
        .and(query_param("allow_overwrite", "true"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"corpus_file\""))
        .and(body_string_contains("Thunderstorms could produce large hail"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let options = AddCorpusOptions::new(
        "lm-1",
        "weather",
        b"Thunderstorms could produce large hail\n".to_vec(),
    )
    .with_allow_overwrite(true);
    let response = client(&server).add_corpus(&options).await.unwrap();
    assert_eq!(response.status_code, 201);
}

#[tokio::test]
async fn words_are_listed_added_and_fetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customizations/lm-1/words"))
        .and(query_param("word_type", "user"))
        .and(query_param("sort", "-count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "words": [{"word": "IEEE", "sounds_like": ["i triple e"], "count": 3, "source": ["user"]}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/lm-1/words"))
        .and(body_json(json!({"words": [{"word": "IEEE", "sounds_like": ["i triple e"]}]})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/customizations/lm-1/words/NCAA"))
        .and(body_json(json!({"sounds_like": ["n c double a"], "display_as": "NCAA"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customizations/lm-1/words/NCAA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "word": "NCAA",
            "sounds_like": ["n c double a"],
            "display_as": "NCAA",
            "count": 0,
            "source": ["user"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let words = stt
        .list_words(&ListWordsOptions::new("lm-1").with_word_type("user").with_sort("-count"))
        .await
        .unwrap();
    assert_eq!(words.result.words[0].count, 3);

    let added = vec![CustomWord::new("IEEE").with_sounds_like(vec!["i triple e".into()])];
    stt.add_words(&AddWordsOptions::new("lm-1", added)).await.unwrap();

    let options = AddWordOptions::new("lm-1", "NCAA")
        .with_sounds_like(vec!["n c double a".into()])
        .with_display_as("NCAA");
    stt.add_word(&options).await.unwrap();

    let word = stt.get_word(&ResourceOptions::new("lm-1", "NCAA")).await.unwrap();
    assert_eq!(word.result.display_as.as_deref(), Some("NCAA"));
}

#[tokio::test]
async fn add_grammar_sends_source_as_is() {
    let grammar = b"#ABNF 1.0 ISO-8859-1;\nroot $yesno;\n$yesno = yes | no;".to_vec();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/lm-1/grammars/yesno"))
        .and(header("content-type", "application/srgs"))
        .and(body_bytes(grammar.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let options = AddGrammarOptions::new("lm-1", "yesno", grammar, "application/srgs");
    let response = client(&server).add_grammar(&options).await.unwrap();
    assert_eq!(response.status_code, 201);
}

#[tokio::test]
async fn acoustic_model_create_and_upgrade() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/acoustic_customizations"))
        .and(body_json(json!({"name": "Noisy", "base_model_name": "en-US_BroadbandModel"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"customization_id": "am-1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/acoustic_customizations/am-1/upgrade_model"))
        .and(query_param("custom_language_model_id", "lm-1"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let created = stt
        .create_acoustic_model(&CreateAcousticModelOptions::new(
            "Noisy",
            "en-US_BroadbandModel",
        ))
        .await
        .unwrap();
    assert_eq!(created.result.customization_id, "am-1");

    let options = UpgradeAcousticModelOptions::new("am-1")
        .with_custom_language_model_id("lm-1")
        .with_force(true);
    stt.upgrade_acoustic_model(&options).await.unwrap();
}

#[tokio::test]
async fn add_audio_archive_sets_contained_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/acoustic_customizations/am-1/audio/batch1"))
        .and(header("content-type", "application/zip"))
        .and(header("contained-content-type", "audio/wav"))
        .and(query_param("allow_overwrite", "false"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/acoustic_customizations/am-1/audio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_minutes_of_audio": 0.75,
            "audio": [{"name": "batch1", "details": {"type": "archive", "compression": "zip"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stt = client(&server);
    let options = AddAudioOptions::new("am-1", "batch1", b"PK\x03\x04".to_vec())
        .with_content_type("application/zip")
        .with_contained_content_type(content_type::AUDIO_WAV)
        .with_allow_overwrite(false);
    stt.add_audio(&options).await.unwrap();

    let listed = stt.list_audio(&CustomizationOptions::new("am-1")).await.unwrap();
    let details = listed.result.audio[0].details.clone().unwrap();
    assert_eq!(details.kind.as_deref(), Some("archive"));
}

#[tokio::test]
async fn delete_user_data_passes_customer_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/user_data"))
        .and(query_param("customer_id", "customer-42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .delete_user_data(&DeleteUserDataOptions::new("customer-42"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn service_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customizations/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"code": 404, "error": "Customization ID 'missing' not found"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_language_model(&CustomizationOptions::new("missing"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, WatsonError::Api { ref message, .. } if message.contains("not found")));
}

#[tokio::test]
async fn empty_audio_never_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .recognize(&RecognizeOptions::new(Vec::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, WatsonError::MissingParameter("audio")));
}

#[tokio::test]
async fn per_call_content_type_wins_over_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .and(header("content-type", "audio/wav"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = RecognizeOptions::new(b"RIFF".to_vec()).with_header("Content-Type", "audio/wav");
    client(&server).recognize(&options).await.unwrap();
}

#[tokio::test]
async fn null_lists_decode_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": null,
            "speaker_labels": null,
            "warnings": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .recognize(&RecognizeOptions::new(b"fLaC".to_vec()))
        .await
        .unwrap();
    assert!(response.result.results.is_empty());
    assert!(response.result.warnings.is_empty());
}

#[tokio::test]
async fn unregister_callback_passes_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/unregister_callback"))
        .and(query_param("callback_url", "https://example.com/results"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .unregister_callback(&UnregisterCallbackOptions::new("https://example.com/results"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn check_jobs_lists_recognitions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/recognitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recognitions": [
                {"id": "job-1", "status": "completed"},
                {"id": "job-2", "status": "processing"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client(&server).check_jobs(&ListOptions::new()).await.unwrap();
    assert_eq!(jobs.result.recognitions.len(), 2);
    assert!(jobs.result.recognitions[0].is_finished());
    assert!(!jobs.result.recognitions[1].is_finished());
}

#[tokio::test]
async fn list_acoustic_models_by_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/acoustic_customizations"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customizations": [{"customization_id": "am-1", "status": "ready"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listed = client(&server)
        .list_acoustic_models(&ListCustomizationsOptions::new().with_language("en-US"))
        .await
        .unwrap();
    assert_eq!(listed.result.customizations[0].customization_id, "am-1");
}

#[tokio::test]
async fn train_acoustic_model_with_language_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/acoustic_customizations/am-1/train"))
        .and(query_param("custom_language_model_id", "lm-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let options = TrainAcousticModelOptions::new("am-1").with_custom_language_model_id("lm-1");
    let trained = client(&server).train_acoustic_model(&options).await.unwrap();
    assert!(trained.result.warnings.is_empty());
}

#[derive(Debug, Clone, Copy)]
enum ByIdCall {
    GetLanguageModel,
    DeleteLanguageModel,
    ResetLanguageModel,
    UpgradeLanguageModel,
    ListCorpora,
    GetCorpus,
    DeleteCorpus,
    DeleteWord,
    ListGrammars,
    GetGrammar,
    DeleteGrammar,
    GetAcousticModel,
    DeleteAcousticModel,
    ResetAcousticModel,
    GetAudio,
    DeleteAudio,
}

async fn call(stt: &SpeechToTextV1, op: ByIdCall) -> Result<u16, WatsonError> {
    let model = CustomizationOptions::new("cust-1");
    let resource = ResourceOptions::new("cust-1", "item-1");
    Ok(match op {
        ByIdCall::GetLanguageModel => stt.get_language_model(&model).await?.status_code,
        ByIdCall::DeleteLanguageModel => stt.delete_language_model(&model).await?.status_code,
        ByIdCall::ResetLanguageModel => stt.reset_language_model(&model).await?.status_code,
        ByIdCall::UpgradeLanguageModel => stt.upgrade_language_model(&model).await?.status_code,
        ByIdCall::ListCorpora => stt.list_corpora(&model).await?.status_code,
        ByIdCall::GetCorpus => stt.get_corpus(&resource).await?.status_code,
        ByIdCall::DeleteCorpus => stt.delete_corpus(&resource).await?.status_code,
        ByIdCall::DeleteWord => stt.delete_word(&resource).await?.status_code,
        ByIdCall::ListGrammars => stt.list_grammars(&model).await?.status_code,
        ByIdCall::GetGrammar => stt.get_grammar(&resource).await?.status_code,
        ByIdCall::DeleteGrammar => stt.delete_grammar(&resource).await?.status_code,
        ByIdCall::GetAcousticModel => stt.get_acoustic_model(&model).await?.status_code,
        ByIdCall::DeleteAcousticModel => stt.delete_acoustic_model(&model).await?.status_code,
        ByIdCall::ResetAcousticModel => stt.reset_acoustic_model(&model).await?.status_code,
        ByIdCall::GetAudio => stt.get_audio(&resource).await?.status_code,
        ByIdCall::DeleteAudio => stt.delete_audio(&resource).await?.status_code,
    })
}

#[rstest]
#[case::get_language_model(ByIdCall::GetLanguageModel, "GET", "/v1/customizations/cust-1")]
#[case::delete_language_model(ByIdCall::DeleteLanguageModel, "DELETE", "/v1/customizations/cust-1")]
#[case::reset_language_model(ByIdCall::ResetLanguageModel, "POST", "/v1/customizations/cust-1/reset")]
#[case::upgrade_language_model(
    ByIdCall::UpgradeLanguageModel,
    "POST",
    "/v1/customizations/cust-1/upgrade_model"
)]
#[case::list_corpora(ByIdCall::ListCorpora, "GET", "/v1/customizations/cust-1/corpora")]
#[case::get_corpus(ByIdCall::GetCorpus, "GET", "/v1/customizations/cust-1/corpora/item-1")]
#[case::delete_corpus(ByIdCall::DeleteCorpus, "DELETE", "/v1/customizations/cust-1/corpora/item-1")]
#[case::delete_word(ByIdCall::DeleteWord, "DELETE", "/v1/customizations/cust-1/words/item-1")]
#[case::list_grammars(ByIdCall::ListGrammars, "GET", "/v1/customizations/cust-1/grammars")]
#[case::get_grammar(ByIdCall::GetGrammar, "GET", "/v1/customizations/cust-1/grammars/item-1")]
#[case::delete_grammar(
    ByIdCall::DeleteGrammar,
    "DELETE",
    "/v1/customizations/cust-1/grammars/item-1"
)]
#[case::get_acoustic_model(ByIdCall::GetAcousticModel, "GET", "/v1/acoustic_customizations/cust-1")]
#[case::delete_acoustic_model(
    ByIdCall::DeleteAcousticModel,
    "DELETE",
    "/v1/acoustic_customizations/cust-1"
)]
#[case::reset_acoustic_model(
    ByIdCall::ResetAcousticModel,
    "POST",
    "/v1/acoustic_customizations/cust-1/reset"
)]
#[case::get_audio(ByIdCall::GetAudio, "GET", "/v1/acoustic_customizations/cust-1/audio/item-1")]
#[case::delete_audio(
    ByIdCall::DeleteAudio,
    "DELETE",
    "/v1/acoustic_customizations/cust-1/audio/item-1"
)]
#[tokio::test]
async fn by_id_operations_hit_their_route(
    #[case] op: ByIdCall,
    #[case] http_method: &str,
    #[case] route: &str,
) {
    let server = MockServer::start().await;
    Mock::given(method(http_method))
        .and(path(route))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let status = call(&client(&server), op).await.unwrap();
    assert_eq!(status, 200);
}
