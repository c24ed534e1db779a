//! Each operation against a mock service: method, path, query, body and the
//! decoded result.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use watson_compare_comply::batches::{action, bucket_location, function};
use watson_compare_comply::feedback::FeedbackLabels;
use watson_compare_comply::{
    AddFeedbackOptions, Category, ClassifyElementsOptions, CompareComplyV1,
    CompareDocumentsOptions, ConvertToHtmlOptions, CreateBatchOptions, DeleteFeedbackOptions,
    ExtractTablesOptions, FeedbackDataInput, GetBatchOptions, GetFeedbackOptions, Label,
    ListBatchesOptions, ListFeedbackOptions, Location, TypeLabel, UpdateBatchOptions, model,
};
use watson_core::{Authenticator, BaseService, FileData, WatsonError};
use wiremock::matchers::{
    body_partial_json, body_string_contains, header, header_regex, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION: &str = "2018-10-15";

fn client(server: &MockServer) -> CompareComplyV1 {
    let service = BaseService::new(server.uri(), Authenticator::bearer("token")).unwrap();
    CompareComplyV1::with_service(service, VERSION).unwrap()
}

fn pdf() -> FileData {
    FileData::new(b"%PDF-1.4 contract".to_vec())
        .with_file_name("contract_A.pdf")
        .with_content_type("application/pdf")
}

#[tokio::test]
async fn convert_to_html_uploads_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/html_conversion"))
        .and(query_param("version", VERSION))
        .and(query_param("model", "contracts"))
        .and(header("authorization", "Bearer token"))
        .and(header_regex("x-ibmcloud-sdk-analytics", "operation_id=ConvertToHtml"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("filename=\"contract_A.pdf\""))
        .and(body_string_contains("%PDF-1.4 contract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "num_pages": "1",
            "title": "Contract A",
            "html": "<html><body>Contract A</body></html>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ConvertToHtmlOptions::new(pdf()).with_model(model::CONTRACTS);
    let response = client(&server).convert_to_html(&options).await.unwrap();
    assert_eq!(response.result.title.as_deref(), Some("Contract A"));
}

#[tokio::test]
async fn classify_elements_decodes_elements() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/element_classification"))
        .and(query_param("version", VERSION))
        .and(query_param_is_missing("model"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model_id": "contracts",
            "elements": [{"text": "Buyer shall pay.", "types": [{"label": {"nature": "Obligation", "party": "Buyer"}}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .classify_elements(&ClassifyElementsOptions::new(pdf()))
        .await
        .unwrap();
    let element = &response.result.elements[0];
    assert_eq!(element.types[0].label.as_ref().unwrap().party, "Buyer");
}

#[tokio::test]
async fn extract_tables_decodes_cells() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/tables"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {"title": "Invoice"},
            "tables": [{"body_cells": [{"cell_id": "bodyCell-1", "text": "42", "row_index_begin": 2}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .extract_tables(&ExtractTablesOptions::new(pdf()).with_model(model::TABLES))
        .await
        .unwrap();
    let cell = &response.result.tables[0].body_cells[0];
    assert_eq!(cell.text.as_deref(), Some("42"));
    assert_eq!(cell.span.row_index_begin, 2);
}

#[tokio::test]
async fn compare_documents_sends_labels_and_both_files() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/comparison"))
        .and(query_param("version", VERSION))
        .and(query_param("file_1_label", "original"))
        .and(query_param("file_2_label", "revised"))
        .and(body_string_contains("name=\"file_1\""))
        .and(body_string_contains("name=\"file_2\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{"label": "original"}, {"label": "revised"}],
            "aligned_elements": [{"identical_text": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CompareDocumentsOptions::new(pdf(), pdf())
        .with_file_1_label("original")
        .with_file_2_label("revised");
    let response = client(&server).compare_documents(&options).await.unwrap();
    assert_eq!(response.result.documents.len(), 2);
    assert_eq!(response.result.aligned_elements[0].identical_text, Some(true));
}

#[tokio::test]
async fn add_feedback_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/feedback"))
        .and(query_param("version", VERSION))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "user_id": "user_1",
            "feedback_data": {
                "feedback_type": "element_classification",
                "location": {"begin": 214, "end": 237},
                "text": "Buyer shall pay.",
                "original_labels": {"categories": [{"label": "Amendments"}]}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback_id": "fb-1",
            "user_id": "user_1",
            "created": "2018-11-16T22:57:14+0000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = FeedbackDataInput::new(
        Location::new(214, 237),
        "Buyer shall pay.",
        FeedbackLabels::new(Vec::new(), vec![Category::new(Category::LABEL_AMENDMENTS)]),
        FeedbackLabels::new(
            vec![TypeLabel::new(Label::new("Obligation", "Buyer"))],
            Vec::new(),
        ),
    );
    let response = client(&server)
        .add_feedback(&AddFeedbackOptions::new(data).with_user_id("user_1"))
        .await
        .unwrap();
    assert_eq!(response.result.feedback_id.as_deref(), Some("fb-1"));
    assert!(response.result.created.is_some());
}

#[tokio::test]
async fn get_and_delete_feedback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feedback/fb-1"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback_id": "fb-1",
            "comment": "wrong party"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/feedback/fb-1"))
        .and(query_param("model", "contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "Successfully deleted the feedback with id fb-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let got = client
        .get_feedback(&GetFeedbackOptions::new("fb-1"))
        .await
        .unwrap();
    assert_eq!(got.result.comment.as_deref(), Some("wrong party"));

    let deleted = client
        .delete_feedback(&DeleteFeedbackOptions::new("fb-1").with_model(model::CONTRACTS))
        .await
        .unwrap();
    assert_eq!(deleted.result.status, Some(200));
}

#[tokio::test]
async fn list_feedback_forwards_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feedback"))
        .and(query_param("version", VERSION))
        .and(query_param("feedback_type", "element_classification"))
        .and(query_param("before", "2018-12-31"))
        .and(query_param("after", "2018-01-01"))
        .and(query_param("category_added", "Amendments,Asset Use"))
        .and(query_param("page_limit", "10"))
        .and(query_param("cursor", "next-1"))
        .and(query_param("sort", "-created"))
        .and(query_param("include_total", "true"))
        .and(query_param_is_missing("document_title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback": [{"feedback_id": "fb-1"}, {"feedback_id": "fb-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListFeedbackOptions::new()
        .with_feedback_type("element_classification")
        .with_before(NaiveDate::from_ymd_opt(2018, 12, 31).unwrap())
        .with_after(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
        .with_category_added("Amendments,Asset Use")
        .with_page_limit(10)
        .with_cursor("next-1")
        .with_sort("-created")
        .with_include_total(true);
    let response = client(&server).list_feedback(&options).await.unwrap();
    assert_eq!(response.result.feedback.len(), 2);
}

#[tokio::test]
async fn create_batch_sends_buckets_and_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/batches"))
        .and(query_param("version", VERSION))
        .and(query_param("function", "html_conversion"))
        .and(body_string_contains("name=\"input_credentials_file\""))
        .and(body_string_contains("name=\"output_credentials_file\""))
        .and(body_string_contains("name=\"input_bucket_name\""))
        .and(body_string_contains("docs-in"))
        .and(body_string_contains("docs-out"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "batch_id": "b-1",
            "function": "html_conversion",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let creds = FileData::new(br#"{"cos_hmac_keys": {}}"#.to_vec());
    let options = CreateBatchOptions::new(function::HTML_CONVERSION, creds.clone(), creds)
        .with_input_bucket(bucket_location::CLOUD, "docs-in")
        .with_output_bucket(bucket_location::CLOUD, "docs-out");
    let response = client(&server).create_batch(&options).await.unwrap();
    assert_eq!(response.status_code, 201);
    assert_eq!(response.result.batch_id.as_deref(), Some("b-1"));
}

#[tokio::test]
async fn list_get_and_update_batches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/batches"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batches": [{"batch_id": "b-1"}, {"batch_id": "b-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/batches/b-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batch_id": "b-1",
            "document_counts": {"total": 3, "pending": 0, "successful": 3, "failed": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/batches/b-1"))
        .and(query_param("action", "rescan"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "batch_id": "b-1",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let list = client.list_batches(&ListBatchesOptions::new()).await.unwrap();
    assert_eq!(list.result.batches.len(), 2);

    let batch = client.get_batch(&GetBatchOptions::new("b-1")).await.unwrap();
    assert_eq!(batch.result.document_counts.unwrap().total, Some(3));

    let updated = client
        .update_batch(&UpdateBatchOptions::new("b-1", action::RESCAN))
        .await
        .unwrap();
    assert_eq!(updated.status_code, 202);
}

#[tokio::test]
async fn service_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/batches/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("batch not found"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_batch(&GetBatchOptions::new("nope"))
        .await
        .unwrap_err();
    match err {
        WatsonError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "batch not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
