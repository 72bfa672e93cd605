use proposal_core::catalog::render::{render_card, render_detail, render_history, render_stats};
use proposal_core::catalog::source::{JsonFileRecordSource, RecordSource, SampleRecordSource};
use proposal_core::catalog::state::Catalog;
use proposal_core::config::{DeskConfig, DEFAULT_ENDPOINT};
use proposal_core::error::CoreError;
use proposal_core::model::status::ProposalStatus;
use time::macros::date;

const RECORDS_JSON: &str = r#"[
  {
    "id": "a1",
    "title": "Festival Sponsorship",
    "type": "Sponsorship proposal",
    "contentType": "Pitch deck",
    "status": "shared",
    "createdAt": "2025-06-01",
    "updatedAt": "2025-06-03",
    "description": "Brand visibility at the summer festival",
    "pdfUrl": "/proposals/festival.pdf"
  },
  {
    "id": "a2",
    "title": "Web Dev Proposal",
    "type": "Project proposal",
    "contentType": "Report",
    "status": "draft",
    "createdAt": "2025-06-06",
    "updatedAt": "2025-06-06",
    "description": "Responsive storefront rebuild"
  }
]"#;

#[test]
fn json_file_source_loads_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, RECORDS_JSON).unwrap();

    let source = JsonFileRecordSource::new(&path);
    let records = source.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, ProposalStatus::Shared);
    assert_eq!(records[0].kind, "Sponsorship proposal");
    assert_eq!(records[0].artifact_url.as_deref(), Some("/proposals/festival.pdf"));
    assert_eq!(records[1].created_at, date!(2025 - 06 - 06));
    assert!(records[1].artifact_url.is_none());

    let out = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(out["createdAt"], "2025-06-01");
    assert_eq!(out["artifactUrl"], "/proposals/festival.pdf");
    assert!(serde_json::to_value(&records[1]).unwrap().get("artifactUrl").is_none());
}

#[test]
fn unknown_status_in_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, RECORDS_JSON.replace("\"shared\"", "\"archived\"")).unwrap();
    assert!(matches!(
        JsonFileRecordSource::new(&path).load(),
        Err(CoreError::Json(_))
    ));
}

#[test]
fn duplicate_ids_in_file_are_a_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, RECORDS_JSON.replace("\"a2\"", "\"a1\"")).unwrap();

    let err = Catalog::load(&JsonFileRecordSource::new(&path)).unwrap_err();
    match &err {
        CoreError::Validation(msg) => assert_eq!(msg, "duplicate proposal id: a1"),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.user_notice(), "duplicate proposal id: a1");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileRecordSource::new(dir.path().join("absent.json"));
    assert!(matches!(Catalog::load(&source), Err(CoreError::Io(_))));
}

#[test]
fn config_selects_record_source() {
    let dir = tempfile::tempdir().unwrap();
    let records_path = dir.path().join("records.json");
    std::fs::write(&records_path, RECORDS_JSON).unwrap();
    let cfg_path = dir.path().join("desk.json");
    std::fs::write(
        &cfg_path,
        serde_json::json!({
            "endpoint": "https://gen.example.com/proposals",
            "timeout_secs": 30,
            "records_path": records_path,
        })
        .to_string(),
    )
    .unwrap();

    let cfg = DeskConfig::load(&cfg_path).unwrap();
    assert_eq!(cfg.timeout().as_secs(), 30);
    let catalog = Catalog::load(cfg.record_source().as_ref()).unwrap();
    assert_eq!(catalog.records().len(), 2);

    let defaults = DeskConfig::default();
    assert_eq!(defaults.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(
        Catalog::load(defaults.record_source().as_ref()).unwrap().records().len(),
        SampleRecordSource.load().unwrap().len()
    );
}

#[test]
fn config_rejects_bad_endpoint_and_zero_timeout() {
    let mut cfg = DeskConfig::default();
    cfg.endpoint = "ftp://gen.example.com/".to_string();
    assert!(matches!(cfg.validate(), Err(CoreError::InvalidInput(_))));
    cfg.endpoint = "not a url".to_string();
    assert!(cfg.validate().is_err());
    cfg.endpoint = DEFAULT_ENDPOINT.to_string();
    cfg.timeout_secs = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("desk.json");
    std::fs::write(&cfg_path, r#"{"timeout_secs": 5}"#).unwrap();
    let cfg = DeskConfig::load(&cfg_path).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    assert!(cfg.records_path.is_none());
}

#[test]
fn renderings_show_key_fields() {
    let catalog = Catalog::load(&SampleRecordSource).unwrap();
    assert_eq!(
        render_stats(&catalog.counts()),
        "Total: 4 | Completed: 2 | Drafts: 1 | Shared: 1"
    );

    let card = render_card(&catalog.records()[0]);
    assert!(card.contains("completed"));
    assert!(card.contains("Marketing Campaign Proposal"));
    assert!(card.contains("[PDF]"));
    assert!(!render_card(&catalog.records()[1]).contains("[PDF]"));

    let detail = render_detail(&catalog.records()[1]);
    assert!(detail.contains("Last updated: 2024-01-16"));
    assert!(detail.contains("not generated yet"));

    let history = render_history(catalog.records());
    assert_eq!(history.lines().count(), 5);
    assert!(history.contains("2024-01-12  Event Sponsorship Package"));
}
