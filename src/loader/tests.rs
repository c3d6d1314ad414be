//! Tests for YAML loader module

use super::*;
use crate::error::Error;
use crate::path::{PathPolicy, PathPolicyConfig};
use serde_json::json;
use std::io::Write;
use std::path::Path;

// ============================================================================
// Plan Loading Tests
// ============================================================================

const PLAN: &str = r#"
version: "1.0"
vars:
  section: blog
jobs:
  - name: blog-index
    kind: pagination
    records: posts.json
    component: templates/blog-list.html
    limit: 5
    path:
      type: prefix
      prefix: /blog
  - name: posts
    kind: linked
    records: posts.json
    component: templates/post.html
    path: "/blog/{{ record.slug }}"
    context:
      title: "{{ record.title }}"
    layout_field: layout
    circular: true
"#;

#[test]
fn test_load_plan() {
    let plan = load_plan_from_str(PLAN).unwrap();

    assert_eq!(plan.version, "1.0");
    assert_eq!(plan.vars, json!({"section": "blog"}));
    assert_eq!(plan.job_names(), vec!["blog-index", "posts"]);

    let index = plan.job("blog-index").unwrap();
    assert_eq!(index.kind_name(), "pagination");
    assert_eq!(index.component().as_str(), "templates/blog-list.html");
    match &index.kind {
        JobKind::Pagination { limit, path } => {
            assert_eq!(*limit, 5);
            assert_eq!(path, &PathPolicyConfig::prefix("/blog"));
        }
        JobKind::Linked { .. } => panic!("Expected pagination job"),
    }

    let posts = plan.job("posts").unwrap();
    match &posts.kind {
        JobKind::Linked {
            path,
            context,
            layout_field,
            circular,
        } => {
            assert_eq!(path, "/blog/{{ record.slug }}");
            assert_eq!(context.get("title"), Some(&json!("{{ record.title }}")));
            assert_eq!(layout_field.as_deref(), Some("layout"));
            assert!(*circular);
        }
        JobKind::Pagination { .. } => panic!("Expected linked job"),
    }
}

#[test]
fn test_pagination_defaults() {
    let yaml = r#"
jobs:
  - name: index
    kind: pagination
    records: items.json
    component: list
"#;
    let plan = load_plan_from_str(yaml).unwrap();
    assert_eq!(plan.version, "1.0");

    match plan.jobs[0].kind.setup(&json!(null)).unwrap() {
        JobSetup::Pagination(config) => {
            assert_eq!(config.limit, 10);
            assert_eq!(config.path_policy.format(1), "/");
        }
        JobSetup::Linked(..) => panic!("Expected pagination setup"),
    }
}

#[test]
fn test_linked_defaults() {
    let yaml = r#"
jobs:
  - name: posts
    kind: linked
    records: posts.json
    component: post
    path: "/{{ record.slug }}"
"#;
    let plan = load_plan_from_str(yaml).unwrap();
    match plan.jobs[0].kind.setup(&json!(null)).unwrap() {
        JobSetup::Linked(config, _extractor) => assert!(!config.circular),
        JobSetup::Pagination(_) => panic!("Expected linked setup"),
    }
}

#[test]
fn test_records_path_resolution() {
    let plan = load_plan_from_str(PLAN).unwrap();
    let job = &plan.jobs[0];
    assert_eq!(
        job.records_path(Path::new("/site/content")),
        Path::new("/site/content/posts.json")
    );
}

// ============================================================================
// Plan Validation Tests
// ============================================================================

#[test]
fn test_reject_empty_jobs() {
    let err = load_plan_from_str("jobs: []").unwrap_err();
    assert!(err.to_string().contains("at least one job"));
}

#[test]
fn test_reject_duplicate_job_names() {
    let yaml = r#"
jobs:
  - name: index
    kind: pagination
    records: a.json
    component: list
  - name: index
    kind: pagination
    records: b.json
    component: list
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("Duplicate job names"));
}

#[test]
fn test_reject_empty_component() {
    let yaml = r#"
jobs:
  - name: index
    kind: pagination
    records: a.json
    component: ""
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("component cannot be empty"));
}

#[test]
fn test_reject_zero_limit() {
    let yaml = r#"
jobs:
  - name: index
    kind: pagination
    records: a.json
    component: list
    limit: 0
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("limit"));
}

#[test]
fn test_reject_static_linked_path() {
    let yaml = r#"
jobs:
  - name: posts
    kind: linked
    records: posts.json
    component: post
    path: /posts
"#;
    assert!(load_plan_from_str(yaml).is_err());
}

#[test]
fn test_reject_unknown_kind() {
    let yaml = r#"
jobs:
  - name: posts
    kind: gallery
    records: posts.json
    component: post
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_reject_misspelled_key() {
    let yaml = r#"
jobs:
  - name: index
    kind: pagination
    records: a.json
    component: list
    limt: 3
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("limt"));
}

#[test]
fn test_reject_setting_of_other_kind() {
    let yaml = r#"
jobs:
  - name: index
    kind: pagination
    records: a.json
    component: list
    circular: true
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("`circular` is not a pagination setting"));

    let yaml = r#"
jobs:
  - name: posts
    kind: linked
    records: posts.json
    component: post
    path: "/{{ record.slug }}"
    limit: 5
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("`limit` is not a linked setting"));
}

#[test]
fn test_reject_linked_without_path() {
    let yaml = r#"
jobs:
  - name: posts
    kind: linked
    records: posts.json
    component: post
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("need a `path` template"));
}

#[test]
fn test_reject_linked_page_variable() {
    let yaml = r#"
jobs:
  - name: posts
    kind: linked
    records: posts.json
    component: post
    path: "/p/{{ page }}"
"#;
    let err = load_plan_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("invalid linked settings"));
}

#[test]
fn test_load_plan_missing_file() {
    let err = load_plan("/definitely/not/here/plan.yaml").unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

// ============================================================================
// Record Loading Tests
// ============================================================================

#[test]
fn test_record_format_detection() {
    assert_eq!(RecordFormat::from_path(Path::new("a.json")), RecordFormat::Json);
    assert_eq!(RecordFormat::from_path(Path::new("a.jsonl")), RecordFormat::JsonLines);
    assert_eq!(RecordFormat::from_path(Path::new("a.ndjson")), RecordFormat::JsonLines);
    assert_eq!(RecordFormat::from_path(Path::new("a.yml")), RecordFormat::Yaml);
    assert_eq!(RecordFormat::from_path(Path::new("a.yaml")), RecordFormat::Yaml);
    assert_eq!(RecordFormat::from_path(Path::new("records")), RecordFormat::Json);
}

#[test]
fn test_parse_json_records() {
    let records = parse_records(r#"[{"id": 1}, {"id": 2}]"#, RecordFormat::Json).unwrap();
    assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
}

#[test]
fn test_parse_json_rejects_non_array() {
    let err = parse_records(r#"{"id": 1}"#, RecordFormat::Json).unwrap_err();
    assert!(err.to_string().contains("an object"));
}

#[test]
fn test_parse_json_lines_records() {
    let content = "{\"id\": 1}\n\n{\"id\": 2}\n";
    let records = parse_records(content, RecordFormat::JsonLines).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], json!({"id": 2}));
}

#[test]
fn test_parse_yaml_records() {
    let content = "- slug: a\n  title: A\n- slug: b\n  title: B\n";
    let records = parse_records(content, RecordFormat::Yaml).unwrap();
    assert_eq!(records[0], json!({"slug": "a", "title": "A"}));
    assert_eq!(records.len(), 2);
}

#[test]
fn test_load_records_from_file() {
    let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(file, "{{\"slug\": \"a\"}}").unwrap();
    writeln!(file, "{{\"slug\": \"b\"}}").unwrap();

    let records = load_records(file.path()).unwrap();
    assert_eq!(records, vec![json!({"slug": "a"}), json!({"slug": "b"})]);
}

#[test]
fn test_load_records_bad_content() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "not json").unwrap();

    let err = load_records(file.path()).unwrap_err();
    assert!(matches!(err, Error::Records { .. }));
}
