//! Tests for path module

use super::*;
use std::sync::Arc;
use test_case::test_case;

// ============================================================================
// DefaultPathPolicy Tests
// ============================================================================

#[test_case(1, "/" ; "first page is unnumbered")]
#[test_case(2, "/2" ; "second page")]
#[test_case(3, "/3" ; "third page")]
#[test_case(120, "/120" ; "large page number")]
fn test_default_policy(page: usize, expected: &str) {
    assert_eq!(DefaultPathPolicy.format(page), expected);
    assert_eq!(default_path_policy().format(page), expected);
}

#[test]
fn test_default_policy_never_numbers_first_page() {
    assert_ne!(DefaultPathPolicy.format(1), "/1");
}

// ============================================================================
// PrefixPathPolicy Tests
// ============================================================================

#[test_case(1, "/blog/" ; "first page keeps trailing slash")]
#[test_case(2, "/blog/2" ; "second page")]
#[test_case(9, "/blog/9" ; "ninth page")]
fn test_prefix_policy(page: usize, expected: &str) {
    let policy = with_prefix("/blog");
    assert_eq!(policy.format(page), expected);
}

#[test]
fn test_prefix_is_not_normalized() {
    let policy = with_prefix("/blog/");
    assert_eq!(policy.format(1), "/blog//");
    assert_eq!(policy.format(2), "/blog//2");

    let policy = with_prefix("blog");
    assert_eq!(policy.format(2), "blog/2");
}

#[test]
fn test_prefix_over_custom_base() {
    let base: SharedPathPolicy = Arc::new(|page: usize| format!("/page-{page}"));
    let policy = PrefixPathPolicy::with_base("/news", base);

    assert_eq!(policy.prefix(), "/news");
    assert_eq!(policy.format(1), "/news/page-1");
    assert_eq!(policy.format(3), "/news/page-3");
}

#[test]
fn test_prefixes_stack() {
    let inner: SharedPathPolicy = Arc::new(with_prefix("/blog"));
    let policy = PrefixPathPolicy::with_base("/en", inner);
    assert_eq!(policy.format(1), "/en/blog/");
    assert_eq!(policy.format(4), "/en/blog/4");
}

// ============================================================================
// Closure Policies
// ============================================================================

#[test]
fn test_closure_is_a_policy() {
    let policy = |page: usize| format!("/custom/path/{page}");
    assert_eq!(policy.format(2), "/custom/path/2");
}

// ============================================================================
// TemplatePathPolicy Tests
// ============================================================================

#[test]
fn test_template_policy() {
    let policy = TemplatePathPolicy::new("/archive/page/{{ page }}").unwrap();
    assert_eq!(policy.format(1), "/archive/page/1");
    assert_eq!(policy.format(12), "/archive/page/12");
}

#[test]
fn test_template_policy_first_page_override() {
    let policy = TemplatePathPolicy::new("/archive/page/{{ page }}")
        .unwrap()
        .with_first_page("/archive");
    assert_eq!(policy.format(1), "/archive");
    assert_eq!(policy.format(2), "/archive/page/2");
}

#[test]
fn test_template_policy_requires_page_variable() {
    let err = TemplatePathPolicy::new("/archive").unwrap_err();
    assert!(err.to_string().contains("{{ page }}"));
}

#[test]
fn test_template_policy_rejects_other_variables() {
    let err = TemplatePathPolicy::new("/{{ record.slug }}/{{ page }}").unwrap_err();
    assert!(err.to_string().contains("record.slug"));
}

// ============================================================================
// PathPolicyConfig Tests
// ============================================================================

#[test]
fn test_config_default() {
    let config = PathPolicyConfig::default();
    assert_eq!(config, PathPolicyConfig::Default);

    let policy = config.build().unwrap();
    assert_eq!(policy.format(1), "/");
    assert_eq!(policy.format(5), "/5");
}

#[test]
fn test_config_prefix() {
    let policy = PathPolicyConfig::prefix("/blog").build().unwrap();
    assert_eq!(policy.format(1), "/blog/");
    assert_eq!(policy.format(2), "/blog/2");
}

#[test]
fn test_config_template_from_yaml() {
    let yaml = r#"
type: template
template: "/notes/p{{ page }}"
first_page: /notes
"#;
    let config: PathPolicyConfig = serde_yaml::from_str(yaml).unwrap();
    let policy = config.build().unwrap();
    assert_eq!(policy.format(1), "/notes");
    assert_eq!(policy.format(2), "/notes/p2");
}

#[test]
fn test_config_invalid_template() {
    let result = PathPolicyConfig::template("/static").build();
    assert!(result.is_err());
}
