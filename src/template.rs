//! Template interpolation for paths and page contexts
//!
//! Handles `{{ variable }}` interpolation in path templates and linked page
//! contexts. Supports nested access like `{{ record.author.name }}` and the
//! page number as `{{ page }}`.

use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable.path }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s*\}\}")
        .expect("template regex is valid")
});

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// The record being rendered
    pub record: Value,
    /// Current page number
    pub page: Value,
    /// Additional plan-level variables
    pub vars: Value,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context for a single record
    pub fn with_record(record: Value) -> Self {
        Self {
            record,
            ..Default::default()
        }
    }

    /// Create context for a page number
    pub fn with_page(page: usize) -> Self {
        Self {
            page: Value::from(page),
            ..Default::default()
        }
    }

    /// Set record values
    pub fn set_record(&mut self, record: Value) -> &mut Self {
        self.record = record;
        self
    }

    /// Set additional variables
    pub fn set_vars(&mut self, vars: Value) -> &mut Self {
        self.vars = vars;
        self
    }

    /// Get a value by path (e.g., "record.slug")
    pub fn get(&self, path: &str) -> Option<&Value> {
        let parts: Vec<&str> = path.split('.').collect();

        let root = match parts[0] {
            "record" => &self.record,
            "page" => &self.page,
            "vars" => &self.vars,
            // Bare names resolve against the record, then vars
            _ => {
                if let Some(val) = get_nested_value(&self.record, &parts) {
                    return Some(val);
                }
                return get_nested_value(&self.vars, &parts);
            }
        };

        if parts.len() == 1 {
            // An unset root is undefined, not an empty substitution
            (!root.is_null()).then_some(root)
        } else {
            get_nested_value(root, &parts[1..])
        }
    }
}

/// Get a nested value from a JSON value by path
pub(crate) fn get_nested_value<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for part in path {
        match current {
            Value::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Render a template string with the given context.
///
/// Substitution is a single pass over the template, so values containing
/// `{{ ... }}` are inserted literally. All undefined variables are reported
/// together.
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut undefined = Vec::new();
    let mut last = 0;

    for cap in TEMPLATE_REGEX.captures_iter(template) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        output.push_str(&template[last..whole.start()]);
        last = whole.end();

        match ctx.get(name.as_str()) {
            Some(value) => output.push_str(&substitution(value)),
            None => undefined.push(name.as_str()),
        }
    }
    output.push_str(&template[last..]);

    if undefined.is_empty() {
        Ok(output)
    } else {
        Err(Error::undefined_var(undefined.join(", ")))
    }
}

/// Check if a string contains template variables
pub fn has_templates(s: &str) -> bool {
    TEMPLATE_REGEX.is_match(s)
}

/// Variable paths referenced by a template, in order of appearance
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Text inserted for a value. Null renders empty; arrays and objects as JSON.
fn substitution(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Render every string inside a JSON value.
///
/// A string that is exactly one `{{ var }}` is replaced by the variable's
/// value itself, keeping numbers, arrays and objects intact.
pub fn render_value(value: &Value, ctx: &TemplateContext) -> Result<Value> {
    match value {
        Value::String(s) if has_templates(s) => match sole_variable(s) {
            Some(var) => ctx
                .get(&var)
                .cloned()
                .ok_or_else(|| Error::undefined_var(var)),
            None => render(s, ctx).map(Value::String),
        },
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| render_value(v, ctx).map(|v| (k.clone(), v)))
            .collect::<Result<serde_json::Map<_, _>>>()
            .map(Value::Object),
        Value::Array(items) => items
            .iter()
            .map(|v| render_value(v, ctx))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        _ => Ok(value.clone()),
    }
}

/// Returns the variable name when the whole string is a single `{{ var }}`
fn sole_variable(s: &str) -> Option<String> {
    let cap = TEMPLATE_REGEX.captures(s.trim())?;
    let full = cap.get(0)?;
    if full.as_str().len() == s.trim().len() {
        cap.get(1).map(|m| m.as_str().to_string())
    } else {
        None
    }
}
