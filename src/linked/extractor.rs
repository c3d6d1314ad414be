//! Template-driven record extraction
//!
//! Lets build plans and the CLI describe an extractor declaratively:
//! a path template, context templates and an optional layout field.

use super::types::{LinkedPageParams, RecordExtractor};
use crate::error::{Error, Result};
use crate::template::{extract_variables, get_nested_value, render, render_value, TemplateContext};
use crate::types::{JsonObject, JsonValue};

/// Extracts page params from JSON records using `{{ record.field }}` templates
#[derive(Debug, Clone)]
pub struct TemplateExtractor {
    path: String,
    context: JsonObject,
    layout_field: Option<String>,
    vars: JsonValue,
}

impl TemplateExtractor {
    /// Create an extractor from a path template such as `/blog/{{ record.slug }}`
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let variables = extract_variables(&path);

        if let Some(bad) = variables.iter().find(|v| !is_path_variable(v)) {
            return Err(Error::template(format!(
                "linked path template '{path}' cannot use '{bad}'; \
                 use record fields or `vars.<name>`"
            )));
        }
        if !variables.iter().any(|v| !v.starts_with("vars.")) {
            return Err(Error::template(format!(
                "linked path template '{path}' does not reference the record"
            )));
        }

        Ok(Self {
            path,
            context: JsonObject::new(),
            layout_field: None,
            vars: JsonValue::Null,
        })
    }

    /// Add a context entry; string values may contain templates
    #[must_use]
    pub fn with_context_value(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Replace all context entries
    #[must_use]
    pub fn with_context(mut self, context: JsonObject) -> Self {
        self.context = context;
        self
    }

    /// Read the layout hint from a dotted record field
    #[must_use]
    pub fn with_layout_field(mut self, field: impl Into<String>) -> Self {
        self.layout_field = Some(field.into());
        self
    }

    /// Variables available to templates as `{{ vars.name }}`
    #[must_use]
    pub fn with_vars(mut self, vars: JsonValue) -> Self {
        self.vars = vars;
        self
    }

    fn layout_for(&self, record: &JsonValue) -> Option<String> {
        let field = self.layout_field.as_deref()?;
        let parts: Vec<&str> = field.split('.').collect();
        get_nested_value(record, &parts)
            .and_then(JsonValue::as_str)
            .map(str::to_string)
    }
}

/// Path variables must vary per record: a record field, or a named plan
/// variable. The page number and whole `record`/`vars` roots are rejected.
fn is_path_variable(variable: &str) -> bool {
    let root = variable.split('.').next().unwrap_or_default();
    match root {
        "page" => false,
        "record" | "vars" => variable.len() > root.len(),
        _ => true,
    }
}

impl RecordExtractor<JsonValue> for TemplateExtractor {
    fn extract(&mut self, record: &JsonValue) -> Result<LinkedPageParams> {
        let mut ctx = TemplateContext::new();
        ctx.set_record(record.clone()).set_vars(self.vars.clone());

        let mut params = LinkedPageParams::new(render(&self.path, &ctx)?);

        if !self.context.is_empty() {
            let mut context = JsonObject::new();
            for (key, value) in &self.context {
                context.insert(key.clone(), render_value(value, &ctx)?);
            }
            params = params.with_context(context);
        }

        if let Some(layout) = self.layout_for(record) {
            params = params.with_layout(layout);
        }

        Ok(params)
    }
}
