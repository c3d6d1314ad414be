//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::engine::BuildEngine;
use crate::error::{Error, Result, ResultExt};
use crate::linked::{build_linked_pages, LinkedConfig, TemplateExtractor};
use crate::loader::{load_plan, load_records};
use crate::pagination::{build_pagination_pages, PaginationConfig};
use crate::path::PathPolicyConfig;
use crate::sink::JsonLinesSink;
use crate::types::{Component, JsonObject, JsonValue};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Paginate {
                records,
                component,
                limit,
                prefix,
                path_template,
                first_page,
            } => {
                let path = match (prefix, path_template) {
                    (_, Some(template)) => PathPolicyConfig::Template {
                        template: template.clone(),
                        first_page: first_page.clone(),
                    },
                    (Some(prefix), None) => PathPolicyConfig::prefix(prefix.clone()),
                    (None, None) => PathPolicyConfig::Default,
                };
                self.paginate(records, component, *limit, &path)
            }
            Commands::Linked {
                records,
                component,
                path,
                context,
                layout_field,
                circular,
            } => self.linked(
                records,
                component,
                path,
                context,
                layout_field.as_deref(),
                *circular,
            ),
            Commands::Run { plan, jobs } => self.run_plan(plan, jobs),
            Commands::Validate { plan } => self.validate(plan),
        }
    }

    /// Paginate a records file
    fn paginate(
        &self,
        records: &Path,
        component: &str,
        limit: usize,
        path: &PathPolicyConfig,
    ) -> Result<()> {
        let records = load_records(records)?;
        let config = PaginationConfig::new()
            .with_limit(limit)
            .with_shared_path_policy(path.build()?);
        let component = Self::component(component)?;

        let mut sink = self.open_sink()?;
        let pages = build_pagination_pages(&config, &records, &component, &mut sink)?;
        sink.into_inner()?;

        info!(records = records.len(), pages, "Pagination complete");
        Ok(())
    }

    /// Create linked pages from a records file
    fn linked(
        &self,
        records: &Path,
        component: &str,
        path: &str,
        context: &[String],
        layout_field: Option<&str>,
        circular: bool,
    ) -> Result<()> {
        let records = load_records(records)?;
        let component = Self::component(component)?;

        let mut extractor = TemplateExtractor::new(path)?.with_context(parse_context(context)?);
        if let Some(field) = layout_field {
            extractor = extractor.with_layout_field(field);
        }
        let config = LinkedConfig::new().with_circular(circular);

        let mut sink = self.open_sink()?;
        let pages = build_linked_pages(&config, &records, &component, &mut extractor, &mut sink)?;
        sink.into_inner()?;

        info!(records = records.len(), pages, circular, "Linked pages complete");
        Ok(())
    }

    /// Run a build plan
    fn run_plan(&self, plan_path: &Path, jobs: &[String]) -> Result<()> {
        let plan = load_plan(plan_path)?;

        let mut sink = self.open_sink()?;
        BuildEngine::for_plan_file(plan_path)
            .with_jobs(jobs.iter().cloned())
            .run(&plan, &mut sink)?;
        sink.into_inner()?;

        Ok(())
    }

    /// Validate a build plan
    fn validate(&self, plan_path: &Path) -> Result<()> {
        let plan = load_plan(plan_path)?;

        let jobs: Vec<JsonValue> = plan
            .jobs
            .iter()
            .map(|job| {
                json!({
                    "name": job.name,
                    "kind": job.kind_name(),
                    "records": job.records,
                    "component": job.component,
                })
            })
            .collect();

        self.output_message(&json!({
            "valid": true,
            "plan": plan_path.display().to_string(),
            "version": plan.version,
            "jobs": jobs,
        }))
    }

    fn component(component: &str) -> Result<Component> {
        if component.is_empty() {
            return Err(Error::missing_argument("component"));
        }
        Ok(Component::from(component))
    }

    /// Open the page sink for `--output`, or stdout
    fn open_sink(&self) -> Result<JsonLinesSink<Box<dyn Write>>> {
        let writer: Box<dyn Write> = match &self.cli.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        Ok(JsonLinesSink::new(writer).pretty(self.cli.format == OutputFormat::Pretty))
    }

    /// Output a message
    fn output_message(&self, msg: &JsonValue) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        match &self.cli.output {
            Some(path) => std::fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}

/// Parse `key=template` context arguments
pub fn parse_context(entries: &[String]) -> Result<JsonObject> {
    entries
        .iter()
        .map(|entry| {
            let (key, template) = entry.split_once('=').ok_or_else(|| {
                Error::invalid_value("context", format!("expected KEY=TEMPLATE, got '{entry}'"))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::invalid_value(
                    "context",
                    format!("empty key in '{entry}'"),
                ));
            }
            Ok((key.to_string(), JsonValue::String(template.to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_context() {
        let entries = vec![
            "title={{ record.title }}".to_string(),
            "query=a=b".to_string(),
        ];
        let context = parse_context(&entries).unwrap();
        assert_eq!(context.get("title"), Some(&json!("{{ record.title }}")));
        assert_eq!(context.get("query"), Some(&json!("a=b")));
    }

    #[test]
    fn test_parse_context_rejects_malformed() {
        assert!(parse_context(&["title".to_string()]).is_err());
        assert!(parse_context(&["=value".to_string()]).is_err());
    }

    #[test]
    fn test_cli_parse_paginate() {
        let cli = Cli::try_parse_from([
            "site-pager",
            "paginate",
            "--records",
            "posts.json",
            "--component",
            "list",
            "--prefix",
            "/blog",
        ])
        .unwrap();

        match cli.command {
            Commands::Paginate { limit, prefix, .. } => {
                assert_eq!(limit, 10);
                assert_eq!(prefix.as_deref(), Some("/blog"));
            }
            _ => panic!("Expected paginate command"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_prefix_conflicts_with_template() {
        let result = Cli::try_parse_from([
            "site-pager",
            "paginate",
            "--records",
            "posts.json",
            "--component",
            "list",
            "--prefix",
            "/blog",
            "--path-template",
            "/page/{{ page }}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_run_jobs() {
        let cli = Cli::try_parse_from([
            "site-pager",
            "run",
            "--plan",
            "site.yaml",
            "--job",
            "index",
            "--job",
            "posts",
            "--format",
            "pretty",
        ])
        .unwrap();

        match cli.command {
            Commands::Run { jobs, .. } => assert_eq!(jobs, vec!["index", "posts"]),
            _ => panic!("Expected run command"),
        }
        assert_eq!(cli.format, OutputFormat::Pretty);
    }
}
