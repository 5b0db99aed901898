use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use tr069_model::{InternetGatewayDevice, Severity, validate_semantics, validate_tree};

use crate::Format;
use crate::convert::parse_input;

#[derive(Debug, Default)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn check_file(input: &Path) -> Result<Report> {
    let mut report = Report::default();

    // Schema validation for YAML and JSON documents
    let in_fmt = crate::detect_format(input).context("input file")?;
    if matches!(in_fmt, Format::Yaml | Format::Json) {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        if let Err(schema_errors) =
            tr069_yaml::validate_yaml_schema(&text, InternetGatewayDevice::SCHEMA)
        {
            for e in &schema_errors {
                report.errors.push(format!("schema: {e}"));
            }
        }
    }

    let igd = parse_input(input)?;
    if let Err(errors) = validate_tree(&igd, InternetGatewayDevice::ROOT_PATH) {
        report.errors.extend(errors.iter().map(ToString::to_string));
    }
    for issue in validate_semantics(&igd) {
        match issue.severity {
            Severity::Error => report.errors.push(issue.to_string()),
            Severity::Warning => report.warnings.push(issue.to_string()),
        }
    }

    Ok(report)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

pub fn run_validate(inputs: &[PathBuf], quiet: bool, summary: bool) -> Result<()> {
    let results: Vec<(&PathBuf, Result<Report>)> = inputs
        .par_iter()
        .map(|input| (input, check_file(input)))
        .collect();

    let mut failed = 0;
    for (input, result) in &results {
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                eprintln!("FAILED {}: {e:#}", input.display());
                failed += 1;
                continue;
            }
        };

        if !quiet && !summary {
            for w in &report.warnings {
                eprintln!("{}: {w}", input.display());
            }
        }

        if report.errors.is_empty() {
            if !quiet {
                println!("{}: valid", input.display());
            }
            continue;
        }
        failed += 1;

        if !quiet && !summary {
            for e in &report.errors {
                eprintln!("{}: {e}", input.display());
            }
        }
        if summary || !quiet {
            println!(
                "{}: {} validation error{}",
                input.display(),
                report.errors.len(),
                plural(report.errors.len())
            );
        }
    }

    if failed > 0 {
        bail!(
            "{failed} of {} file{} failed validation",
            inputs.len(),
            plural(inputs.len())
        );
    }
    Ok(())
}
