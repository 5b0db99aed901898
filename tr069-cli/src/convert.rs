use anyhow::{Context, Result, bail};
use std::path::Path;
use std::time::Instant;

use tr069_model::{InternetGatewayDevice, refresh_entry_counts, validate_semantics, validate_tree};

use crate::Format;

pub fn parse_input(input: &Path) -> Result<InternetGatewayDevice> {
    let in_fmt = crate::detect_format(input).context("input file")?;
    let text =
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let start = Instant::now();

    let igd = match in_fmt {
        Format::Xml => tr069_xml::parse_xml(&text)
            .with_context(|| format!("parsing XML from {}", input.display()))?,
        // JSON is read through the YAML parser.
        Format::Yaml | Format::Json => tr069_yaml::parse_yaml(&text)
            .with_context(|| format!("parsing {} from {}", in_fmt.name(), input.display()))?,
    };

    log::debug!(
        "parsed {} in {:.1}ms",
        input.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(igd)
}

pub fn render(igd: &InternetGatewayDevice, format: Format) -> Result<String> {
    Ok(match format {
        Format::Xml => tr069_xml::write_xml(igd).context("writing XML")?,
        Format::Yaml => tr069_yaml::write_yaml(igd).context("writing YAML")?,
        Format::Json => serde_json::to_string_pretty(igd).context("writing JSON")? + "\n",
    })
}

pub fn write_output(igd: &InternetGatewayDevice, output: &Path) -> Result<()> {
    let out_fmt = crate::detect_format(output).context("output file")?;
    let text = render(igd, out_fmt)?;
    std::fs::write(output, text).with_context(|| format!("writing {}", output.display()))
}

/// Log every constraint violation and semantic finding; never fails.
pub fn log_findings(igd: &InternetGatewayDevice) {
    if let Err(errors) = validate_tree(igd, InternetGatewayDevice::ROOT_PATH) {
        for e in &errors {
            log::warn!("Validation: {e}");
        }
    }
    for issue in validate_semantics(igd) {
        log::warn!("Validation: {issue}");
    }
}

pub fn run_convert(input: &Path, output: &Path, dry_run: bool, refresh_counts: bool) -> Result<()> {
    let in_fmt = crate::detect_format(input).context("input file")?;
    let out_fmt = crate::detect_format(output).context("output file")?;

    if in_fmt == out_fmt && !refresh_counts {
        bail!(
            "Input and output formats are the same ({}). Nothing to convert.",
            in_fmt.name()
        );
    }

    log::info!("Converting {} -> {}", in_fmt.name(), out_fmt.name());

    let mut igd = parse_input(input)?;
    if refresh_counts {
        refresh_entry_counts(&mut igd);
    }
    log_findings(&igd);

    if dry_run {
        let text = render(&igd, out_fmt)?;
        println!(
            "dry run: would write {} bytes to {}",
            text.len(),
            output.display()
        );
        return Ok(());
    }

    write_output(&igd, output)?;

    log::info!("Written: {}", output.display());
    println!("Converted {} -> {}", input.display(), output.display());

    Ok(())
}
