use anyhow::{Context, Result, bail};
use std::path::Path;

use tr069_model::schema::{ParamEntry, walk_parameters};
use tr069_model::{InternetGatewayDevice, ParamKind};

use crate::SchemaFormat;

const ROOT: &str = InternetGatewayDevice::ROOT_PATH;

fn type_label(kind: ParamKind, list: bool) -> String {
    let name = kind.data_type().unwrap_or_else(|| kind.dm_type());
    if list {
        format!("list<{name}>")
    } else {
        name.to_string()
    }
}

fn text_line(entry: &ParamEntry) -> String {
    format!(
        "{}  {}  {}",
        entry.path,
        type_label(entry.param.kind, entry.param.list),
        entry.param.access
    )
}

pub fn run_schema(format: SchemaFormat, model_name: &str) -> Result<()> {
    match format {
        SchemaFormat::Text => {
            walk_parameters(InternetGatewayDevice::SCHEMA, ROOT, &mut |entry| {
                println!("{}", text_line(entry));
            });
        }
        SchemaFormat::Dm => {
            let xml = tr069_xml::write_data_model(InternetGatewayDevice::SCHEMA, ROOT, model_name)
                .context("writing data model")?;
            print!("{xml}");
        }
        SchemaFormat::Json => {
            let schema = tr069_yaml::json_schema(InternetGatewayDevice::SCHEMA);
            let text = serde_json::to_string_pretty(&schema).context("writing JSON Schema")?;
            println!("{text}");
        }
    }
    Ok(())
}

pub fn run_check_dm(input: &Path, root_path: &str) -> Result<()> {
    let text =
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let doc = tr069_xml::parse_data_model(&text)
        .with_context(|| format!("parsing data model from {}", input.display()))?;

    let differences = tr069_xml::compare_data_model(&doc, InternetGatewayDevice::SCHEMA, root_path);
    if differences.is_empty() {
        println!("{}: matches the built-in data model", input.display());
        return Ok(());
    }

    for d in &differences {
        println!("{d}");
    }
    bail!(
        "{} difference{} between {} and the built-in data model",
        differences.len(),
        if differences.len() == 1 { "" } else { "s" },
        input.display()
    );
}
