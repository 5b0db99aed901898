use anyhow::{Result, anyhow};
use std::path::Path;

use tr069_model::{
    InternetGatewayDevice, ModelError, ParameterValue, get_parameter_values, parameter_values,
    set_parameter_value,
};

use crate::convert::{parse_input, write_output};

const ROOT: &str = InternetGatewayDevice::ROOT_PATH;

fn fault(e: &ModelError) -> anyhow::Error {
    anyhow!("{e} (fault {})", e.fault_code())
}

fn format_value(v: &ParameterValue) -> String {
    format!("{} = {}", v.name, v.value)
}

pub fn run_params(input: &Path, paths: &[String]) -> Result<()> {
    let igd = parse_input(input)?;

    let values = if paths.is_empty() {
        parameter_values(&igd, ROOT)
    } else {
        let names: Vec<&str> = paths.iter().map(String::as_str).collect();
        get_parameter_values(&igd, ROOT, &names).map_err(|e| fault(&e))?
    };

    for v in &values {
        println!("{}", format_value(v));
    }
    Ok(())
}

pub fn run_set(input: &Path, path: &str, value: &str, output: Option<&Path>) -> Result<()> {
    let mut igd = parse_input(input)?;
    set_parameter_value(&mut igd, ROOT, path, value).map_err(|e| fault(&e))?;

    let target = output.unwrap_or(input);
    write_output(&igd, target)?;
    log::info!("{path} set in {}", target.display());
    println!("{path} = {value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tr069_model::ParamKind;

    #[test]
    fn fault_message_carries_code() {
        let err = fault(&ModelError::NotWritable("InternetGatewayDevice.DeviceInfo.UpTime".into()));
        assert!(err.to_string().ends_with("(fault 9008)"), "{err}");
    }

    #[test]
    fn value_line_format() {
        let v = ParameterValue {
            name: "InternetGatewayDevice.Time.Enable".into(),
            value: "true".into(),
            kind: ParamKind::Boolean,
        };
        assert_eq!(format_value(&v), "InternetGatewayDevice.Time.Enable = true");
    }
}
