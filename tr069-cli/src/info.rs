use anyhow::{Context, Result};
use std::path::Path;

use tr069_model::{InternetGatewayDevice, parameter_values};

use crate::convert::parse_input;

fn or_dash(value: Option<&String>) -> &str {
    value.map_or("-", String::as_str)
}

pub fn run_info(input: &Path) -> Result<()> {
    let in_fmt = crate::detect_format(input).context("input file")?;
    let igd = parse_input(input)?;

    let info = igd.device_info.as_ref();
    let voice = igd.voice_services();
    let control = || voice.iter().filter_map(|v| v.call_control.as_ref());

    let lines: usize = control().map(|c| c.lines.len()).sum();
    let extensions: usize = control().map(|c| c.extensions.len()).sum();
    let trunks: usize = voice.iter().map(|v| v.trunks.len()).sum();
    let call_logs: usize = voice.iter().map(|v| v.call_logs.len()).sum();
    let manageable = igd
        .management_server
        .as_ref()
        .map_or(0, |m| m.manageable_devices.len());
    let parameters = parameter_values(&igd, InternetGatewayDevice::ROOT_PATH).len();

    println!("File:          {}", input.display());
    println!("Format:        {}", in_fmt.name());
    println!("Manufacturer:  {}", or_dash(info.and_then(|i| i.manufacturer.as_ref())));
    println!("Model:         {}", or_dash(info.and_then(|i| i.model_name.as_ref())));
    println!("Serial:        {}", or_dash(info.and_then(|i| i.serial_number.as_ref())));
    println!("Software:      {}", or_dash(info.and_then(|i| i.software_version.as_ref())));
    println!("VoiceServices: {}", voice.len());
    println!("Lines:         {lines}");
    if extensions > 0 {
        println!("Extensions:    {extensions}");
    }
    println!("Trunks:        {trunks}");
    println!("CallLog:       {call_logs}");
    println!("FAPServices:   {}", igd.fap_services().len());
    println!("Devices:       {manageable}");
    println!("Parameters:    {parameters}");

    Ok(())
}
