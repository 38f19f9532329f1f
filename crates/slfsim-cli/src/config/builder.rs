use super::defaults::{AxisDefaults, DefaultsConfig};
use super::file::{FileConfig, FileDimensionConfig};
use super::models::AppConfig;
use crate::cli::{ConvertArgs, SimulateArgs};
use crate::error::{CliError, Result};
use slfsim::core::models::axis::SpectrumAxis;
use slfsim::core::spectral::lineshape::RenderWindow;
use slfsim::engine::config as core_config;
use std::str::FromStr;

/// Per-dimension values given by dedicated command-line flags.
#[derive(Default)]
struct AxisFlags {
    spectral_width: Option<f64>,
    size: Option<usize>,
    linewidth: Option<f64>,
    observe_frequency: Option<f64>,
    carrier_offset: Option<f64>,
}

pub fn build_config(args: &SimulateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    // The dipolar observe frequency and carrier have no dedicated flags.
    let dipolar_flags = AxisFlags {
        spectral_width: args.sw_nh,
        size: args.size_nh,
        linewidth: args.lw_nh,
        ..Default::default()
    };
    let shift_flags = AxisFlags {
        spectral_width: args.sw_n,
        size: args.size_n,
        linewidth: args.lw_n,
        observe_frequency: args.freq_n,
        carrier_offset: args.carr_n,
    };

    let (dipolar_axis, dipolar_linewidth) = merge_dimension(
        &dipolar_flags,
        file_config.dipolar.take().unwrap_or_default(),
        &defaults.dipolar,
    );
    let (shift_axis, shift_linewidth) = merge_dimension(
        &shift_flags,
        file_config.chemical_shift.take().unwrap_or_default(),
        &defaults.chemical_shift,
    );

    let lineshape_file = file_config.lineshape.take().unwrap_or_default();
    let amplitude = args
        .amplitude
        .or(lineshape_file.amplitude)
        .unwrap_or(defaults.amplitude);
    let window = if args.full_grid {
        RenderWindow::Full
    } else {
        RenderWindow::Fwhm(lineshape_file.window_fwhm.unwrap_or(defaults.window_fwhm))
    };

    let core_config = core_config::SimulationConfigBuilder::new()
        .dipolar(dipolar_axis, dipolar_linewidth)
        .chemical_shift(shift_axis, shift_linewidth)
        .amplitude(amplitude)
        .window(window)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

pub fn build_conversion_config(args: &ConvertArgs) -> core_config::ConversionConfig {
    core_config::ConversionConfig {
        negative_couplings: args.negative,
        residue_offset: args.renumber.unwrap_or(0),
    }
}

fn merge_dimension(
    flags: &AxisFlags,
    file_val: FileDimensionConfig,
    defaults: &AxisDefaults,
) -> (SpectrumAxis, f64) {
    let axis = SpectrumAxis::new(
        file_val.label.as_deref().unwrap_or(defaults.label),
        flags
            .size
            .or(file_val.size)
            .unwrap_or(defaults.size),
        flags
            .spectral_width
            .or(file_val.spectral_width)
            .unwrap_or(defaults.spectral_width),
        flags
            .observe_frequency
            .or(file_val.observe_frequency)
            .unwrap_or(defaults.observe_frequency),
        flags
            .carrier_offset
            .or(file_val.carrier_offset)
            .unwrap_or(defaults.carrier_offset),
    );
    let linewidth = flags
        .linewidth
        .or(file_val.linewidth)
        .unwrap_or(defaults.linewidth);
    (axis, linewidth)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn set_dimension_value(
    dimension: &mut FileDimensionConfig,
    field: &str,
    key: &str,
    value_str: &str,
) -> Result<()> {
    match field {
        "spectral-width" => dimension.spectral_width = Some(parse_value(key, value_str, "float")?),
        "size" => dimension.size = Some(parse_value(key, value_str, "integer")?),
        "linewidth" => dimension.linewidth = Some(parse_value(key, value_str, "float")?),
        "observe-frequency" => {
            dimension.observe_frequency = Some(parse_value(key, value_str, "float")?)
        }
        "carrier-offset" => dimension.carrier_offset = Some(parse_value(key, value_str, "float")?),
        _ => return Err(unsupported_key(key)),
    }
    Ok(())
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!(
        "Unsupported configuration key for --set: '{}'",
        key
    ))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let Some((section, field)) = key.split_once('.') else {
            return Err(unsupported_key(key));
        };

        match section {
            "dipolar" => set_dimension_value(
                config.dipolar.get_or_insert_with(Default::default),
                field,
                key,
                value_str,
            )?,
            "chemical-shift" => set_dimension_value(
                config.chemical_shift.get_or_insert_with(Default::default),
                field,
                key,
                value_str,
            )?,
            "lineshape" => {
                let lineshape = config.lineshape.get_or_insert_with(Default::default);
                match field {
                    "amplitude" => {
                        lineshape.amplitude = Some(parse_value(key, value_str, "float")?)
                    }
                    "window-fwhm" => {
                        lineshape.window_fwhm = Some(parse_value(key, value_str, "float")?)
                    }
                    _ => return Err(unsupported_key(key)),
                }
            }
            _ => return Err(unsupported_key(key)),
        }
    }
    Ok(config)
}
