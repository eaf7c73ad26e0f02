use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ModelArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use tracing::debug;
use vdwp::engine::config::SurfaceConfigBuilder;

/// Merges defaults, the optional config file, `-S` overrides and explicit flags, in
/// increasing order of precedence.
pub fn build_config(args: &ModelArgs, resolution: Option<usize>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let species_file = file_config.species.unwrap_or_default();
    let conditions_file = file_config.conditions.unwrap_or_default();
    let structures_file = file_config.structures.unwrap_or_default();
    let data_file = file_config.data.unwrap_or_default();

    let [default_a, default_b, default_c] = defaults.species;
    let species_a = args.gas_a.clone().or(species_file.a).unwrap_or(default_a);
    let species_b = args.gas_b.clone().or(species_file.b).unwrap_or(default_b);
    let species_c = args.gas_c.clone().or(species_file.c).unwrap_or(default_c);

    let pressure_bar = args
        .pressure
        .or(conditions_file.pressure_bar)
        .unwrap_or(defaults.pressure_bar);
    let temperature_k = args
        .temperature
        .or(conditions_file.temperature_k)
        .unwrap_or(defaults.temperature_k);
    let resolution = resolution
        .or(conditions_file.resolution)
        .unwrap_or(defaults.resolution);

    let structure_a = args
        .structure_a
        .clone()
        .or(structures_file.a)
        .unwrap_or(defaults.structure_a);
    let structure_b = args
        .structure_b
        .clone()
        .or(structures_file.b)
        .unwrap_or(defaults.structure_b);

    let core_config = SurfaceConfigBuilder::new()
        .species(&species_a, &species_b, &species_c)
        .pressure_bar(pressure_bar)
        .temperature_k(temperature_k)
        .resolution(resolution)
        .structures(&structure_a, &structure_b)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Final surface configuration: {:?}", core_config);

    Ok(AppConfig {
        core_config,
        gas_table_path: args.gas_table.clone().or(data_file.gas_table),
        crystals_path: args.crystals.clone().or(data_file.crystals),
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        let parse_float = || {
            value_str.parse::<f64>().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })
        };

        match key {
            "species.a" => {
                config.species.get_or_insert_with(Default::default).a = Some(value_str.to_string())
            }
            "species.b" => {
                config.species.get_or_insert_with(Default::default).b = Some(value_str.to_string())
            }
            "species.c" => {
                config.species.get_or_insert_with(Default::default).c = Some(value_str.to_string())
            }
            "conditions.pressure-bar" => {
                config
                    .conditions
                    .get_or_insert_with(Default::default)
                    .pressure_bar = Some(parse_float()?);
            }
            "conditions.temperature-k" => {
                config
                    .conditions
                    .get_or_insert_with(Default::default)
                    .temperature_k = Some(parse_float()?);
            }
            "conditions.resolution" => {
                config
                    .conditions
                    .get_or_insert_with(Default::default)
                    .resolution = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!(
                        "Invalid integer value for {}: {}",
                        key, value_str
                    ))
                })?);
            }
            "structures.a" => {
                config.structures.get_or_insert_with(Default::default).a =
                    Some(value_str.to_string())
            }
            "structures.b" => {
                config.structures.get_or_insert_with(Default::default).b =
                    Some(value_str.to_string())
            }
            "data.gas-table" => {
                config.data.get_or_insert_with(Default::default).gas_table =
                    Some(value_str.into())
            }
            "data.crystals" => {
                config.data.get_or_insert_with(Default::default).crystals =
                    Some(value_str.into())
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn surface_args(extra: &[&str]) -> (ModelArgs, Option<usize>) {
        let mut argv = vec!["vdwp", "surface"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Surface(args) => (args.model, args.resolution),
            _ => panic!("Expected 'surface' subcommand"),
        }
    }

    fn path_arg(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let (model, resolution) = surface_args(&[]);
        let config = build_config(&model, resolution).unwrap();
        let core = config.core_config;
        assert_eq!(core.species, ["Methane", "Ethane", "CF4"].map(String::from));
        assert_eq!(core.conditions.pressure_bar, 10.0);
        assert_eq!(core.conditions.temperature_k, 273.15);
        assert_eq!(core.resolution, 60);
        assert_eq!(core.structure_a, "CS1");
        assert!(config.gas_table_path.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_config_file(
            "file_values.toml",
            r#"
            [species]
            b = "CO2"

            [conditions]
            temperature-k = 265.0
            resolution = 8
            "#,
        );
        let config_arg = path_arg(&path);
        let (model, resolution) = surface_args(&["-c", &config_arg]);
        let core = build_config(&model, resolution).unwrap().core_config;
        assert_eq!(core.species[0], "Methane");
        assert_eq!(core.species[1], "CO2");
        assert_eq!(core.conditions.temperature_k, 265.0);
        assert_eq!(core.resolution, 8);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let path = write_config_file(
            "cli_override.toml",
            r#"
            [species]
            a = "Kr" # Will be overridden

            [conditions]
            pressure-bar = 5.0 # Will be overridden
            "#,
        );
        let config_arg = path_arg(&path);
        let (model, resolution) =
            surface_args(&["-c", &config_arg, "--gas-a", "Xe", "-P", "40", "-n", "3"]);
        let core = build_config(&model, resolution).unwrap().core_config;
        assert_eq!(core.species[0], "Xe");
        assert_eq!(core.conditions.pressure_bar, 40.0);
        assert_eq!(core.resolution, 3);
    }

    #[test]
    fn set_values_override_file_values() {
        let path = write_config_file(
            "set_override.toml",
            r#"
            [conditions]
            pressure-bar = 5.0 # Will be overridden by --set
            "#,
        );
        let config_arg = path_arg(&path);
        let (model, resolution) = surface_args(&[
            "-c",
            &config_arg,
            "-S",
            "conditions.pressure-bar=12.5",
            "-S",
            "species.c=N2",
            "-S",
            "structures.a=CS2",
            "-S",
            "structures.b=CS1",
        ]);
        let core = build_config(&model, resolution).unwrap().core_config;
        assert_eq!(core.conditions.pressure_bar, 12.5);
        assert_eq!(core.species[2], "N2");
        assert_eq!(core.structure_a, "CS2");
        assert_eq!(core.structure_b, "CS1");
    }

    #[test]
    fn data_paths_come_from_flags_or_set_values() {
        let (model, resolution) = surface_args(&[
            "--gas-table",
            "/tmp/gases.txt",
            "-S",
            "data.crystals=/tmp/crystals.toml",
        ]);
        let config = build_config(&model, resolution).unwrap();
        assert_eq!(config.gas_table_path, Some(PathBuf::from("/tmp/gases.txt")));
        assert_eq!(
            config.crystals_path,
            Some(PathBuf::from("/tmp/crystals.toml"))
        );
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let (model, resolution) = surface_args(&["-S", "conditions.humidity=0.5"]);
        let result = build_config(&model, resolution);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("humidity")));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let (model, resolution) = surface_args(&["-S", "conditions.temperature-k=warm"]);
        let result = build_config(&model, resolution);
        assert!(matches!(result, Err(CliError::Config(_))));

        let (model, resolution) = surface_args(&["-S", "no-equals-sign"]);
        let result = build_config(&model, resolution);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_conditions_surface_as_config_errors() {
        let (model, resolution) = surface_args(&["-n", "0"]);
        let result = build_config(&model, resolution);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("resolution")));

        let (model, resolution) = surface_args(&["--temperature=-5"]);
        assert!(build_config(&model, resolution).is_err());
    }
}
