// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    parsing: ParsingLimits,
    resolution: ResolutionLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ParsingLimits {
    max_stored_value_size: usize,
    max_zones: usize,
    max_rows_per_zone: usize,
    max_items_per_row: usize,
}

#[derive(serde::Deserialize)]
struct ResolutionLimits {
    max_schema_properties: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MORTAR_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=MORTAR_CONFIG_DIR");

    let profile = env::var("MORTAR_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("MORTAR_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Config lives at the workspace root, one level above this crate
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}",
            config_path.display(),
            workspace_root.display(),
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);

    println!("cargo:rustc-env=MORTAR_BUILD_PROFILE={}", profile);
    println!("cargo:rustc-env=MORTAR_CONFIG_DIR={}", config_dir);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_STORED_VALUE_SIZE: usize = 64 * 1024 * 1024;
    const ABSOLUTE_MAX_LOG_BUFFER: usize = 1_000_000;

    if config.parsing.max_stored_value_size == 0
        || config.parsing.max_stored_value_size > ABSOLUTE_MAX_STORED_VALUE_SIZE
    {
        panic!("LIMITS: max_stored_value_size must be between 1 and {ABSOLUTE_MAX_STORED_VALUE_SIZE}");
    }

    if config.parsing.max_zones == 0
        || config.parsing.max_rows_per_zone == 0
        || config.parsing.max_items_per_row == 0
    {
        panic!("LIMITS: structural limits must be non-zero");
    }

    if config.resolution.max_schema_properties == 0 {
        panic!("LIMITS: max_schema_properties must be non-zero");
    }

    if config.logging.log_buffer_size > ABSOLUTE_MAX_LOG_BUFFER {
        panic!("LIMITS: log_buffer_size exceeds absolute maximum");
    }

    if profile == "production" && config.parsing.max_stored_value_size > 16 * 1024 * 1024 {
        panic!("PRODUCTION: max_stored_value_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod parsing {{
        pub const MAX_STORED_VALUE_SIZE: usize = {};
        pub const MAX_ZONES: usize = {};
        pub const MAX_ROWS_PER_ZONE: usize = {};
        pub const MAX_ITEMS_PER_ROW: usize = {};
    }}

    pub mod resolution {{
        pub const MAX_SCHEMA_PROPERTIES: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.parsing.max_stored_value_size,
        config.parsing.max_zones,
        config.parsing.max_rows_per_zone,
        config.parsing.max_items_per_row,
        config.resolution.max_schema_properties,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(&output_path, constants_code)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", output_path.display(), e));
}
