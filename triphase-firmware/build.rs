//! Build script for triphase-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time
//! - Generates the `PANEL_CONFIG` constant from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Defaults mirror `triphase_core::config`
const DEFAULT_ADDRESS: i64 = 0x27;
const DEFAULT_I2C_FREQUENCY: i64 = 400_000;

/// `[timing]` keys with their default values
const TIMING_KEYS: [(&str, i64); 8] = [
    ("page_settle_ms", 200),
    ("item_settle_ms", 150),
    ("adjust_settle_ms", 120),
    ("toggle_settle_ms", 100),
    ("blink_period_ms", 250),
    ("long_press_ms", 600),
    ("poll_interval_ms", 80),
    ("splash_ms", 800),
];

/// Upper bound for any duration in the file
const MAX_DURATION_MS: i64 = 10_000;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values resolved from panel.toml
struct ResolvedConfig {
    address: i64,
    i2c_frequency: i64,
    timing: Vec<(&'static str, i64)>,
}

/// Validate panel.toml configuration at compile time
fn validate_config() -> ResolvedConfig {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the triphase-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    check_sections(&config, &mut errors);
    let (address, i2c_frequency) = validate_display(&config, &mut errors);
    let timing = validate_timing(&config, &mut errors);

    if !errors.is_empty() {
        report_errors("Invalid panel configuration", &errors);
    }

    println!("cargo:warning=panel.toml validated successfully");

    ResolvedConfig {
        address,
        i2c_frequency,
        timing,
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_errors(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Only [display] and [timing] are understood
fn check_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("panel.toml must be a table".to_string());
        return;
    };

    for (name, value) in table {
        match name.as_str() {
            "display" | "timing" => {
                if !value.is_table() {
                    errors.push(format!("[{}] must be a table", name));
                }
            }
            _ => errors.push(format!("Unknown section [{}]", name)),
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) -> (i64, i64) {
    let display = config.get("display").and_then(|d| d.as_table());

    let address = read_integer(display, "display", "address", DEFAULT_ADDRESS, errors);
    if !(0x08..=0x77).contains(&address) {
        errors.push(format!(
            "[display] address 0x{:02X} outside 0x08-0x77",
            address
        ));
    }

    let frequency = read_integer(
        display,
        "display",
        "i2c_frequency",
        DEFAULT_I2C_FREQUENCY,
        errors,
    );
    if !(10_000..=1_000_000).contains(&frequency) {
        errors.push("[display] i2c_frequency must be 10000-1000000".to_string());
    }

    if let Some(table) = display {
        for key in table.keys() {
            if key != "address" && key != "i2c_frequency" {
                errors.push(format!("[display] unknown key '{}'", key));
            }
        }
    }

    (address, frequency)
}

fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) -> Vec<(&'static str, i64)> {
    let timing = config.get("timing").and_then(|t| t.as_table());

    let values: Vec<(&'static str, i64)> = TIMING_KEYS
        .iter()
        .map(|(key, default)| {
            let value = read_integer(timing, "timing", key, *default, errors);
            if !(0..=MAX_DURATION_MS).contains(&value) {
                errors.push(format!(
                    "[timing] {} must be 0-{}",
                    key, MAX_DURATION_MS
                ));
            }
            (*key, value)
        })
        .collect();

    let get = |name: &str| {
        values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .unwrap_or_default()
    };

    if get("poll_interval_ms") == 0 {
        errors.push("[timing] poll_interval_ms must be non-zero".to_string());
    }
    if get("blink_period_ms") == 0 {
        errors.push("[timing] blink_period_ms must be non-zero".to_string());
    }
    if get("long_press_ms") <= get("poll_interval_ms") {
        errors.push("[timing] long_press_ms must exceed poll_interval_ms".to_string());
    }

    if let Some(table) = timing {
        for key in table.keys() {
            if !TIMING_KEYS.iter().any(|(known, _)| known == key) {
                errors.push(format!("[timing] unknown key '{}'", key));
            }
        }
    }

    values
}

fn read_integer(
    table: Option<&toml::map::Map<String, toml::Value>>,
    section: &str,
    key: &str,
    default: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match table.and_then(|t| t.get(key)) {
        None => default,
        Some(toml::Value::Integer(value)) => *value,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

/// Write `$OUT_DIR/panel_config.rs`
fn generate_config(config: &ResolvedConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let timing_fields: String = config
        .timing
        .iter()
        .map(|(key, value)| format!("        {}: {},\n", key, value))
        .collect();

    let source = format!(
        "pub const PANEL_CONFIG: PanelConfig = PanelConfig {{\n    \
        display: DisplayConfig {{\n        \
        address: 0x{:02X},\n        \
        i2c_frequency: {},\n    \
        }},\n    \
        timing: TimingConfig {{\n{}    }},\n\
        }};\n",
        config.address, config.i2c_frequency, timing_fields
    );

    let mut f = File::create(out_dir.join("panel_config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}
