use std::env;
use std::fs;
use std::path::Path;

// Keys forwarded to `option_env!` in src/config.rs
const CONFIG_KEYS: &[&str] = &[
    "SPACEX_API_URL",
    "LAUNCH_YEAR",
    "REQUEST_TIMEOUT_MS",
    "FALLBACK_PATCH_URL",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for (key, value) in contents.lines().filter_map(parse_env_line) {
                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Ignoring unknown .env key {}", key);
                    continue;
                }
                // Real environment wins over .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parses `KEY=VALUE`, skipping blanks and `#` comments. Surrounding quotes are stripped.
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}
