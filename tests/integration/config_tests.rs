use dedup::cli::OutputFormat;
use dedup::config::{Config, ENV_PREFIX};
use dedup::scanner::CHUNK_SIZE;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

// Tests that read `DEDUP_*` variables must not overlap.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_config_load_defaults() {
    // Use figment directly without Env to avoid interference from other tests
    let figment = Figment::from(Serialized::defaults(Config::default()));
    let config: Config = figment.extract().unwrap();
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.chunk_size, CHUNK_SIZE);
    assert!(config.progress);
}

#[test]
fn test_config_load_from_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let toml_content = r#"
output = "json"
chunk_size = 65536
progress = false
"#;
    fs::write(&config_path, toml_content).unwrap();

    let figment =
        Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(&config_path));
    let config: Config = figment.extract().unwrap();

    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.chunk_size, 65536);
    assert!(!config.progress);
}

#[test]
fn test_config_env_overrides_toml() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "output = \"csv\"\nchunk_size = 2048\n").unwrap();

    std::env::set_var("DEDUP_CHUNK_SIZE", "4096");
    let config = Config::load_from(&config_path);
    std::env::remove_var("DEDUP_CHUNK_SIZE");

    let config = config.unwrap();
    assert_eq!(config.output, OutputFormat::Csv);
    assert_eq!(config.chunk_size, 4096);
}

#[test]
fn test_config_load_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("DEDUP_OUTPUT", "json");
    std::env::set_var("DEDUP_PROGRESS", "false");

    let figment =
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX));
    let config: Result<Config, _> = figment.extract();

    std::env::remove_var("DEDUP_OUTPUT");
    std::env::remove_var("DEDUP_PROGRESS");

    let config = config.unwrap();
    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.progress);
    assert_eq!(config.chunk_size, CHUNK_SIZE);
}

#[test]
fn test_config_missing_file_is_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();

    let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_zero_chunk_size_rejected() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "chunk_size = 0\n").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(err.to_string().contains("chunk_size"));
}

#[test]
fn test_config_unknown_output_rejected() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "output = \"xml\"\n").unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn test_config_path_is_named_config_toml() {
    if let Ok(path) = Config::config_path() {
        assert!(path.ends_with("config.toml"));
        assert!(path.parent().unwrap().to_string_lossy().contains("dedup"));
    }
}
