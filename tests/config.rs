use std::{
    fs,
    time::{SystemTime, UNIX_EPOCH},
};

use microdata_rs::{
    config::Config,
    logger::{Format, LogLevel},
    vocabulary::{HasThing, Person},
    Error,
};
use serde_json::json;

fn temp_config(content: &str) -> std::path::PathBuf {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("microdata-rs-{seed}.yaml"));
    fs::write(&path, content).expect("config file");
    path
}

#[test]
fn file_config_drives_the_serializer() {
    let path = temp_config(
        r#"
logger:
  enable: false
  level: {{ get_env(name="MICRODATA_RS_TEST_UNSET", default="debug") }}
  format: pretty
serializer:
  emit_type: false
  context: ~
"#,
    );

    let config = Config::from_file(&path).expect("config");
    fs::remove_file(&path).expect("cleanup");

    assert!(!config.logger.enable);
    assert_eq!(config.logger.level, LogLevel::Debug);
    assert_eq!(config.logger.format, Format::Pretty);
    assert_eq!(
        config.serializer().entity_to_value(&Person::named("Jane")),
        json!({ "name": "Jane" })
    );
}

#[test]
fn missing_file_reports_its_path() {
    let path = std::env::temp_dir().join("microdata-rs-missing.yaml");
    match Config::from_file(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}
