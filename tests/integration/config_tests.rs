//! Configuration loading

use crpt_api::{Config, CrptApi, CrptError, TimeUnit};
use std::io::Write;
use std::time::Duration;

const ENV_VARS: [&str; 5] = [
    "CRPT_ENDPOINT",
    "CRPT_TIMEOUT_SECS",
    "CRPT_RATE_LIMIT_CAPACITY",
    "CRPT_RATE_LIMIT_TIME_UNIT",
    "CRPT_RATE_LIMIT_PERIOD_COUNT",
];

#[tokio::test]
async fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "endpoint: http://localhost:8080/api/v3/lk/documents/create\n\
         timeout_secs: 5\n\
         rate_limit:\n  capacity: 3\n  time_unit: minutes\n  period_count: 2"
    )
    .unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.client().timeout_secs, 5);
    assert_eq!(config.rate_limit().capacity, 3);
    assert_eq!(config.rate_limit().time_unit, TimeUnit::Minutes);
    assert_eq!(config.rate_limit().period(), Duration::from_secs(120));

    let api = CrptApi::from_config(&config).unwrap();
    assert_eq!(api.gate().capacity(), 3);
    assert_eq!(api.gate().period(), Duration::from_secs(120));
}

#[tokio::test]
async fn test_zero_capacity_in_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rate_limit:\n  capacity: 0").unwrap();

    let err = Config::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, CrptError::Config(msg) if msg.contains("capacity")));
}

// Every CRPT_* variable is exercised in this one test so no other test
// observes a half-written environment.
#[test]
fn test_from_env() {
    // SAFETY: no other test in this binary reads or writes CRPT_* variables
    unsafe {
        std::env::set_var("CRPT_ENDPOINT", "http://localhost:9000/create");
        std::env::set_var("CRPT_TIMEOUT_SECS", "7");
        std::env::set_var("CRPT_RATE_LIMIT_CAPACITY", "4");
        std::env::set_var("CRPT_RATE_LIMIT_TIME_UNIT", "ms");
        std::env::set_var("CRPT_RATE_LIMIT_PERIOD_COUNT", "250");
    }

    let config = Config::from_env();

    unsafe {
        std::env::set_var("CRPT_RATE_LIMIT_CAPACITY", "0");
    }
    let invalid = Config::from_env();

    unsafe {
        std::env::set_var("CRPT_RATE_LIMIT_CAPACITY", "many");
    }
    let unparsable = Config::from_env();

    unsafe {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    let config = config.unwrap();
    assert_eq!(config.client().endpoint, "http://localhost:9000/create");
    assert_eq!(config.client().timeout_secs, 7);
    assert_eq!(config.rate_limit().capacity, 4);
    assert_eq!(config.rate_limit().period(), Duration::from_millis(250));

    assert!(matches!(invalid, Err(CrptError::Config(_))));
    assert!(matches!(unparsable, Err(CrptError::Config(_))));
}
