//! Integration tests for configuration-driven validation

use formcheck::prelude::*;
use std::io::Write;

const CONFIG: &str = r#"
fields:
  login:
    required: true
    regex: '^[a-z0-9_]+$'
    max: 16
  quota:
    min: 1
    max: 1024
  pwd_again:
    password: pwd1
"#;

fn account_form() -> Form {
    Form::new()
        .with_field(Field::text("login").with_value("Bad Name"))
        .with_field(Field::number("quota").with_value("2048"))
        .with_field(Field::password("pwd").with_id("pwd1").with_value("x"))
        .with_field(Field::password("pwd_again").with_value("x"))
}

#[test]
fn test_yaml_file_drives_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = FormConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    let mut form = account_form();
    config.apply(&mut form).unwrap();

    let invalid = config.validator().validate(&mut form);
    let results: Vec<(&str, &str)> = invalid
        .iter()
        .map(|f| (f.name.as_str(), f.message()))
        .collect();
    assert_eq!(
        results,
        vec![("login", "invalid value"), ("quota", "invalid value")]
    );
}

#[test]
fn test_config_matches_attribute_rules() {
    let config = FormConfig::from_yaml_str(CONFIG).unwrap();
    let mut configured = account_form();
    config.apply(&mut configured).unwrap();

    let mut annotated = Form::new()
        .with_field(
            Field::text("login")
                .with_value("Bad Name")
                .with_attribute("valid.required", "true")
                .and_then(|f| f.with_attribute("valid.regex", "^[a-z0-9_]+$"))
                .and_then(|f| f.with_attribute("valid.max", "16"))
                .unwrap(),
        )
        .with_field(
            Field::number("quota")
                .with_value("2048")
                .with_attribute("valid.min", "1")
                .and_then(|f| f.with_attribute("valid.max", "1024"))
                .unwrap(),
        )
        .with_field(Field::password("pwd").with_id("pwd1").with_value("x"))
        .with_field(
            Field::password("pwd_again")
                .with_value("x")
                .with_attribute("valid.password", "pwd1")
                .unwrap(),
        );

    assert_eq!(validate(&mut configured), validate(&mut annotated));
    assert_eq!(configured.annotations(), annotated.annotations());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(FormConfig::from_yaml_file("/nonexistent/formcheck.yaml").is_err());
}

#[test]
fn test_bad_regex_in_config_is_an_error() {
    let result = FormConfig::from_yaml_str("fields:\n  login:\n    regex: '(['\n");
    assert!(result.is_err());
}
