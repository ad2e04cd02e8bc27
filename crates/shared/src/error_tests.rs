use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::NotFound("test".into()), 404, "NOT_FOUND")]
#[case(AppError::Validation("test".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::Conflict("test".into()), 409, "CONFLICT")]
#[case(AppError::Configuration("test".into()), 500, "CONFIGURATION_ERROR")]
#[case(AppError::Internal("test".into()), 500, "INTERNAL_ERROR")]
fn test_app_error_codes(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
    assert_eq!(err.status_code(), status);
    assert_eq!(err.error_code(), code);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Conflict("msg".into())),
        "Conflict: msg"
    );
    assert_eq!(
        format!("{}", AppError::Configuration("msg".into())),
        "Configuration error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}

#[test]
fn test_user_errors() {
    assert!(AppError::Validation(String::new()).is_user_error());
    assert!(AppError::Conflict(String::new()).is_user_error());
    assert!(AppError::NotFound(String::new()).is_user_error());
    assert!(!AppError::Internal(String::new()).is_user_error());
    assert!(!AppError::Configuration(String::new()).is_user_error());
}

#[test]
fn test_config_error_conversion() {
    let err: AppError = config::ConfigError::Message("bad key".into()).into();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    assert!(err.to_string().contains("bad key"));
}
