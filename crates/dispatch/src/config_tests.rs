use super::*;

fn full_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        (KEY_GITHUB_TOKEN, "abc"),
        (KEY_GITHUB_REPO_OWNER, "samsipe"),
        (KEY_GITHUB_REPO_NAME, "nvidia-gpu-stock-checker"),
        (KEY_GITHUB_WORKFLOW_ID, "check_stock.yml"),
    ]
}

fn without(key: &str) -> InvocationContext {
    InvocationContext::from_pairs(full_pairs().into_iter().filter(|(k, _)| *k != key))
}

#[test]
fn test_validate_complete_context() {
    let config = InvocationContext::from_pairs(full_pairs())
        .validate()
        .unwrap();

    assert_eq!(config.token.expose(), "abc");
    assert_eq!(config.owner.as_str(), "samsipe");
    assert_eq!(config.repo.as_str(), "nvidia-gpu-stock-checker");
    assert_eq!(config.workflow.as_str(), "check_stock.yml");
}

#[test]
fn test_validate_reports_each_missing_key() {
    for key in [
        KEY_GITHUB_TOKEN,
        KEY_GITHUB_REPO_OWNER,
        KEY_GITHUB_REPO_NAME,
        KEY_GITHUB_WORKFLOW_ID,
    ] {
        assert_eq!(without(key).validate(), Err(ConfigError::Missing { key }));
    }
}

#[test]
fn test_validate_treats_empty_value_as_missing() {
    let mut pairs = full_pairs();
    pairs[2] = (KEY_GITHUB_REPO_NAME, "");
    let err = InvocationContext::from_pairs(pairs).validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Missing {
            key: KEY_GITHUB_REPO_NAME
        }
    );
}

#[test]
fn test_validate_reports_token_first() {
    let err = InvocationContext::default().validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Missing {
            key: KEY_GITHUB_TOKEN
        }
    );
}

#[test]
fn test_unknown_keys_are_dropped() {
    let mut pairs = full_pairs();
    pairs.push(("TWILIO_AUTH_TOKEN", "other"));
    let context = InvocationContext::from_pairs(pairs);
    assert_eq!(context.get("TWILIO_AUTH_TOKEN"), None);
    assert_eq!(context.get(KEY_GITHUB_REPO_OWNER), Some("samsipe"));
}

#[test]
fn test_debug_redacts_token() {
    let context = InvocationContext::from_pairs([(KEY_GITHUB_TOKEN, "ghp_very_secret")]);
    let debug = format!("{context:?}");
    assert!(!debug.contains("ghp_very_secret"));
    assert!(debug.contains(KEY_GITHUB_TOKEN));
}
