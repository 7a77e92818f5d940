use clap::CommandFactory;

use super::*;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_serve_with_explicit_bind() {
    let cli = Cli::try_parse_from(["sms-trigger", "serve", "--bind", "127.0.0.1:8080"]).unwrap();
    match cli.command {
        Command::Serve { bind } => assert_eq!(bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap()),
        Command::Trigger => panic!("expected serve"),
    }
}

#[test]
fn test_trigger_with_json_logs() {
    let cli = Cli::try_parse_from(["sms-trigger", "trigger", "--log-format", "json"]).unwrap();
    assert!(matches!(cli.command, Command::Trigger));
    assert_eq!(cli.log_format, LogFormat::Json);
}

#[test]
fn test_invalid_bind_is_rejected() {
    assert!(Cli::try_parse_from(["sms-trigger", "serve", "--bind", "not-an-address"]).is_err());
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["sms-trigger"]).is_err());
}

#[test]
fn test_missing_env_file_is_accepted() {
    let loaded = dotenvy::from_filename("sms-trigger-does-not-exist.env");
    assert!(check_env_file(loaded).is_ok());
}

#[test]
fn test_malformed_env_file_is_rejected() {
    let path = std::env::temp_dir().join(format!("sms-trigger-{}.env", std::process::id()));
    std::fs::write(&path, "this line is not valid\n").unwrap();

    let loaded = dotenvy::from_path(&path);
    std::fs::remove_file(&path).unwrap();

    let err = check_env_file(loaded).unwrap_err();
    assert_eq!(err.to_string(), "failed to load .env");
}
