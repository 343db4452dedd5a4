//! Loading host config files.

use std::io::Write;
use tictactoe::{HostConfig, Player};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_x_name = \"Grace\"\nplayer_o_name = \"Ada\"\nempty_glyph = \"_\"\noffer_replay = false"
    )
    .unwrap();

    let config = HostConfig::from_file(file.path()).unwrap();
    assert_eq!(config.name_of(Player::X), "Grace");
    assert_eq!(config.name_of(Player::O), "Ada");
    assert_eq!(*config.empty_glyph(), '_');
    assert!(!*config.offer_replay());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HostConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, HostConfig::default());
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "offer_replay = \"sometimes\"").unwrap();

    let err = HostConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
