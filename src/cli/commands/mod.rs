//! CLI command implementations

pub mod analyze;
pub mod evaluate;
pub mod export;
pub mod play;

use crate::board::Player;

/// Parse an `x`/`o` token from a CLI flag.
pub(crate) fn parse_player_token(value: &str, flag: &str) -> anyhow::Result<Player> {
    match value.to_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" | "0" => Ok(Player::O),
        other => Err(anyhow::anyhow!(
            "invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("x", "--mark").unwrap(), Player::X);
        assert_eq!(parse_player_token("X", "--mark").unwrap(), Player::X);
        assert_eq!(parse_player_token("o", "--mark").unwrap(), Player::O);
        assert!(parse_player_token("q", "--mark").is_err());
    }
}
