use nanoid::nanoid;

use crate::constants::EXTERNAL_TOKEN_LEN;

/// Generate a fresh external token for a template
///
/// Tokens are opaque URL-safe strings, collision-resistant at this length.
/// The save transaction still checks the token index and regenerates on the
/// (vanishingly rare) collision.
pub fn generate_external_token() -> String {
    nanoid!(EXTERNAL_TOKEN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_length() {
        assert_eq!(generate_external_token().len(), EXTERNAL_TOKEN_LEN);
    }

    #[test]
    fn test_tokens_are_url_safe() {
        let token = generate_external_token();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn test_tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_external_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
