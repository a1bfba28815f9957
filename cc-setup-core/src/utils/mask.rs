use crate::config::constants::ui::TOKEN_MASK;

const VISIBLE_EDGE: usize = 4;

/// Hide a secret for display: first and last four characters around `...`, or a fixed
/// mask when the secret is too short to reveal anything safely.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= VISIBLE_EDGE * 2 {
        return TOKEN_MASK.to_string();
    }

    let head: String = chars[..VISIBLE_EDGE].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_EDGE..].iter().collect();
    format!("{head}...{tail}")
}
