//! Acceptability filter: refuses documents where noise drowns the content.

use std::sync::LazyLock;

use regex::Regex;

use valence_core::config::FilterConfig;
use valence_core::errors::RejectReason;

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\S+").unwrap());
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\S+").unwrap());

/// Decide whether a document carries enough real content to be worth scoring.
/// Pure; no state, no storage.
///
/// Rejects when mentions alone are too many or too long, when hashtags alone
/// are too many or too long, or when mentions and hashtags together cover
/// more than `noise_ratio` of the text. Lengths are in characters.
pub fn acceptability(text: &str, config: &FilterConfig) -> Result<(), RejectReason> {
    let text_len = text.chars().count();
    let half = text_len as f64 / 2.0;

    let mentions: Vec<&str> = MENTION_RE.find_iter(text).map(|m| m.as_str()).collect();
    let hashtags: Vec<&str> = HASHTAG_RE.find_iter(text).map(|m| m.as_str()).collect();

    if mentions.len() > config.max_mentions || joined_len(&mentions) as f64 > half {
        return Err(RejectReason::TooManyMentions);
    }

    if hashtags.len() > config.max_hashtags || joined_len(&hashtags) as f64 > half {
        return Err(RejectReason::TooManyHashtags);
    }

    let bare: usize = mentions
        .iter()
        .chain(hashtags.iter())
        .map(|m| m.chars().count())
        .sum();
    if bare as f64 > config.noise_ratio * text_len as f64 {
        return Err(RejectReason::NoiseDominates);
    }

    Ok(())
}

/// Boolean convenience wrapper.
pub fn is_acceptable(text: &str, config: &FilterConfig) -> bool {
    acceptability(text, config).is_ok()
}

/// Length of the matches joined by single spaces, in characters.
fn joined_len(matches: &[&str]) -> usize {
    if matches.is_empty() {
        return 0;
    }
    matches.iter().map(|m| m.chars().count()).sum::<usize>() + matches.len() - 1
}
