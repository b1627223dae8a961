//! Small text helpers shared by the stages

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Uppercase the first alphabetic character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut done = false;

    for ch in text.chars() {
        if !done && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            done = true;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Return `replacement`, capitalized when `source` starts with an uppercase letter
pub fn carry_leading_case(source: &str, replacement: &str) -> String {
    let starts_upper = source
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase);

    if starts_upper {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Whether byte offset `at` opens a sentence of `text`
///
/// True at the start of the text and after terminal punctuation (optionally
/// followed by closing quotes or brackets) and whitespace. Opening quotes and
/// brackets directly before `at` are skipped.
pub fn starts_sentence(text: &str, at: usize) -> bool {
    let before = text[..at].trim_end_matches(['"', '\'', '(', '[', '\u{201C}', '\u{2018}', '\u{00AB}']);
    let trimmed = before.trim_end();
    if trimmed.is_empty() {
        return true;
    }
    if trimmed.len() == before.len() {
        return false;
    }
    trimmed
        .trim_end_matches(['"', '\'', ')', ']', '\u{201D}', '\u{2019}', '\u{00BB}'])
        .ends_with(['.', '!', '?'])
}

/// Whether `needle` occurs in `haystack` bounded by non-word characters
///
/// Both arguments are expected to be lowercase already.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
