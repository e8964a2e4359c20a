// Text normalization shared by every stage of the generator.
//
// `normalize` is the canonical form all comparisons run on: the Markov
// builder tokenizes corpus slogans with it, the constraint filter compares
// normalized candidates against normalized must/avoid phrases, and the
// scorer counts normalized tokens. Keeping one definition here means a
// candidate is judged on exactly the tokens it was built from.
//
// All functions are pure and total.

/// Lowercase, drop everything except `[a-z0-9]`, whitespace, apostrophes and
/// hyphens, collapse whitespace runs to a single space, and trim.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let kept: String = s
        .to_lowercase()
        .chars()
        .filter(|&c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '\'' || c == '-'
        })
        .collect();
    collapse_whitespace(&kept)
}

/// Normalize, then split into tokens. Never yields empty tokens.
pub fn tokenize(s: &str) -> Vec<String> {
    normalize(s).split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect()
}

/// Number of tokens `tokenize` would produce, without allocating them.
pub fn token_count(s: &str) -> usize {
    normalize(s).split_whitespace().count()
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Capitalize the first word character (`[A-Za-z0-9_]`) of every
/// whitespace-delimited token, leaving everything else untouched.
///
/// Tokens without a word character (e.g. a `•` separator) pass through.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalized = false;
    for c in s.chars() {
        if c.is_whitespace() {
            capitalized = false;
            out.push(c);
        } else if !capitalized && is_word_char(c) {
            capitalized = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// True if `s` ends in a word character (`[A-Za-z0-9_]`).
pub fn ends_with_word_char(s: &str) -> bool {
    s.chars().next_back().is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
