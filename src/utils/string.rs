//! String handling utilities
//!
//! Presence checks, literal substring replacement and tokenization helpers.
//! Every function here is pure and total: absent, empty or non-matching input
//! degrades to `false`, the unchanged input, or an empty list.
//!
//! Two whitespace definitions coexist on purpose:
//! - [`has_text`] and [`contains_whitespace`] use Unicode whitespace
//!   (`char::is_whitespace`)
//! - token trimming in [`tokenize_with`] strips only chars at or below
//!   U+0020 (ASCII control characters and the space)

use std::borrow::Cow;

/// Extra capacity reserved by [`replace`] when the replacement is longer than the pattern
const REPLACE_CAPACITY_MARGIN: usize = 16;

/// Check that a string is present and not empty
///
/// Whitespace-only text counts as having length.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(has_length(None), false);
/// assert_eq!(has_length(Some("")), false);
/// assert_eq!(has_length(Some(" ")), true);
/// ```
pub fn has_length(text: Option<&str>) -> bool {
    matches!(text, Some(t) if !t.is_empty())
}

/// Check that a string is present and contains at least one non-whitespace character
///
/// # Example
/// ```rust,ignore
/// assert_eq!(has_text(Some("   ")), false);
/// assert_eq!(has_text(Some(" a ")), true);
/// ```
pub fn has_text(text: Option<&str>) -> bool {
    match text {
        Some(t) if has_length(text) => t.chars().any(|c| !c.is_whitespace()),
        _ => false,
    }
}

/// Check whether a string is present and contains any whitespace character
pub fn contains_whitespace(text: Option<&str>) -> bool {
    match text {
        Some(t) if has_length(text) => t.chars().any(char::is_whitespace),
        _ => false,
    }
}

/// Replace all occurrences of a substring with another string
///
/// Matching is literal, left to right and non-overlapping. After each match the
/// search resumes right after the matched occurrence, so the inserted text is
/// never scanned again.
///
/// The input is returned borrowed and unchanged when `text` or `old_pattern`
/// is empty, when `new_pattern` is `None`, or when the pattern does not occur.
///
/// # Arguments
/// * `text` - String to examine
/// * `old_pattern` - Substring to replace
/// * `new_pattern` - Substring to insert, `None` disables replacement
///
/// # Example
/// ```rust,ignore
/// assert_eq!(replace("banana", "an", Some("XY")), "bXYXYa");
/// assert_eq!(replace("hello", "l", None), "hello");
/// ```
pub fn replace<'a>(text: &'a str, old_pattern: &str, new_pattern: Option<&str>) -> Cow<'a, str> {
    let new_pattern = match new_pattern {
        Some(p) if has_length(Some(text)) && has_length(Some(old_pattern)) => p,
        _ => return Cow::Borrowed(text),
    };

    let mut index = match text.find(old_pattern) {
        Some(i) => i,
        None => return Cow::Borrowed(text),
    };

    let mut capacity = text.len();
    if new_pattern.len() > old_pattern.len() {
        capacity += REPLACE_CAPACITY_MARGIN;
    }
    let mut result = String::with_capacity(capacity);

    let mut pos = 0;
    let mut replaced = 0usize;
    loop {
        result.push_str(&text[pos..index]);
        result.push_str(new_pattern);
        replaced += 1;
        pos = index + old_pattern.len();

        match text[pos..].find(old_pattern) {
            Some(offset) => index = pos + offset,
            None => break,
        }
    }
    // append any characters to the right of the last match
    result.push_str(&text[pos..]);

    log::trace!("replace: {} occurrence(s) of {:?}", replaced, old_pattern);
    Cow::Owned(result)
}

/// Delete all occurrences of the given substring
///
/// # Example
/// ```rust,ignore
/// assert_eq!(delete("a-b-c", "-"), "abc");
/// ```
pub fn delete<'a>(text: &'a str, pattern: &str) -> Cow<'a, str> {
    replace(text, pattern, Some(""))
}

/// Delete every character contained in `chars_to_delete`
///
/// # Example
/// ```rust,ignore
/// assert_eq!(delete_any("a\tb\nc", "\t\n"), "abc");
/// ```
pub fn delete_any<'a>(text: &'a str, chars_to_delete: &str) -> Cow<'a, str> {
    if !has_length(Some(text))
        || !has_length(Some(chars_to_delete))
        || !text.contains(|c: char| chars_to_delete.contains(c))
    {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .filter(|c| !chars_to_delete.contains(*c))
            .collect(),
    )
}

/// Tokenize a string, trimming tokens and ignoring empty ones
///
/// Shorthand for `tokenize_with(text, delimiters, true, true)`.
///
/// # Arguments
/// * `text` - String to tokenize, `None` yields an empty list
/// * `delimiters` - Delimiter characters, each one is a delimiter on its own
///
/// # Example
/// ```rust,ignore
/// let tokens = tokenize(Some(" a , b ;c"), ",;");
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
pub fn tokenize(text: Option<&str>, delimiters: &str) -> Vec<String> {
    tokenize_with(text, delimiters, true, true)
}

/// Tokenize a string at any of the given delimiter characters
///
/// Consecutive delimiters are consumed together: the splitter itself never
/// produces an empty token. An empty token can only appear when trimming
/// reduces a whitespace-only token to nothing and `ignore_empty_tokens` is off.
///
/// Trimming strips characters at or below U+0020 from both ends of each token.
///
/// # Arguments
/// * `text` - String to tokenize, `None` yields an empty list
/// * `delimiters` - Delimiter characters, each one is a delimiter on its own
/// * `trim_tokens` - Trim each token
/// * `ignore_empty_tokens` - Drop tokens that are empty after trimming
///
/// # Example
/// ```rust,ignore
/// let tokens = tokenize_with(Some(" a , b "), ",", false, true);
/// assert_eq!(tokens, vec![" a ", " b "]);
/// ```
pub fn tokenize_with(
    text: Option<&str>,
    delimiters: &str,
    trim_tokens: bool,
    ignore_empty_tokens: bool,
) -> Vec<String> {
    let text = match text {
        Some(t) => t,
        None => return Vec::new(),
    };

    let tokens: Vec<String> = text
        .split(|c: char| delimiters.contains(c))
        .filter(|raw| !raw.is_empty())
        .map(|raw| if trim_tokens { trim_token(raw) } else { raw })
        .filter(|token| !(ignore_empty_tokens && token.is_empty()))
        .map(str::to_string)
        .collect();

    log::trace!(
        "tokenize: {} token(s) from {} byte(s) using {:?}",
        tokens.len(),
        text.len(),
        delimiters
    );
    tokens
}

/// Split a string at a whole delimiter string
///
/// Unlike [`tokenize`], the delimiter is matched as a complete string and empty
/// fields are kept, including a trailing one.
///
/// - `None` text yields an empty list
/// - `None` delimiter yields the whole text as a single element
/// - an empty delimiter yields one element per character
///
/// # Example
/// ```rust,ignore
/// assert_eq!(delimited_list(Some("a::b::"), Some("::")), vec!["a", "b", ""]);
/// ```
pub fn delimited_list(text: Option<&str>, delimiter: Option<&str>) -> Vec<String> {
    delimited_list_deleting(text, delimiter, "")
}

/// Split a string at a whole delimiter string, deleting unwanted characters from each field
///
/// # Arguments
/// * `text` - String to split
/// * `delimiter` - Delimiter string
/// * `chars_to_delete` - Characters removed from every field, e.g. line breaks
pub fn delimited_list_deleting(
    text: Option<&str>,
    delimiter: Option<&str>,
    chars_to_delete: &str,
) -> Vec<String> {
    let text = match text {
        Some(t) => t,
        None => return Vec::new(),
    };
    let delimiter = match delimiter {
        Some(d) => d,
        None => return vec![text.to_string()],
    };
    if text.is_empty() {
        return Vec::new();
    }

    if delimiter.is_empty() {
        return text
            .chars()
            .map(|c| {
                let mut buf = [0u8; 4];
                delete_any(c.encode_utf8(&mut buf), chars_to_delete).into_owned()
            })
            .collect();
    }

    text.split(delimiter)
        .map(|field| delete_any(field, chars_to_delete).into_owned())
        .collect()
}

/// Split a comma-delimited string, keeping empty fields
pub fn comma_delimited_list(text: Option<&str>) -> Vec<String> {
    delimited_list(text, Some(","))
}

/// Join items into a single string separated by `delimiter`
///
/// # Example
/// ```rust,ignore
/// assert_eq!(join(["a", "b", "c"], ", "), "a, b, c");
/// ```
pub fn join<I, S>(items: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            result.push_str(delimiter);
        }
        result.push_str(item.as_ref());
    }
    result
}

// ASCII control characters and the space, not full Unicode whitespace
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| c <= ' ')
}
