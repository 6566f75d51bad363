//! Integration tests for the string helpers exposed through the public API

use std::borrow::Cow;
use text_utils::prelude::*;
use text_utils::utils::string;

#[test]
fn test_presence_checks() {
    assert!(!has_length(None));
    assert!(!has_length(Some("")));
    assert!(has_length(Some(" ")));
    assert!(has_length(Some("a")));

    assert!(!has_text(None));
    assert!(!has_text(Some("")));
    assert!(!has_text(Some("   ")));
    assert!(has_text(Some(" a ")));
}

#[test]
fn test_presence_checks_are_repeatable() {
    let input = Some(" \t ");
    assert_eq!(has_length(input), has_length(input));
    assert_eq!(has_text(input), has_text(input));
    assert!(has_length(input) && !has_text(input));
}

#[test]
fn test_replace_examples() {
    assert_eq!(replace("xyz", "a", Some("b")), "xyz");
    assert_eq!(replace("banana", "an", Some("XY")), "bXYXYa");
    assert_eq!(replace("hello", "l", None), "hello");
}

#[test]
fn test_replace_is_identity_without_match() {
    let inputs = ["", "abc", "a b c", "ünïcödé", "aaaa"];
    for input in inputs {
        let result = replace(input, "zz", Some("anything"));
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }
}

#[test]
fn test_replace_does_not_rescan_replacement() {
    // the replacement contains the pattern but is never matched again
    assert_eq!(replace("ab", "a", Some("aa")), "aab");
    assert_eq!(replace("{x}{x}", "{x}", Some("{x}{x}")), "{x}{x}{x}{x}");
}

#[test]
fn test_tokenize_examples() {
    assert_eq!(tokenize_with(Some("a,b,,c"), ",", true, true), vec!["a", "b", "c"]);
    assert_eq!(tokenize_with(Some(" a , b "), ",", true, true), vec!["a", "b"]);
    assert_eq!(
        tokenize_with(Some(" a , b "), ",", false, true),
        vec![" a ", " b "]
    );
    assert!(tokenize_with(None, ",", true, true).is_empty());
}

#[test]
fn test_tokenize_two_and_four_argument_shapes_agree() {
    let text = Some(" one;two ,, three\n");
    assert_eq!(tokenize(text, ",;\n"), tokenize_with(text, ",;\n", true, true));
    assert_eq!(
        TokenizeOptions::default().tokenize(text, ",;\n"),
        tokenize(text, ",;\n")
    );
}

#[test]
fn test_tokenize_preserves_order() {
    let tokens = tokenize(Some("z,y,x,w"), ",");
    assert_eq!(tokens, vec!["z", "y", "x", "w"]);
}

#[test]
fn test_tokenize_then_join() {
    let tokens = tokenize(Some("  alpha ; beta;gamma  "), ";");
    assert_eq!(string::join(&tokens, ","), "alpha,beta,gamma");
}

#[test]
fn test_delimited_list_keeps_empty_fields() {
    assert_eq!(
        string::delimited_list(Some("a,,b,"), Some(",")),
        vec!["a", "", "b", ""]
    );
    // tokenize drops the same empty fields
    assert_eq!(tokenize(Some("a,,b,"), ","), vec!["a", "b"]);
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("t{i}, u{i} ,v{i}");
                tokenize(Some(text.as_str()), ",")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let tokens = handle.join().unwrap();
        assert_eq!(
            tokens,
            vec![format!("t{i}"), format!("u{i}"), format!("v{i}")]
        );
    }
}
