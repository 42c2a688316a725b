//! Edge case tests for esql-sp

use crate::{decode_quoted_string, quote_string, Scanned, Scanner, Token};
use esql_util::Pos;
use proptest::prelude::*;

fn scan_all(source: &str) -> Vec<Scanned> {
    let mut scanner = Scanner::new(source);
    let mut triples = Vec::new();
    loop {
        let scanned = scanner.scan();
        if scanned.0 == Token::Eof {
            break;
        }
        triples.push(scanned);
    }
    triples
}

fn tokens(source: &str) -> Vec<Token> {
    scan_all(source).into_iter().map(|(token, _, _)| token).collect()
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let triples = scan_all(&name);
    assert_eq!(triples, vec![(Token::Ident, Pos::ZERO, name)]);
}

#[test]
fn test_edge_long_whitespace_run() {
    let source = " \r\n".repeat(1000);
    let triples = scan_all(&source);
    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].2, " \n".repeat(1000));
}

#[test]
fn test_edge_lone_at_sign() {
    assert_eq!(scan_all("@"), vec![(Token::Ident, Pos::ZERO, "@".to_string())]);
}

#[test]
fn test_edge_lone_underscore() {
    assert_eq!(scan_all("_"), vec![(Token::Ident, Pos::ZERO, "_".to_string())]);
}

#[test]
fn test_edge_nested_parens() {
    let t = tokens("((()))");
    assert_eq!(t.iter().filter(|x| **x == Token::LParen).count(), 3);
    assert_eq!(t.iter().filter(|x| **x == Token::RParen).count(), 3);
}

#[test]
fn test_edge_adjacent_strings() {
    let triples = scan_all(r#"'a'"b""#);
    assert_eq!(
        triples,
        vec![
            (Token::String, Pos::ZERO, "a".to_string()),
            (Token::String, Pos::new(0, 3), "b".to_string()),
        ]
    );
}

#[test]
fn test_edge_negative_number_is_two_tokens() {
    assert_eq!(tokens("-5"), vec![Token::Sub, Token::Integer]);
}

#[test]
fn test_edge_scientific_notation_is_not_a_float() {
    assert_eq!(tokens("1e10"), vec![Token::Integer, Token::Ident]);
}

#[test]
fn test_edge_string_position_on_later_line() {
    let triples = scan_all("a\n  'x'");
    assert_eq!(triples[2], (Token::String, Pos::new(1, 2), "x".to_string()));
}

#[test]
fn test_edge_bad_escape_on_later_line() {
    let triples = scan_all("\r\n'ab\\z'");
    assert_eq!(triples[1], (Token::BadEscape, Pos::new(1, 3), "\\z".to_string()));
}

#[test]
fn test_edge_backslash_newline_is_bad_escape() {
    let triples = scan_all("'a\\\nb'");
    assert_eq!(triples[0], (Token::BadEscape, Pos::new(0, 2), "\\\n".to_string()));
}

#[test]
fn test_edge_eof_position_after_newline() {
    let mut scanner = Scanner::new("x\n");
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.scan(), (Token::Eof, Pos::new(1, 0), String::new()));
}

#[test]
fn test_edge_control_characters_are_illegal() {
    assert_eq!(tokens("\u{0}\u{b}\u{c}"), vec![Token::Illegal; 3]);
}

#[test]
fn test_edge_keyword_glued_to_operator() {
    assert_eq!(
        tokens("a=b AND(c)"),
        vec![
            Token::Ident,
            Token::Eq,
            Token::Ident,
            Token::Whitespace,
            Token::And,
            Token::LParen,
            Token::Ident,
            Token::RParen,
        ]
    );
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_whitespace_only_input() {
    proptest!(|(input in "[ \t\r\n]{1,64}")| {
        let triples = scan_all(&input);
        prop_assert_eq!(triples.len(), 1);
        prop_assert_eq!(triples[0].0, Token::Whitespace);
        prop_assert_eq!(triples[0].1, Pos::ZERO);
        prop_assert_eq!(&triples[0].2, &normalize_line_endings(&input));
    });
}

#[test]
fn test_property_plain_string_content() {
    proptest!(|(content in "[^\"'\\\\\r\n]{0,64}", double in any::<bool>())| {
        let quote = if double { '"' } else { '\'' };
        let source = format!("{quote}{content}{quote}");
        let triples = scan_all(&source);
        prop_assert_eq!(triples, vec![(Token::String, Pos::ZERO, content.clone())]);
        prop_assert_eq!(decode_quoted_string(&source).unwrap(), content);
    });
}

#[test]
fn test_property_quote_then_decode() {
    proptest!(|(text in "[^\r]{0,64}", double in any::<bool>())| {
        let quote = if double { '"' } else { '\'' };
        let quoted = quote_string(&text, quote);
        prop_assert_eq!(decode_quoted_string(&quoted).unwrap(), text.clone());

        let (token, _, literal) = Scanner::new(&quoted).scan();
        prop_assert_eq!(token, Token::String);
        prop_assert_eq!(literal, text);
    });
}

#[test]
fn test_property_unterminated_string() {
    proptest!(|(content in "[^\"\\\\\r\n]{0,64}", newline in any::<bool>())| {
        let source = if newline {
            format!("\"{content}\nrest")
        } else {
            format!("\"{content}")
        };
        let (token, pos, literal) = Scanner::new(&source).scan();
        prop_assert_eq!(token, Token::BadString);
        prop_assert_eq!(pos, Pos::ZERO);
        prop_assert_eq!(literal, content);
    });
}

#[test]
fn test_property_integer_literals() {
    proptest!(|(input in "[0-9]{1,24}")| {
        prop_assert_eq!(scan_all(&input), vec![(Token::Integer, Pos::ZERO, input.clone())]);
    });
}

#[test]
fn test_property_float_literals() {
    proptest!(|(input in "[0-9]{1,12}\\.[0-9]{0,12}")| {
        prop_assert_eq!(scan_all(&input), vec![(Token::Float, Pos::ZERO, input.clone())]);
    });
}

#[test]
fn test_property_identifier_case_preserved() {
    proptest!(|(input in "[a-zA-Z_@][a-zA-Z0-9_]{0,30}")| {
        let triples = scan_all(&input);
        prop_assert_eq!(triples.len(), 1);
        let (token, _, literal) = &triples[0];
        if Token::lookup(&input) == Token::Ident {
            prop_assert_eq!(*token, Token::Ident);
            prop_assert_eq!(literal, &input);
        } else {
            prop_assert!(token.is_keyword());
            prop_assert!(literal.is_empty());
        }
    });
}

#[test]
fn test_property_keywords_any_case() {
    proptest!(|(index in 0..Token::KEYWORDS.len(), mask in any::<u8>())| {
        let keyword = Token::KEYWORDS[index];
        let spelled: String = keyword
            .as_str()
            .chars()
            .enumerate()
            .map(|(i, c)| if mask & (1 << (i % 8)) != 0 { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(scan_all(&spelled), vec![(keyword, Pos::ZERO, String::new())]);
    });
}

#[test]
fn test_property_positions_strictly_increase() {
    proptest!(|(input in "[ -~\t\r\n]{0,80}")| {
        let triples = scan_all(&input);
        prop_assert!(triples.len() <= input.chars().count());
        for pair in triples.windows(2) {
            prop_assert!(pair[0].1 < pair[1].1, "{:?} then {:?}", pair[0], pair[1]);
        }
    });
}
