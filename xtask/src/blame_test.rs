//! Tests for the blame porcelain parser.

use std::path::Path;

use crate::blame::parse_porcelain;

// Minimal --line-porcelain stream: full header repeated per line, content
// lines prefixed with a tab.
fn porcelain_line(author: &str, mail: &str, time: i64, content: &str) -> String {
    format!(
        "0000000000000000000000000000000000000000 1 1\n\
         author {author}\n\
         author-mail <{mail}>\n\
         author-time {time}\n\
         author-tz +0000\n\
         committer {author}\n\
         committer-mail <{mail}>\n\
         committer-time {time}\n\
         committer-tz +0000\n\
         summary a change\n\
         filename demo.py\n\
         \t{content}\n"
    )
}

// 2024-06-01T00:00:00Z and 2020-06-01T00:00:00Z
const T_2024: i64 = 1717200000;
const T_2020: i64 = 1590969600;

#[test]
fn test_contiguous_block_collapses() {
    let output = [
        porcelain_line("Dave", "dave@example.com", T_2024, "line one"),
        porcelain_line("Dave", "dave@example.com", T_2024, "line two"),
        porcelain_line("Dave", "dave@example.com", T_2024, "line three"),
    ]
    .concat();
    let contributions = parse_porcelain(Path::new("demo.py"), &output).unwrap();
    assert_eq!(contributions.len(), 1);
    assert_eq!(contributions[0].author, "Dave");
    assert_eq!(contributions[0].email, "dave@example.com");
    assert_eq!(contributions[0].year, 2024);
    assert_eq!(contributions[0].path, Path::new("demo.py"));
}

#[test]
fn test_alternating_authors_split_blocks() {
    let output = [
        porcelain_line("Dave", "dave@example.com", T_2024, "a"),
        porcelain_line("Erin", "erin@example.com", T_2020, "b"),
        porcelain_line("Dave", "dave@example.com", T_2024, "c"),
    ]
    .concat();
    let contributions = parse_porcelain(Path::new("demo.py"), &output).unwrap();
    assert_eq!(contributions.len(), 3);
    assert_eq!(contributions[1].author, "Erin");
    assert_eq!(contributions[1].year, 2020);
}

#[test]
fn test_same_author_different_time_splits() {
    let output = [
        porcelain_line("Dave", "dave@example.com", T_2020, "a"),
        porcelain_line("Dave", "dave@example.com", T_2024, "b"),
    ]
    .concat();
    let contributions = parse_porcelain(Path::new("demo.py"), &output).unwrap();
    assert_eq!(contributions.len(), 2);
    assert_eq!(contributions[0].year, 2020);
    assert_eq!(contributions[1].year, 2024);
}

#[test]
fn test_email_brackets_stripped() {
    let output = porcelain_line("Dave", "dave@example.com", T_2024, "x");
    let contributions = parse_porcelain(Path::new("demo.py"), &output).unwrap();
    assert_eq!(contributions[0].email, "dave@example.com");
}

#[test]
fn test_missing_header_is_fatal() {
    let output = "0000000000000000000000000000000000000000 1 1\n\tbare content line\n";
    let err = parse_porcelain(Path::new("demo.py"), output).unwrap_err();
    assert!(err.to_string().contains("malformed blame output"));
}

#[test]
fn test_bad_timestamp_is_fatal() {
    let output = "author Dave\nauthor-mail <d@e>\nauthor-time notanumber\n\tx\n";
    assert!(parse_porcelain(Path::new("demo.py"), output).is_err());
}

#[test]
fn test_empty_output() {
    let contributions = parse_porcelain(Path::new("demo.py"), "").unwrap();
    assert!(contributions.is_empty());
}
