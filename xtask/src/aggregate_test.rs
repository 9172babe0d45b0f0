//! Tests for copyright aggregation and rendering.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::aggregate::{Copyright, aggregate};
use crate::blame::Contribution;
use crate::config::Owner;

fn contribution(author: &str, email: &str, year: i32, path: &str) -> Contribution {
    Contribution {
        author: author.to_string(),
        email: email.to_string(),
        year,
        path: PathBuf::from(path),
    }
}

fn owner(name: &str) -> Owner {
    Owner {
        name: name.to_string(),
        email: String::new(),
    }
}

#[test]
fn test_years_union_per_author() {
    let grouped = aggregate(
        vec![
            contribution("Dave", "dave@example.com", 2019, "a.py"),
            contribution("Dave", "dave@example.com", 2022, "a.py"),
            contribution("Dave", "dave@example.com", 2019, "a.py"),
        ],
        &[],
    );
    let copyrights = &grouped[&PathBuf::from("a.py")];
    assert_eq!(copyrights.len(), 1);
    assert_eq!(
        copyrights[0].years,
        BTreeSet::from([2019, 2022])
    );
}

#[test]
fn test_single_year_rendering() {
    let copyright = Copyright {
        author: "Name".to_string(),
        email: "email".to_string(),
        years: BTreeSet::from([2020]),
    };
    assert_eq!(copyright.to_string(), "2020 Name <email>");
}

#[test]
fn test_year_range_rendering() {
    let copyright = Copyright {
        author: "Name".to_string(),
        email: "email".to_string(),
        years: BTreeSet::from([2019, 2020, 2022]),
    };
    assert_eq!(copyright.to_string(), "2019-2022 Name <email>");
}

#[test]
fn test_rendering_without_email() {
    let copyright = Copyright {
        author: "Canonical Ltd.".to_string(),
        email: String::new(),
        years: BTreeSet::from([2024]),
    };
    assert_eq!(copyright.to_string(), "2024 Canonical Ltd.");
}

#[test]
fn test_additional_owner_spans_all_years() {
    let grouped = aggregate(
        vec![
            contribution("Dave", "dave@example.com", 2021, "a.py"),
            contribution("Erin", "erin@example.com", 2023, "a.py"),
        ],
        &[owner("Additional Co")],
    );
    let copyrights = &grouped[&PathBuf::from("a.py")];
    let additional = copyrights
        .iter()
        .find(|copyright| copyright.author == "Additional Co")
        .unwrap();
    assert_eq!(additional.to_string(), "2021-2023 Additional Co");
}

#[test]
fn test_ordering_recent_first_then_alphabetical() {
    let grouped = aggregate(
        vec![
            contribution("Zoe", "zoe@example.com", 2020, "a.py"),
            contribution("Dave", "dave@example.com", 2024, "a.py"),
            contribution("Alice", "alice@example.com", 2024, "a.py"),
        ],
        &[],
    );
    let authors: Vec<&str> = grouped[&PathBuf::from("a.py")]
        .iter()
        .map(|copyright| copyright.author.as_str())
        .collect();
    assert_eq!(authors, vec!["Alice", "Dave", "Zoe"]);
}

#[test]
fn test_same_name_different_email_stays_distinct() {
    let grouped = aggregate(
        vec![
            contribution("Dave", "dave@example.com", 2020, "a.py"),
            contribution("Dave", "dave@work.example", 2021, "a.py"),
        ],
        &[],
    );
    assert_eq!(grouped[&PathBuf::from("a.py")].len(), 2);
}

#[test]
fn test_files_grouped_independently() {
    let grouped = aggregate(
        vec![
            contribution("Dave", "dave@example.com", 2020, "a.py"),
            contribution("Erin", "erin@example.com", 2024, "b.py"),
        ],
        &[owner("Acme")],
    );
    assert_eq!(grouped.len(), 2);
    let a = &grouped[&PathBuf::from("a.py")];
    let b = &grouped[&PathBuf::from("b.py")];
    // Each file's additional owner carries only that file's span
    assert_eq!(
        a.iter().find(|c| c.author == "Acme").unwrap().years,
        BTreeSet::from([2020])
    );
    assert_eq!(
        b.iter().find(|c| c.author == "Acme").unwrap().years,
        BTreeSet::from([2024])
    );
}
