//! Collapses per-line contributions into one ownership claim per author.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use crate::blame::Contribution;
use crate::config::Owner;

/// One owner's claim over a file. `years` is a set because contributions may
/// span non-contiguous years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Copyright {
    pub author: String,
    pub email: String,
    pub years: BTreeSet<i32>,
}

impl Copyright {
    pub fn max_year(&self) -> i32 {
        self.years.iter().next_back().copied().unwrap_or_default()
    }

    fn min_year(&self) -> i32 {
        self.years.iter().next().copied().unwrap_or_default()
    }
}

impl fmt::Display for Copyright {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years.len() > 1 {
            write!(f, "{}-{} {}", self.min_year(), self.max_year(), self.author)?;
        } else {
            write!(f, "{} {}", self.max_year(), self.author)?;
        }
        if !self.email.is_empty() {
            write!(f, " <{}>", self.email)?;
        }
        Ok(())
    }
}

/// Groups contributions per file, then per `(author, email)` pair, unioning
/// each pair's years. Every `additional` owner is appended with the file's
/// full observed year range. The result for each file is sorted with the
/// most recently active owner first, ties broken alphabetically.
///
/// Two owners sharing a display name but differing in email address remain
/// distinct; that is a recorded limitation, not an oversight.
pub fn aggregate(
    contributions: impl IntoIterator<Item = Contribution>,
    additional: &[Owner],
) -> BTreeMap<PathBuf, Vec<Copyright>> {
    let mut by_path: BTreeMap<PathBuf, BTreeMap<(String, String), BTreeSet<i32>>> =
        BTreeMap::new();
    for contribution in contributions {
        by_path
            .entry(contribution.path)
            .or_default()
            .entry((contribution.author, contribution.email))
            .or_default()
            .insert(contribution.year);
    }

    by_path
        .into_iter()
        .map(|(path, owners)| {
            let all_years: BTreeSet<i32> = owners.values().flatten().copied().collect();
            let mut copyrights: Vec<Copyright> = owners
                .into_iter()
                .map(|((author, email), years)| Copyright {
                    author,
                    email,
                    years,
                })
                .collect();
            for owner in additional {
                copyrights.push(Copyright {
                    author: owner.name.clone(),
                    email: owner.email.clone(),
                    years: all_years.clone(),
                });
            }
            copyrights.sort_by(|a, b| {
                b.max_year()
                    .cmp(&a.max_year())
                    .then_with(|| a.author.cmp(&b.author))
            });
            (path, copyrights)
        })
        .collect()
}
