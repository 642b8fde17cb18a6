// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Column;

/// Minimum rank a match must reach to pass. A completed subsequence match
/// always scores at least 1, so only no-match ranks 0 and fails.
pub const PASS_THRESHOLD: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyRank {
    pub passed: bool,
    pub rank: u32,
}

impl FuzzyRank {
    const fn neutral() -> Self {
        Self {
            passed: true,
            rank: 0,
        }
    }

    const fn failed() -> Self {
        Self {
            passed: false,
            rank: 0,
        }
    }
}

/// Ranks `query` against `target` with a subsequence heuristic: query
/// characters (whitespace skipped) must appear in order within the target,
/// ASCII case-insensitive. Contiguous runs and matches anchored at the
/// start of the target rank higher. An empty query passes with a neutral
/// rank of 0.
pub fn rank_query(target: &str, query: &str) -> FuzzyRank {
    let mut needle = query.chars().filter(|ch| !ch.is_whitespace());
    let Some(mut wanted) = needle.next() else {
        return FuzzyRank::neutral();
    };

    let mut rank = 0u32;
    let mut previous_hit: Option<usize> = None;
    let mut done = false;

    for (index, target_char) in target.chars().enumerate() {
        if done {
            break;
        }
        if !target_char.eq_ignore_ascii_case(&wanted) {
            continue;
        }

        rank += 1;
        match previous_hit {
            Some(prev) if prev + 1 == index => rank += 2,
            None if index == 0 => rank += 4,
            _ => {}
        }
        previous_hit = Some(index);

        match needle.next() {
            Some(next) => wanted = next,
            None => done = true,
        }
    }

    if !done {
        return FuzzyRank::failed();
    }
    FuzzyRank {
        passed: rank >= PASS_THRESHOLD,
        rank,
    }
}

/// Global search across a screen's searchable columns: a record stays when
/// any searchable column's displayed text passes. Non-text values are
/// ranked by their textual representation, so this never fails.
pub fn apply_fuzzy<'a, R>(rows: Vec<&'a R>, columns: &[Column<R>], query: &str) -> Vec<&'a R> {
    if query.trim().is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|record| {
            columns
                .iter()
                .filter(|column| column.searchable)
                .any(|column| rank_query(&column.value(record).display(), query).passed)
        })
        .collect()
}
