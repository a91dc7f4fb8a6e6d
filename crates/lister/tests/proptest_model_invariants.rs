//! Property-based invariant tests for the list model.
//!
//! These tests check invariants that must hold for any input:
//!
//! 1. Bulk removal matches repeated `Vec::remove` and returns the removed
//!    elements in caller order.
//! 2. After any sequence of mutations the model matches a plain
//!    `Vec<Vec<_>>` replaying the same operations, `section_views_count`
//!    equals the live section length, and rejected calls change nothing.

use lister::model::{IndexPath, ListDataSource, ListModel, Row, Section, remove_at_indices};
use proptest::prelude::*;
use proptest::sample::subsequence;

// ── Helpers ─────────────────────────────────────────────────────────────

/// A length and a shuffled set of unique indices below it.
fn removal_case() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..48).prop_flat_map(|len| {
        let all: Vec<usize> = (0..len).collect();
        (Just(len), subsequence(all, 0..=len).prop_shuffle())
    })
}

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, usize),
    Append(usize),
    Remove(usize, usize),
    RemoveRows(usize, Vec<usize>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4, 0usize..8).prop_map(|(s, r)| Op::Insert(s, r)),
        (0usize..4).prop_map(Op::Append),
        (0usize..4, 0usize..8).prop_map(|(s, r)| Op::Remove(s, r)),
        (0usize..4, prop::collection::vec(0usize..8, 0..5))
            .prop_map(|(s, rows)| Op::RemoveRows(s, rows)),
    ]
}

fn live_rows(model: &ListModel<u32>, section: usize) -> Vec<u32> {
    model.sections()[section]
        .rows()
        .iter()
        .map(|row| *row.content())
        .collect()
}

fn has_duplicates(rows: &[usize]) -> bool {
    let mut sorted = rows.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bulk removal matches the naive version
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bulk_removal_matches_vec_remove((len, indices) in removal_case()) {
        let mut fast: Vec<String> = (0..len).map(|i| format!("r{i}")).collect();
        let removed = remove_at_indices(&mut fast, &indices).unwrap();

        let mut slow: Vec<String> = (0..len).map(|i| format!("r{i}")).collect();
        let expected: Vec<String> = indices.iter().map(|&i| slow[i].clone()).collect();
        let mut desc = indices.clone();
        desc.sort_unstable_by(|a, b| b.cmp(a));
        for i in desc {
            slow.remove(i);
        }

        prop_assert_eq!(fast, slow, "survivors for {:?}", indices);
        prop_assert_eq!(removed, expected, "removed for {:?}", indices);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Mutation sequences keep the model consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mutations_match_replayed_vectors(
        initial in prop::collection::vec(0usize..6, 0..4),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut next = 0u32;
        let mut oracle: Vec<Vec<u32>> = Vec::new();
        for len in initial {
            let mut rows = Vec::new();
            for _ in 0..len {
                next += 1;
                rows.push(next);
            }
            oracle.push(rows);
        }
        let model: ListModel<u32> = ListModel::with_sections(
            oracle
                .iter()
                .map(|rows| rows.iter().map(|&v| Row::new(v)).collect::<Section<u32>>())
                .collect(),
        );

        for op in ops {
            match op {
                Op::Insert(s, r) => {
                    next += 1;
                    let valid = s < oracle.len() && r <= oracle[s].len();
                    let result = model.insert_row(Row::new(next), IndexPath::new(s, r));
                    prop_assert_eq!(result.is_ok(), valid);
                    if valid {
                        oracle[s].insert(r, next);
                    }
                }
                Op::Append(s) => {
                    next += 1;
                    let result = model.append_row(Row::new(next), s);
                    prop_assert_eq!(result.is_ok(), s < oracle.len());
                    if let Ok(path) = result {
                        oracle[s].push(next);
                        prop_assert_eq!(path, IndexPath::new(s, oracle[s].len() - 1));
                    }
                }
                Op::Remove(s, r) => {
                    let valid = s < oracle.len() && r < oracle[s].len();
                    let result = model.remove_row(IndexPath::new(s, r));
                    prop_assert_eq!(result.is_ok(), valid);
                    if let Ok(row) = result {
                        let expected = oracle[s].remove(r);
                        prop_assert_eq!(*row.content(), expected);
                    }
                }
                Op::RemoveRows(s, rows) => {
                    let valid = s < oracle.len()
                        && rows.iter().all(|&r| r < oracle[s].len())
                        && !has_duplicates(&rows);
                    let result = model.remove_rows(s, &rows);
                    prop_assert_eq!(result.is_ok(), valid);
                    if let Ok(removed) = result {
                        let expected: Vec<u32> = rows.iter().map(|&r| oracle[s][r]).collect();
                        let mut desc = rows.clone();
                        desc.sort_unstable_by(|a, b| b.cmp(a));
                        for r in desc {
                            oracle[s].remove(r);
                        }
                        let removed: Vec<u32> = removed.into_iter().map(Row::into_content).collect();
                        prop_assert_eq!(removed, expected);
                    }
                }
            }

            prop_assert_eq!(model.section_count(), oracle.len());
            for (s, rows) in oracle.iter().enumerate() {
                let live_len = model.sections()[s].len();
                prop_assert_eq!(model.section_views_count(s).unwrap(), live_len);
                prop_assert_eq!(&live_rows(&model, s), rows);
            }
        }
    }
}
