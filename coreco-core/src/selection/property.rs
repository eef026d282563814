//! Property tests comparing the heap and selector against simple models.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::test_utils::suite_proptest_config;
use crate::{ItemId, Score, ScoreMapping};

use super::tests::assert_heap_order;
use super::{ScoreHeap, select_top_k};

/// Operation applied to a heap under test.
#[derive(Clone, Copy, Debug, Arbitrary)]
enum HeapOp {
    /// Inserts the item at `slot` modulo the mapping size.
    #[weight(3)]
    Insert { slot: u16 },
    /// Removes the current minimum.
    Remove,
}

fn score_table() -> impl Strategy<Value = Vec<Score>> {
    prop::collection::vec(0_u64..16, 0..48)
}

fn mapping_from(scores: &[Score]) -> ScoreMapping {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| (ItemId::new(index as u64), score))
        .collect()
}

/// Reference selection: the same admission rule applied to a plain vector.
fn model_top_k_scores(scores: &[Score], k: usize) -> Vec<Score> {
    if k == 0 {
        return Vec::new();
    }
    let mut retained: Vec<Score> = Vec::new();
    for &score in scores {
        let minimum = retained.iter().copied().min();
        if minimum.is_some_and(|minimum| score <= minimum) {
            continue;
        }
        retained.push(score);
        if retained.len() > k {
            if let Some(position) = retained
                .iter()
                .enumerate()
                .min_by_key(|&(_, &value)| value)
                .map(|(position, _)| position)
            {
                retained.remove(position);
            }
        }
    }
    retained.sort_unstable_by(|left, right| right.cmp(left));
    retained
}

fn run_selection_property(scores: &[Score], k: usize) -> Result<(), TestCaseError> {
    let mapping = mapping_from(scores);
    let selected = select_top_k(&mapping, k);

    prop_assert!(selected.len() <= k);
    let mut seen = std::collections::HashSet::new();
    for item in &selected {
        prop_assert!(seen.insert(*item), "item {} selected twice", item);
    }
    let selected_scores: Vec<Score> = selected
        .iter()
        .map(|&item| mapping.score(item))
        .collect::<Option<_>>()
        .ok_or_else(|| TestCaseError::fail("selected item missing from mapping"))?;
    prop_assert_eq!(selected_scores, model_top_k_scores(scores, k));
    Ok(())
}

fn run_heap_ops_property(scores: &[Score], ops: &[HeapOp]) -> Result<(), TestCaseError> {
    let mapping = mapping_from(scores);
    let mut heap = ScoreHeap::new(&mapping);
    let mut model: Vec<Score> = Vec::new();

    for op in ops {
        match *op {
            HeapOp::Insert { slot } => {
                if scores.is_empty() {
                    prop_assert!(heap.insert(ItemId::new(u64::from(slot))).is_err());
                    continue;
                }
                let index = usize::from(slot) % scores.len();
                heap.insert(ItemId::new(index as u64))
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                model.push(scores[index]);
            }
            HeapOp::Remove => {
                let removed = heap.remove_minimum().and_then(|item| mapping.score(item));
                let expected = model.iter().copied().min();
                if let Some(value) = expected
                    && let Some(position) = model.iter().position(|&entry| entry == value)
                {
                    model.remove(position);
                }
                prop_assert_eq!(removed, expected);
            }
        }
        assert_heap_order(&heap);
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.minimum_score(), model.iter().copied().min());
    }

    let drained: Vec<Score> = heap
        .drain_descending()
        .into_iter()
        .filter_map(|item| mapping.score(item))
        .collect();
    model.sort_unstable_by(|left, right| right.cmp(left));
    prop_assert_eq!(drained, model);
    prop_assert!(heap.is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn selection_matches_admission_model(scores in score_table(), k in 0_usize..12) {
        run_selection_property(&scores, k)?;
    }

    #[test]
    fn heap_operations_preserve_order(
        scores in score_table(),
        ops in prop::collection::vec(any::<HeapOp>(), 0..96),
    ) {
        run_heap_ops_property(&scores, &ops)?;
    }

    #[test]
    fn ascending_scores_select_the_largest(len in 0_usize..40, k in 1_usize..12) {
        let scores: Vec<Score> = (0..len as u64).collect();
        let mapping = mapping_from(&scores);
        let expected: Vec<ItemId> = (0..len as u64).rev().take(k).map(ItemId::new).collect();
        prop_assert_eq!(select_top_k(&mapping, k), expected);
    }
}

#[test]
fn model_matches_worked_example() {
    assert_eq!(model_top_k_scores(&[5, 5, 3, 7], 2), vec![7, 5]);
    assert_eq!(model_top_k_scores(&[1, 3, 2], 5), vec![3, 2, 1]);
    assert!(model_top_k_scores(&[4, 2], 0).is_empty());
}
