//! Aggregation and top-k selection benchmarks.
//!
//! Measures score aggregation over synthetic liked-item tables, heap-based
//! selection over the resulting mapping, and the full recommender run.

use criterion::{BenchmarkId, Criterion, criterion_main};

use coreco_benches::{
    error::BenchSetupError,
    params::RecommendBenchParams,
    source::{SyntheticRatings, SyntheticRatingsConfig},
};
use coreco_core::{RecommenderBuilder, aggregate, select_top_k};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Users in each generated table.
const USER_COUNTS: &[usize] = &[1_000, 10_000, 50_000];

/// Distinct items users can like.
const ITEM_COUNT: usize = 10_000;

/// Likes recorded per user.
const LIKES_PER_USER: usize = 20;

/// Result counts to benchmark selection with.
const RESULT_COUNTS: &[usize] = &[10, 100, 1_000];

fn make_ratings(user_count: usize) -> Result<SyntheticRatings, BenchSetupError> {
    SyntheticRatings::generate(&SyntheticRatingsConfig {
        user_count,
        item_count: ITEM_COUNT,
        likes_per_user: LIKES_PER_USER,
        seed: SEED,
    })
}

fn aggregate_scores_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("aggregate");
    for &user_count in USER_COUNTS {
        let ratings = make_ratings(user_count)?;
        let params = RecommendBenchParams {
            user_count,
            item_count: ITEM_COUNT,
            result_count: 0,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &ratings,
            |b, input| b.iter(|| aggregate(input.seeds(), input.liked())),
        );
    }
    group.finish();
    Ok(())
}

fn select_top_k_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("select_top_k");
    let user_count = USER_COUNTS.last().copied().unwrap_or(1_000);
    let ratings = make_ratings(user_count)?;
    let scores = aggregate(ratings.seeds(), ratings.liked());
    for &result_count in RESULT_COUNTS {
        let params = RecommendBenchParams {
            user_count,
            item_count: ITEM_COUNT,
            result_count,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &result_count,
            |b, &k| b.iter(|| select_top_k(&scores, k)),
        );
    }
    group.finish();
    Ok(())
}

fn recommend_end_to_end_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("recommend");
    group.sample_size(20);
    for &user_count in USER_COUNTS {
        let ratings = make_ratings(user_count)?;
        let recommender = RecommenderBuilder::new().with_result_count(10).build()?;
        let params = RecommendBenchParams {
            user_count,
            item_count: ITEM_COUNT,
            result_count: recommender.result_count(),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &ratings,
            |b, input| {
                b.iter(|| {
                    if let Err(err) = recommender.recommend(input.liked(), input.seeds()) {
                        panic!("recommend failed during benchmark: {err}");
                    }
                });
            },
        );
    }
    group.finish();
    Ok(())
}

fn aggregate_scores(c: &mut Criterion) {
    if let Err(err) = aggregate_scores_impl(c) {
        panic!("aggregate benchmark setup failed: {err}");
    }
}

fn select_top_k_bench(c: &mut Criterion) {
    if let Err(err) = select_top_k_impl(c) {
        panic!("select_top_k benchmark setup failed: {err}");
    }
}

fn recommend_end_to_end(c: &mut Criterion) {
    if let Err(err) = recommend_end_to_end_impl(c) {
        panic!("recommend benchmark setup failed: {err}");
    }
}

mod bench_harness {
    use super::{aggregate_scores, recommend_end_to_end, select_top_k_bench};
    use criterion::criterion_group;

    criterion_group!(
        benches,
        aggregate_scores,
        select_top_k_bench,
        recommend_end_to_end
    );
}
criterion_main!(bench_harness::benches);
