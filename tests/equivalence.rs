//! Randomized cross-structure checks: every strategy must answer every
//! trace exactly like the no-compression reference.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use succdel::trace::{replay, replay_with_predecessor, Op};
use succdel::{
    CompressionKind, Microset, NoCompression, PathHalving, PredecessorSupport, QuickFind,
    Recursive, SuccPredArray, SuccessorDelete, TwoPass, TwoPassChecked, UnionFind,
};

/// Generates a trace of random deletions interleaved with random successor
/// queries, deleting roughly half the universe.
fn gen_random_trace(n: usize, seed: u64) -> Vec<Op> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut ops = Vec::new();
    for _ in 0..n {
        if rng.gen_bool(0.5) {
            ops.push(Op::Delete(rng.gen_range(1..=n)));
        }
        ops.push(Op::Successor(rng.gen_range(1..=n)));
    }
    // Sweep the whole universe at the end so compressed state is visited.
    for i in 1..=n {
        ops.push(Op::Successor(i));
    }
    ops
}

fn reference_answers(n: usize, ops: &[Op]) -> Vec<Option<usize>> {
    let mut set = NoCompression::new(n).unwrap();
    replay(&mut set, ops).unwrap()
}

fn check_strategy<S: SuccessorDelete>(n: usize, ops: &[Op], expected: &[Option<usize>]) {
    let mut set = S::new(n).unwrap();
    let answers = replay(&mut set, ops).unwrap();
    assert_eq!(answers, expected);
}

#[test]
fn test_cross_strategy_equivalence() {
    for n in [1, 2, 7, 64, 65, 1000] {
        for seed in 0..20 {
            let ops = gen_random_trace(n, seed);
            let expected = reference_answers(n, &ops);
            check_strategy::<Recursive>(n, &ops, &expected);
            check_strategy::<TwoPass>(n, &ops, &expected);
            check_strategy::<TwoPassChecked>(n, &ops, &expected);
            check_strategy::<PathHalving>(n, &ops, &expected);
            check_strategy::<UnionFind>(n, &ops, &expected);
            check_strategy::<QuickFind>(n, &ops, &expected);
            check_strategy::<SuccPredArray>(n, &ops, &expected);
        }
    }
}

#[test]
fn test_microset_equivalence() {
    for n in [1, 7, 64, 200] {
        for seed in 100..110 {
            let ops = gen_random_trace(n, seed);
            let expected = reference_answers(n, &ops);
            for width in [1, 2, 7, 64] {
                let mut set = Microset::<TwoPass>::with_block_width(n, width).unwrap();
                let answers = replay(&mut set, &ops).unwrap();
                assert_eq!(answers, expected, "width {width}, n {n}");
            }
            let mut set = Microset::<UnionFind>::new(n).unwrap();
            assert_eq!(replay(&mut set, &ops).unwrap(), expected);
            let mut set = Microset::<QuickFind>::new(n).unwrap();
            assert_eq!(replay(&mut set, &ops).unwrap(), expected);
        }
    }
}

/// Model-checks a structure against a plain alive-bitmap after every
/// operation: answers are never overshot (no-skip), alive slots are fixed
/// points, and deleted slots never come back.
fn model_check<S: SuccessorDelete>(n: usize, seed: u64) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut set = S::new(n).unwrap();
    let mut alive = vec![true; n + 1];
    for _ in 0..2 * n {
        let i = rng.gen_range(1..=n);
        if rng.gen_bool(0.4) {
            set.delete(i).unwrap();
            alive[i] = false;
        }
        let expected = (i..=n).find(|&j| alive[j]);
        assert_eq!(set.successor(i).unwrap(), expected);
        if alive[i] {
            assert_eq!(set.successor(i).unwrap(), Some(i));
        }
    }
}

#[test]
fn test_model_check_all_strategies() {
    for seed in 0..10 {
        model_check::<NoCompression>(50, seed);
        model_check::<Recursive>(50, seed);
        model_check::<TwoPass>(50, seed);
        model_check::<TwoPassChecked>(50, seed);
        model_check::<PathHalving>(50, seed);
        model_check::<UnionFind>(50, seed);
        model_check::<QuickFind>(50, seed);
        model_check::<SuccPredArray>(50, seed);
        model_check::<Microset<TwoPass>>(50, seed);
    }
}

/// Model-checks predecessor answers: the largest alive slot strictly below
/// the query point, as cached at block representatives.
fn model_check_predecessor<S: PredecessorSupport>(n: usize, seed: u64) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut set = S::new(n).unwrap();
    let mut alive = vec![true; n + 1];
    for _ in 0..2 * n {
        let i = rng.gen_range(1..=n);
        if rng.gen_bool(0.4) {
            set.delete(i).unwrap();
            alive[i] = false;
        }
        let expected = (1..i).rev().find(|&j| alive[j]);
        assert_eq!(set.predecessor(i).unwrap(), expected, "predecessor({i})");
    }
}

#[test]
fn test_predecessor_duality() {
    for seed in 0..10 {
        model_check_predecessor::<SuccPredArray>(50, seed);
        model_check_predecessor::<Microset<SuccPredArray>>(50, seed);
    }
}

#[test]
fn test_dual_compression_kinds_match_reference() {
    let n = 80;
    for seed in 30..40 {
        let mut ops = gen_random_trace(n, seed);
        for i in 1..=n {
            ops.push(Op::Predecessor(i));
        }
        let mut reference = SuccPredArray::with_compression(n, CompressionKind::None).unwrap();
        let expected = replay_with_predecessor(&mut reference, &ops).unwrap();
        for kind in [CompressionKind::Full, CompressionKind::Halving] {
            let mut set = SuccPredArray::with_compression(n, kind).unwrap();
            assert_eq!(replay_with_predecessor(&mut set, &ops).unwrap(), expected);
        }
        for width in [1, 2, 16, 64] {
            let mut set = Microset::<SuccPredArray>::with_block_width(n, width).unwrap();
            assert_eq!(replay_with_predecessor(&mut set, &ops).unwrap(), expected);
        }
    }
}

#[test]
fn test_deletion_idempotence() {
    let n = 40;
    let mut once = TwoPass::new(n).unwrap();
    let mut twice = TwoPass::new(n).unwrap();
    for i in (1..=n).step_by(3) {
        once.delete(i).unwrap();
        twice.delete(i).unwrap();
        twice.delete(i).unwrap();
    }
    for i in 1..=n {
        assert_eq!(once.successor(i).unwrap(), twice.successor(i).unwrap());
    }
}

#[test]
fn test_monotonicity() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let n = 60;
    let mut set = PathHalving::new(n).unwrap();
    let mut deleted = Vec::new();
    for _ in 0..n {
        let i = rng.gen_range(1..=n);
        set.delete(i).unwrap();
        deleted.push(i);
        for &d in &deleted {
            assert_ne!(set.successor(d).unwrap(), Some(d));
        }
    }
}
