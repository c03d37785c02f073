use itertools::{Itertools, iproduct};
use seqview_testkit::data_gen::{self, Residue};

use crate::{
    Cursor, FilterConfig, Grid, filter_in, filter_with_config, pairs, product, reduce,
    reduce_with_seed, zip,
};

#[test]
fn test_pairs_matches_cartesian_square() {
    let mut rng = data_gen::rng(8421);
    for _ in 0..50 {
        let values = data_gen::random_sequence(&mut rng, 12, 100);
        let view = pairs(&values);
        assert_eq!(view.len(), values.len() * values.len());
        assert_eq!(view.iter().len(), view.len());
        let expected = values.iter().cartesian_product(values.iter()).collect_vec();
        assert_eq!(view.iter().collect_vec(), expected);

        let n = values.len();
        let mut cursor = view.begin();
        for k in 0..view.len() {
            assert_eq!(cursor.coordinates(), (k / n, k % n));
            cursor.step_forward().unwrap();
        }
        assert_eq!(cursor, view.end());
    }
}

#[test]
fn test_product_size_and_distance() {
    let mut rng = data_gen::rng(1207);
    for _ in 0..50 {
        let a = data_gen::random_sequence(&mut rng, 10, 50);
        let b = data_gen::random_sequence(&mut rng, 10, 50);
        let view = product(&a, &b);
        assert_eq!(view.len(), a.len() * b.len());
        assert_eq!(
            view.end().distance_from(&view.begin()),
            view.len() as isize
        );
        assert_eq!(view.iter().collect_vec(), iproduct!(&a, &b).collect_vec());
        let mut backward = view.iter().rev().collect_vec();
        backward.reverse();
        assert_eq!(backward, view.iter().collect_vec());
    }
}

#[test]
fn test_zip_size_and_last_pair() {
    let mut rng = data_gen::rng(77);
    for _ in 0..50 {
        let a = data_gen::random_sequence(&mut rng, 20, 1000);
        let b = data_gen::random_sequence(&mut rng, 20, 1000);
        let view = zip(&a, &b);
        let min = a.len().min(b.len());
        assert_eq!(view.len(), min);
        assert_eq!(view.iter().collect_vec(), a.iter().zip(&b).collect_vec());
        if min > 0 {
            assert_eq!(view.iter().last(), Some((&a[min - 1], &b[min - 1])));
        }
    }
}

#[test]
fn test_filter_matches_iterator_filter() {
    let mut rng = data_gen::rng(5150);
    for _ in 0..200 {
        let values = data_gen::random_sequence(&mut rng, 40, 64);
        let bounds = data_gen::random_bounds(&mut rng, values.len());
        let predicate = Residue::random(&mut rng, 9);
        let expected = values[bounds.clone()]
            .iter()
            .filter(|&&v| predicate.test(v))
            .collect_vec();

        let view = filter_in(&values, bounds.clone(), |x| predicate.test(**x)).unwrap();
        assert_eq!(view.iter().collect_vec(), expected);
        assert_eq!(
            view.iter().rev().collect_vec(),
            expected.iter().rev().copied().collect_vec()
        );
        assert_eq!(view.len(), expected.len());
        assert_eq!(view.is_empty(), expected.is_empty());
        for (k, item) in expected.iter().enumerate() {
            assert_eq!(view.get(k), Some(*item));
        }
    }
}

#[test]
fn test_filter_strategies_agree() {
    let mut rng = data_gen::rng(90210);
    for _ in 0..100 {
        let values = data_gen::random_sequence(&mut rng, 30, 32);
        let predicate = Residue::random(&mut rng, 5);
        let indexed =
            filter_with_config(&values, |x| predicate.test(**x), FilterConfig::default()).unwrap();
        let rescan =
            filter_with_config(&values, |x| predicate.test(**x), FilterConfig::rescan()).unwrap();
        let len = indexed.len();
        assert_eq!(rescan.len(), len);
        if len == 0 {
            continue;
        }

        let i = rng.usize(0..=len);
        let j = rng.usize(0..=len);
        let (ci, cj) = (
            indexed.begin().offset(i as isize).unwrap(),
            indexed.begin().offset(j as isize).unwrap(),
        );
        let (ri, rj) = (
            rescan.begin().offset(i as isize).unwrap(),
            rescan.begin().offset(j as isize).unwrap(),
        );
        assert_eq!(ci.position(), ri.position());
        assert_eq!(ci.get(), ri.get());
        assert_eq!(ci.distance_from(&cj), i as isize - j as isize);
        assert_eq!(ri.distance_from(&rj), i as isize - j as isize);
        assert_eq!(ci.index(), i);
        assert_eq!(ri.index(), i);
        if let Some(item) = ci.get() {
            assert!(predicate.test(*item));
        }
    }
}

#[test]
fn test_filter_true_and_false() {
    let mut rng = data_gen::rng(31337);
    for _ in 0..20 {
        let values = data_gen::random_sequence(&mut rng, 25, 100);
        let all = filter_in(&values, 0..values.len(), |_| true).unwrap();
        assert_eq!(all.iter().copied().collect_vec(), values);
        let none = filter_in(&values, 0..values.len(), |_| false).unwrap();
        assert!(none.is_empty());
        assert_eq!(none.iter().next(), None);
    }
}

#[test]
fn test_pair_offset_consistency() {
    let mut rng = fastrand::Rng::with_seed(4096);
    for _ in 0..100 {
        let (rows, cols) = (rng.usize(1..8), rng.usize(1..8));
        let a = data_gen::random_values(&mut rng, rows, 10);
        let b = data_gen::random_values(&mut rng, cols, 10);
        let view = product(&a, &b);
        let size = view.len();

        let c = view.begin().offset(rng.usize(0..size) as isize).unwrap();
        let target = rng.usize(0..size);
        let k = target as isize - c.index() as isize;
        let moved = c.offset(k).unwrap();
        assert_eq!(moved.distance_from(&c), k);
        assert_eq!(moved.index(), target);
        assert_eq!(moved.get(), view.get(target));
    }
}

#[test]
fn test_flatten_unflatten_round_trip() {
    for (rows, stride) in [(1, 1), (3, 5), (5, 3), (7, 7)] {
        let grid = Grid::new(rows, stride);
        for (i, j) in iproduct!(0..rows, 0..stride) {
            assert_eq!(grid.unflatten(grid.flatten((i, j))), Some((i, j)));
        }
    }
}

#[test]
fn test_reduce_matches_fold() {
    let mut rng = data_gen::rng(2024);
    for _ in 0..50 {
        let values = data_gen::random_sequence(&mut rng, 30, 1000);
        let sum: u32 = values.iter().sum();
        let reduced = reduce(values.iter().copied(), |a, b| a + b);
        assert_eq!(reduced, values.first().map(|_| sum));
        let seeded = reduce_with_seed(&values, 1u64, |acc, x| acc + u64::from(*x));
        assert_eq!(seeded, 1 + u64::from(sum));
    }
}
