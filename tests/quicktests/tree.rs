use arena_bst::Tree;

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a tree and to a `BTreeMap` counting copies of each value.
/// This way we can ensure that after a random smattering of inserts
/// and erases we have the same values, in the same order, in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Insert(x, unique) => {
                let count = counts.entry(*x).or_default();
                let (_, inserted) = tree.insert(*x, *unique);
                if inserted {
                    *count += 1;
                }
            }
            Op::Erase(x) => {
                if tree.erase(x) {
                    *counts.get_mut(x).unwrap() -= 1;
                }
            }
            Op::EraseNth(n) => {
                if tree.is_empty() {
                    continue;
                }
                let mut cursor = tree.begin();
                for _ in 0..n % tree.len() {
                    cursor = tree.successor(cursor);
                }
                let erased = *tree.get(cursor).unwrap();
                let next = tree.erase_at(cursor).unwrap();
                *counts.get_mut(&erased).unwrap() -= 1;
                if let Some(next) = tree.get(next) {
                    assert!(*next >= erased);
                }
            }
        }
    }
}

fn expected(counts: &BTreeMap<i8, usize>) -> Vec<i8> {
    counts
        .iter()
        .flat_map(|(x, count)| std::iter::repeat(*x).take(*count))
        .collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        let expected = expected(&counts);

        tree.len() == expected.len()
            && tree.iter().eq(expected.iter())
            && tree.iter().rev().eq(expected.iter().rev())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = Tree::from_values(xs.iter().copied(), true);

        xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::from_values(xs.iter().copied(), true);

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| tree.find(x).is_none() && tree.position(x).is_end())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::from_values(xs.iter().copied(), true);
        for delete in &deletes {
            tree.erase(delete);
        }

        deletes.iter().all(|x| tree.find(x).is_none())
            && xs.iter().filter(|x| !deletes.contains(x)).all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn unique_inserts_never_grow_on_duplicates(xs: Vec<i8>) -> bool {
        let mut tree = Tree::from_values(xs.iter().copied(), true);
        let len = tree.len();

        xs.iter().all(|x| !tree.insert(*x, true).1) && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn clone_then_mutate_leaves_original(xs: Vec<i8>, extra: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let before: Vec<i8> = tree.iter().copied().collect();

        let mut copy = tree.clone();
        let same_at_copy = copy == tree;
        for x in &xs {
            copy.erase(x);
        }
        copy.extend(extra.iter().copied());

        same_at_copy && tree.iter().eq(before.iter())
    }
}

quickcheck::quickcheck! {
    fn clone_from_matches_source(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let source: Tree<i8> = xs.into_iter().collect();
        let mut dest: Tree<i8> = ys.into_iter().collect();

        dest.clone_from(&source);
        dest == source && dest.len() == source.len()
    }
}

quickcheck::quickcheck! {
    fn take_leaves_source_empty(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let moved = tree.take();

        tree.is_empty() && tree.len() == 0 && moved.len() == xs.len()
    }
}
