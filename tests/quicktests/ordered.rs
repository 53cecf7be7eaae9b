use ordered_tree::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and clears we have the same elements in both.
fn do_ops<E>(ops: &[Op<E>], tree: &mut OrderedTree<E>, set: &mut BTreeSet<E>) -> bool
where
    E: Ord + Clone,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()) && tree.is_balanced(),
            Op::Contains(x) => tree.contains(x) == set.contains(x),
            Op::Clear => {
                tree.clear();
                set.clear();
                tree.height() == -1
            }
            Op::Dump => tree.dump().eq(set.iter()),
        };
        agrees && tree.size() == set.len()
    })
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set) && set.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<i8> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn size_counts_successful_inserts(xs: Vec<u8>) -> bool {
        let mut tree = OrderedTree::new();
        let inserted = xs.iter().filter(|x| tree.insert(**x)).count();

        inserted == tree.size() && tree.size() == xs.iter().collect::<HashSet<_>>().len()
    }
}

quickcheck::quickcheck! {
    fn rebuild_keeps_elements_and_minimizes_height(xs: Vec<i16>) -> bool {
        let mut tree: OrderedTree<i16> = xs.into_iter().collect();
        let before = tree.dump().copied().collect::<Vec<_>>();
        tree.rebuild();

        let expected_height = match tree.size() {
            0 => -1,
            n => n.ilog2() as isize,
        };
        tree.dump().copied().eq(before.iter().copied())
            && tree.size() == before.len()
            && tree.height() == expected_height
            && tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn clear_forgets_everything(xs: Vec<i8>) -> bool {
        let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
        tree.clear();

        tree.size() == 0 && tree.height() == -1 && xs.iter().all(|x| !tree.contains(x))
    }
}
