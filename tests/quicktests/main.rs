use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// an `OrderedTree` in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<E> {
    /// Insert the E into the data structure
    Insert(E),
    /// Look for the E in the data structure
    Contains(E),
    /// Remove everything
    Clear,
    /// Compare in-order contents
    Dump,
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(E::arbitrary(g)),
            1 => Op::Contains(E::arbitrary(g)),
            2 => Op::Clear,
            3 => Op::Dump,
            _ => unreachable!(),
        }
    }
}
