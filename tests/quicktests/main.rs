mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value, enforcing uniqueness if the flag is set
    Insert(T, bool),
    /// Erase one copy of the value
    Erase(T),
    /// Erase whatever sits at the given rank, through a cursor
    EraseNth(usize),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g), bool::arbitrary(g)),
            1 => Op::Erase(T::arbitrary(g)),
            2 => Op::EraseNth(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
