#![no_std]

use fifobuf::{traits::*, ByteFifo};
use lock_free_static::OnceMut;

static FIFO: OnceMut<ByteFifo<2>> = OnceMut::new();

fn main() {
    FIFO.set(ByteFifo::default()).ok().expect("FIFO already initialized");

    let (mut prod, mut cons) = FIFO.get_mut().expect("Mutable reference to FIFO already taken").split_ref();

    assert_eq!(prod.try_push(b'a'), Ok(()));
    assert_eq!(prod.try_push(b'b'), Err(b'b'));

    assert_eq!(cons.try_pop(), Some(b'a'));
    assert_eq!(cons.try_pop(), None);
}
