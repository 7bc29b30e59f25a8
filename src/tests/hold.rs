use super::Fifo;
#[cfg(feature = "alloc")]
use crate::{storage::Heap, HeapFifo, LocalFifo};
use crate::{traits::*, Cons, Prod};
#[cfg(feature = "std")]
use crate::wrap::Direct;
#[cfg(feature = "std")]
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn split_holds_ends() {
    let mut fifo = Fifo::<i32, 4>::default();
    assert!(!fifo.head_is_held());
    assert!(!fifo.tail_is_held());
    {
        let (prod, cons) = fifo.split_ref();
        assert!(prod.tail_is_held());
        assert!(cons.head_is_held());
    }
    assert!(!fifo.head_is_held());
    assert!(!fifo.tail_is_held());
}

#[test]
#[should_panic(expected = "FIFO already has a producer")]
fn second_producer() {
    let fifo = Fifo::<i32, 4>::default();
    let _prod = unsafe { Prod::new(&fifo) };
    let _another = unsafe { Prod::new(&fifo) };
}

#[test]
#[should_panic(expected = "FIFO already has a consumer")]
fn second_consumer() {
    let fifo = Fifo::<i32, 4>::default();
    let _cons = unsafe { Cons::new(&fifo) };
    let _another = unsafe { Cons::new(&fifo) };
}

#[test]
fn reacquire() {
    let fifo = Fifo::<i32, 4>::default();
    {
        let mut prod = unsafe { Prod::new(&fifo) };
        prod.try_push(1).unwrap();
    }
    let mut prod = unsafe { Prod::new(&fifo) };
    prod.try_push(2).unwrap();
    let fifo_ref = unsafe { prod.into_fifo_ref() };
    assert!(!fifo_ref.tail_is_held());

    let mut cons = unsafe { Cons::new(fifo_ref) };
    assert_eq!(cons.try_pop(), Some(1));
    assert_eq!(cons.try_pop(), Some(2));
}

#[cfg(feature = "std")]
#[test]
fn both_ends_or_none() {
    let fifo = Fifo::<i32, 4>::default();
    let _cons = unsafe { Cons::new(&fifo) };

    let taken = catch_unwind(AssertUnwindSafe(|| unsafe { Direct::<_, true, true>::new(&fifo) }));
    assert!(taken.is_err());
    assert!(!fifo.tail_is_held());
    assert!(fifo.head_is_held());

    let mut prod = unsafe { Prod::new(&fifo) };
    prod.try_push(1).unwrap();
}

#[test]
fn observer_follows_consumer() {
    let mut fifo = Fifo::<i32, 4>::default();
    let (mut prod, mut cons) = fifo.split_ref();
    let obs = cons.observe();

    prod.try_push(1).unwrap();
    assert_eq!(cons.as_slices(), (&[1][..], &[][..]));
    assert_eq!(cons.try_pop(), Some(1));
    for v in 2..=4 {
        prod.try_push(v).unwrap();
    }
    assert_eq!(cons.try_pop(), Some(2));
    prod.try_push(5).unwrap();

    assert_eq!((obs.head(), obs.tail()), (2, 1));
    assert_eq!(obs.occupied_len(), 3);
    assert!(cons.iter().copied().eq([3, 4, 5]));
}

#[test]
fn observe() {
    let mut fifo = Fifo::<i32, 4>::default();
    let (mut prod, cons) = fifo.split_ref();
    let obs = cons.observe();

    prod.try_push(5).unwrap();
    assert_eq!(obs.occupied_len(), 1);
    assert_eq!(obs.clone().room(), 2);
    assert!(obs.head_is_held());
    drop(cons);
    assert!(!obs.head_is_held());
}

#[cfg(feature = "alloc")]
#[test]
fn split_shared() {
    let fifo = HeapFifo::<i32>::with_slots(3);
    let (mut prod, mut cons) = fifo.split();

    assert_eq!(prod.try_push(0), Ok(()));
    assert_eq!(prod.try_push(1), Ok(()));
    assert_eq!(prod.try_push(2), Err(2));

    assert_eq!(cons.try_pop(), Some(0));
    assert_eq!(cons.try_pop(), Some(1));
    assert_eq!(cons.try_pop(), None);
}

#[cfg(feature = "alloc")]
#[test]
fn split_local() {
    let fifo = LocalFifo::new(Heap::<i32>::new(3));
    let (mut prod, mut cons) = fifo.split();

    prod.try_push(3).unwrap();
    assert_eq!(cons.peek(), Some(3));
    drop(prod);
    assert!(!cons.tail_is_held());
    assert_eq!(cons.try_pop(), Some(3));
}
