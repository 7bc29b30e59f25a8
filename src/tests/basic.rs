use super::Fifo;
use crate::{storage::Array, traits::*};

fn indices(this: &impl Observer) -> (usize, usize) {
    (this.head(), this.tail())
}

#[test]
fn capacity() {
    const SLOTS: usize = 13;
    let fifo = Fifo::<i32, SLOTS>::default();
    assert_eq!(fifo.slots(), SLOTS);
    assert_eq!(fifo.end(), SLOTS - 1);
    assert_eq!(fifo.capacity(), SLOTS - 1);
}

#[test]
fn split_capacity() {
    const SLOTS: usize = 13;
    let mut fifo = Fifo::<i32, SLOTS>::default();
    let (prod, cons) = fifo.split_ref();

    assert_eq!(prod.capacity(), SLOTS - 1);
    assert_eq!(cons.capacity(), SLOTS - 1);
}

#[test]
fn try_push() {
    let mut fifo = Fifo::<i32, 3>::default();
    let (mut prod, _) = fifo.split_ref();

    assert_eq!(indices(&prod), (0, 0));

    assert_eq!(prod.try_push(123), Ok(()));
    assert_eq!(indices(&prod), (0, 1));

    assert_eq!(prod.try_push(234), Ok(()));
    assert_eq!(indices(&prod), (0, 2));

    assert_eq!(prod.try_push(345), Err(345));
    assert_eq!(indices(&prod), (0, 2));
}

#[test]
fn pop_empty() {
    let mut fifo = Fifo::<i32, 3>::default();
    let (_, mut cons) = fifo.split_ref();

    assert_eq!(indices(&cons), (0, 0));

    assert_eq!(cons.try_pop(), None);
    assert_eq!(indices(&cons), (0, 0));
}

#[test]
fn push_pop_one() {
    const SLOTS: usize = 3;
    let mut fifo = Fifo::<i32, SLOTS>::default();
    let (mut prod, mut cons) = fifo.split_ref();

    let values = [12, 34, 56, 78, 90];
    assert_eq!(indices(&cons), (0, 0));

    for (i, v) in values.iter().enumerate() {
        assert_eq!(prod.try_push(*v), Ok(()));
        assert_eq!(indices(&cons), (i % SLOTS, (i + 1) % SLOTS));

        assert_eq!(cons.try_pop().unwrap(), *v);
        assert_eq!(indices(&cons), ((i + 1) % SLOTS, (i + 1) % SLOTS));

        assert_eq!(cons.try_pop(), None);
        assert_eq!(indices(&cons), ((i + 1) % SLOTS, (i + 1) % SLOTS));
    }
}

#[test]
fn push_pop_all() {
    const SLOTS: usize = 3;
    const CAP: usize = SLOTS - 1;
    let mut fifo = Fifo::<i32, SLOTS>::default();
    let (mut prod, mut cons) = fifo.split_ref();

    let values = [(12, 34, 13), (56, 78, 57), (90, 10, 91)];
    assert_eq!(indices(&cons), (0, 0));

    for (i, v) in values.iter().enumerate() {
        assert_eq!(prod.try_push(v.0), Ok(()));
        assert_eq!(indices(&cons), (CAP * i % SLOTS, (CAP * i + 1) % SLOTS));

        assert_eq!(prod.try_push(v.1), Ok(()));
        assert_eq!(indices(&cons), (CAP * i % SLOTS, (CAP * i + 2) % SLOTS));

        assert_eq!(prod.try_push(v.2).unwrap_err(), v.2);
        assert_eq!(indices(&cons), (CAP * i % SLOTS, (CAP * i + 2) % SLOTS));

        assert_eq!(cons.try_pop().unwrap(), v.0);
        assert_eq!(indices(&cons), ((CAP * i + 1) % SLOTS, (CAP * i + 2) % SLOTS));

        assert_eq!(cons.try_pop().unwrap(), v.1);
        assert_eq!(indices(&cons), ((CAP * i + 2) % SLOTS, (CAP * i + 2) % SLOTS));

        assert_eq!(cons.try_pop(), None);
        assert_eq!(indices(&cons), ((CAP * i + 2) % SLOTS, (CAP * i + 2) % SLOTS));
    }
}

#[test]
fn empty_full() {
    let mut fifo = Fifo::<i32, 2>::default();
    let (mut prod, cons) = fifo.split_ref();

    assert!(prod.is_empty());
    assert!(cons.is_empty());
    assert!(!prod.is_full());
    assert!(!cons.is_full());

    assert_eq!(prod.try_push(123), Ok(()));

    assert!(!prod.is_empty());
    assert!(!cons.is_empty());
    assert!(prod.is_full());
    assert!(cons.is_full());
}

#[test]
fn full_at_every_position() {
    const SLOTS: usize = 5;
    for head in 0..SLOTS {
        let tail = (head + SLOTS - 1) % SLOTS;
        let fifo = Fifo::<i32, SLOTS>::from_raw_parts(Array::default(), head, tail).unwrap();
        assert!(fifo.is_full(), "head: {}, tail: {}", head, tail);
        assert!(!fifo.is_empty());
        assert_eq!(fifo.room(), 0);
        assert_eq!(fifo.occupied_len(), SLOTS - 1);
    }
}

#[test]
fn empty_at_every_position() {
    const SLOTS: usize = 5;
    for pos in 0..SLOTS {
        let fifo = Fifo::<i32, SLOTS>::from_raw_parts(Array::default(), pos, pos).unwrap();
        assert!(fifo.is_empty());
        assert!(!fifo.is_full());
        assert_eq!(fifo.room(), SLOTS - 1);
    }
}

#[test]
fn room_both_orders() {
    // No wrap pending: tail ahead of head.
    let fifo = Fifo::<i32, 5>::from_raw_parts(Array::default(), 1, 3).unwrap();
    assert_eq!(fifo.room(), 2);
    assert_eq!(fifo.occupied_len(), 2);

    // Tail already wrapped behind head.
    let fifo = Fifo::<i32, 5>::from_raw_parts(Array::default(), 3, 1).unwrap();
    assert_eq!(fifo.room(), 1);
    assert_eq!(fifo.occupied_len(), 3);
}

#[test]
fn occupied_room() {
    let mut fifo = Fifo::<i32, 3>::default();
    let (mut prod, mut cons) = fifo.split_ref();

    assert_eq!(prod.occupied_len(), 0);
    assert_eq!(cons.occupied_len(), 0);
    assert_eq!(prod.room(), 2);
    assert_eq!(cons.room(), 2);

    assert_eq!(prod.try_push(123), Ok(()));

    assert_eq!(prod.occupied_len(), 1);
    assert_eq!(cons.occupied_len(), 1);
    assert_eq!(prod.room(), 1);
    assert_eq!(cons.room(), 1);

    assert_eq!(prod.try_push(456), Ok(()));

    assert_eq!(prod.occupied_len(), 2);
    assert_eq!(cons.occupied_len(), 2);
    assert_eq!(prod.room(), 0);
    assert_eq!(cons.room(), 0);

    assert_eq!(cons.try_pop(), Some(123));

    assert_eq!(prod.occupied_len(), 1);
    assert_eq!(cons.occupied_len(), 1);
    assert_eq!(prod.room(), 1);
    assert_eq!(cons.room(), 1);

    assert_eq!(cons.try_pop(), Some(456));

    assert_eq!(prod.occupied_len(), 0);
    assert_eq!(cons.occupied_len(), 0);
    assert_eq!(prod.room(), 2);
    assert_eq!(cons.room(), 2);

    assert_eq!(prod.try_push(789), Ok(()));

    assert_eq!(prod.occupied_len(), 1);
    assert_eq!(cons.occupied_len(), 1);
    assert_eq!(prod.room(), 1);
    assert_eq!(cons.room(), 1);
}

#[test]
fn unchecked() {
    let mut fifo = Fifo::<i32, 3>::default();

    unsafe {
        fifo.push_unchecked(1);
        fifo.push_unchecked(2);
    }
    assert!(fifo.is_full());
    assert_eq!(unsafe { fifo.pop_unchecked() }, 1);
    assert_eq!(unsafe { fifo.pop_unchecked() }, 2);
    assert!(fifo.is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "push onto a full FIFO")]
fn push_full_asserts() {
    let mut fifo = Fifo::<i32, 2>::default();
    unsafe {
        fifo.push_unchecked(1);
        fifo.push_unchecked(2);
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "pop from an empty FIFO")]
fn pop_empty_asserts() {
    let mut fifo = Fifo::<i32, 2>::default();
    unsafe { fifo.pop_unchecked() };
}
