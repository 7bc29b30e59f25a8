use fifobuf::{traits::*, HeapFifo};

fn main() {
    let fifo = HeapFifo::<i32>::with_slots(3);
    let (mut prod, mut cons) = fifo.split();

    prod.try_push(0).unwrap();
    prod.try_push(1).unwrap();
    assert!(prod.is_full());
    assert_eq!(prod.try_push(2), Err(2));

    assert_eq!(cons.try_pop().unwrap(), 0);
    assert_eq!(prod.room(), 1);

    prod.try_push(2).unwrap();

    assert_eq!(cons.try_pop().unwrap(), 1);
    assert_eq!(cons.try_pop().unwrap(), 2);
    assert!(cons.is_empty());
    assert_eq!(cons.try_pop(), None);
}
