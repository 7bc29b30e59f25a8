use crate::{traits::*, ByteFifo, HeapFifo};
use std::{
    io::{self, Read, Write},
    vec::Vec,
};

#[test]
fn from_to() {
    let mut fifo = ByteFifo::<8>::default();
    let (mut prod, mut cons) = fifo.split_ref();

    let mut out = [0u8; 16];

    assert_eq!(prod.write(b"0123456789").unwrap(), 7);
    assert_eq!(prod.write(b"89").unwrap_err().kind(), io::ErrorKind::WouldBlock);
    prod.flush().unwrap();

    assert_eq!(cons.read(&mut out[..4]).unwrap(), 4);
    assert_eq!(&out[..4], b"0123");
    assert_eq!(prod.write(b"789").unwrap(), 3);

    assert_eq!(cons.read(&mut out).unwrap(), 6);
    assert_eq!(&out[..6], b"456789");
    assert_eq!(cons.read(&mut out).unwrap_err().kind(), io::ErrorKind::WouldBlock);
    assert_eq!(cons.read(&mut []).unwrap(), 0);
}

#[test]
fn unsplit() {
    let mut fifo = HeapFifo::<u8>::with_slots(6);
    let mut out = Vec::new();

    assert_eq!(fifo.push_slice(b"hello"), 5);
    assert!(fifo.is_full());
    assert_eq!(fifo.read_to_end(&mut out).unwrap_err().kind(), io::ErrorKind::WouldBlock);
    assert_eq!(out, b"hello");
}

#[test]
fn flush_with_io_write_in_scope() {
    let mut fifo = HeapFifo::<u8>::with_slots(6);
    assert_eq!(fifo.push_slice(b"abc"), 3);

    fifo.flush();
    assert!(fifo.is_empty());

    let (mut prod, _cons) = fifo.split_ref();
    prod.flush().unwrap();
}

#[test]
fn copy() {
    let mut fifo = HeapFifo::<u8>::with_slots(4);
    let (mut prod, mut cons) = fifo.split_ref();

    let mut src: &[u8] = b"ab";
    assert_eq!(io::copy(&mut src, &mut prod).unwrap(), 2);
    let mut dst = Vec::new();
    let mut byte = [0u8; 1];
    while let Ok(1) = cons.read(&mut byte) {
        dst.push(byte[0]);
    }
    assert_eq!(dst, b"ab");
}
