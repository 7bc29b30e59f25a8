//! Serial echo over two byte FIFOs.
//!
//! One thread plays the receive interrupt, another the transmit interrupt.
//! The main loop polls the receive FIFO and echoes every line back upper-cased.

use fifobuf::{traits::*, HeapFifo};
use std::{
    io::Write,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
    time::Duration,
};

const INPUT: &[u8] = b"hello\nfifo\nbuffer\n";

fn main() {
    let (mut rx_prod, mut rx_cons) = HeapFifo::<u8>::with_slots(8).split();
    let (mut tx_prod, mut tx_cons) = HeapFifo::<u8>::with_slots(16).split();
    let overruns = AtomicUsize::new(0);
    let received = AtomicBool::new(false);
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        // Receive interrupt: one byte per "character time", dropped when the FIFO is full.
        s.spawn(|| {
            for &byte in INPUT {
                if rx_prod.is_full() {
                    overruns.fetch_add(1, Ordering::Relaxed);
                } else {
                    unsafe { rx_prod.push_unchecked(byte) };
                }
                thread::sleep(Duration::from_millis(2));
            }
            received.store(true, Ordering::Release);
        });

        // Transmit interrupt.
        let tx = s.spawn(|| {
            let mut sent = Vec::new();
            loop {
                let finished = done.load(Ordering::Acquire);
                match tx_cons.try_pop() {
                    Some(byte) => sent.push(byte),
                    None if finished => break,
                    None => thread::sleep(Duration::from_millis(1)),
                }
            }
            sent
        });

        let mut line = Vec::new();
        loop {
            let finished = received.load(Ordering::Acquire);
            let Some(byte) = rx_cons.try_pop() else {
                if finished {
                    break;
                }
                thread::yield_now();
                continue;
            };
            line.push(byte.to_ascii_uppercase());
            if byte == b'\n' {
                let mut rest = line.as_slice();
                while !rest.is_empty() {
                    match tx_prod.write(rest) {
                        Ok(n) => rest = &rest[n..],
                        Err(_) => thread::yield_now(),
                    }
                }
                line.clear();
            }
        }
        done.store(true, Ordering::Release);

        let sent = tx.join().unwrap();
        println!("{}", String::from_utf8_lossy(&sent));
        let overruns = overruns.load(Ordering::Relaxed);
        println!("overruns: {}", overruns);
        if overruns == 0 {
            assert_eq!(sent, INPUT.to_ascii_uppercase());
        }
    });
}
