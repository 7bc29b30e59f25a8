pub mod consumer;
pub mod observer;
pub mod producer;
pub mod ring_buffer;
mod split;

pub use consumer::Consumer;
pub use observer::Observer;
pub use producer::Producer;
pub use ring_buffer::RingBuffer;
pub use split::{Split, SplitRef};
