mod fifo;
pub mod traits;

pub use fifo::Fifo;
pub use traits::FifoRef;
