pub mod direct;

pub use direct::{Cons, Direct, Obs, Prod};
