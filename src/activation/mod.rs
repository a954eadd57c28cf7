pub mod sigmoid;

pub use sigmoid::{dpsidx, psi};
