pub mod error;
pub mod network;

pub use error::{NetworkError, Result};
pub use network::Network;
