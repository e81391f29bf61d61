pub mod algorithm;
pub use algorithm::*;

pub mod session;
pub use session::*;

pub mod tally;
pub use tally::*;
