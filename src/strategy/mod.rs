pub mod adjust;
pub use adjust::*;
