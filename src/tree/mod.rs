pub mod node;
pub use node::*;

pub mod odds;
pub use odds::*;

pub mod tree;
pub use tree::*;
