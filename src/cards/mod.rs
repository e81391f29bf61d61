pub mod card;
pub use card::*;

pub mod classify;
pub use classify::*;

pub mod dealer;
pub use dealer::*;

pub mod evals;
pub use evals::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod omaha;
pub use omaha::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod suit;
pub use suit::*;

pub mod value;
pub use value::*;
