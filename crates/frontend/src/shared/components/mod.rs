pub mod reveal_card;
pub mod stat_counter;

pub use reveal_card::RevealCard;
pub use stat_counter::StatCounter;
