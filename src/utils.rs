pub mod count_token_frequencies;
pub use count_token_frequencies::count_token_frequencies;

pub mod sort_token_frequencies;
pub use sort_token_frequencies::{sort_token_frequencies, top_n};
