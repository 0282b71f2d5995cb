pub mod ovp;
pub mod timing;
pub mod token;

pub use ovp::{orp_index, split_word};
pub use timing::{base_delay, pause_multiplier, word_delay};
pub use token::{count_words, tokenize, WordList};
