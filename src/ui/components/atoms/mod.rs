mod key_chip;

pub use key_chip::{key_chip, key_text};
