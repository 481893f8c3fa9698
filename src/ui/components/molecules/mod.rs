mod hint_bar;

pub use hint_bar::hint_line;
