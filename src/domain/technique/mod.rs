pub mod phrase_book;

pub use phrase_book::for_language;
