mod index;

pub use self::index::*;
