mod question;

pub use self::question::*;
