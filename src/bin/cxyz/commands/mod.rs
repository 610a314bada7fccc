mod convert;

pub use convert::{Status, run_convert};
