pub mod path;
pub mod record;

pub use path::*;
pub use record::*;
