pub mod composition;
pub mod filter;
pub mod generate;
pub mod sequence;
pub mod validate;

pub use composition::*;
pub use filter::*;
pub use generate::*;
pub use sequence::*;
pub use validate::*;
