pub mod naive;
pub mod traits;

pub use naive::{FixedGenerator, NaiveGenerator};
pub use traits::TextGenerator;
