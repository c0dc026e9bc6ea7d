pub mod selu;

pub use selu::{SELU_ALPHA, SELU_SCALE};
