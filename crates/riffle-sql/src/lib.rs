pub mod serializer;
pub use serializer::{serialize, Params, Placeholder};
