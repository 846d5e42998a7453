// The driver dispatches on the target's category, the other modules hold
// one `impl DeserializeDriver` block per family of categories.

mod collection;
mod composite;
mod driver;
mod scalar;
mod union;

pub use driver::DeserializeDriver;
