mod context;
mod module;
mod register;
mod scope;
mod signal;
mod value;

pub use context::*;
pub use module::*;
pub use register::*;
pub use scope::*;
pub use signal::*;
pub use value::*;
