//! An [HDL](https://en.wikipedia.org/wiki/Hardware_description_language) embedded in [Rust](https://www.rust-lang.org/).
//!
//! silica provides an API to describe [`Module`]s composed of [`Signal`]s, which can then be lowered to [synthesizable SystemVerilog](system_verilog/fn.generate.html).
//!
//! The API is designed to be as minimal as possible while still being expressive.
//! Designs are built imperatively, but the generated output is purely declarative: continuous assignments, wire declarations, and clocked always blocks.
//! Invalid graphs (mismatched widths, out-of-range indices, undriven state) are rejected as early as possible so that what does generate is sound.
//!
//! # Examples
//!
//! ```rust
//! # fn main() -> std::io::Result<()> {
//! use silica::*;
//!
//! // Create a context, which will contain our module(s)
//! let c = Context::new();
//!
//! // Create a module
//! let inverter = c.module("inverter");
//! let i = inverter.input("i", 1); // 1-bit input
//! inverter.output("o", !i); // Output inverted input
//!
//! // Generate SystemVerilog code
//! system_verilog::generate(inverter, std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Module`]: ./struct.Module.html
//! [`Signal`]: ./struct.Signal.html

mod code_writer;
mod graph;
pub mod system_verilog;

pub use graph::*;
