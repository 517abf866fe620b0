//! SystemVerilog code generation for [`Module`]s.
//!
//! [`Module`]: ../struct.Module.html

mod codegen_context;
mod compiler;

use codegen_context::*;

use crate::code_writer::CodeWriter;
use crate::graph::*;

use std::io::{Result, Write};

/// Generates SystemVerilog code for `m`, writing it to `w`.
///
/// Emits a single `module`..`endmodule` block. To generate several [`Module`]s into one output stream with a shared file prelude, use [`generate_all`] instead.
///
/// # Panics
///
/// Panics if `m` contains a register that is not driven.
///
/// # Examples
///
/// ```
/// use silica::*;
///
/// let c = Context::new();
///
/// let m = c.module("my_module");
/// m.output("out", m.input("in", 1));
///
/// system_verilog::generate(m, std::io::stdout())?;
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// [`generate_all`]: ./fn.generate_all.html
/// [`Module`]: ../struct.Module.html
pub fn generate<'a, W: Write>(m: &'a Module<'a>, w: W) -> Result<()> {
    let mut w = CodeWriter::new(w);
    generate_module(m, &mut w)
}

/// Generates SystemVerilog code for each of `modules` in order, writing it to `w` as one compilation unit.
///
/// The output starts with a file prelude (a verilator lint directive and `` `default_nettype none ``), followed by one `module`..`endmodule` block per [`Module`]. Each block is generated with a fresh naming context, so internal wire names restart at `node0` in every block.
///
/// # Panics
///
/// Panics if any of `modules` contains a register that is not driven.
///
/// [`Module`]: ../struct.Module.html
pub fn generate_all<'a, W: Write>(modules: &[&'a Module<'a>], w: W) -> Result<()> {
    let mut w = CodeWriter::new(w);

    w.append_line("/* verilator lint_off DECLFILENAME */")?;
    w.append_newline()?;

    w.append_line("`default_nettype none")?;
    w.append_newline()?;

    for m in modules {
        generate_module(m, &mut w)?;
    }

    Ok(())
}

fn generate_module<'a, W: Write>(m: &'a Module<'a>, w: &mut CodeWriter<W>) -> Result<()> {
    for register in m.registers.borrow().iter() {
        if let SignalData::Reg { data } = &register.data {
            if data.next.borrow().is_none() {
                panic!(
                    "Cannot generate code for module \"{}\" because it contains a register which is not driven.",
                    m.name
                );
            }
        }
    }

    let mut c = CodegenContext::new();

    let inputs = m.inputs.borrow();
    let outputs = m.outputs.borrow();

    w.append_line(&format!("module {}(", m.name))?;
    w.indent();

    w.append_line("input wire logic reset_n,")?;
    w.append_indent()?;
    w.append("input wire logic clk")?;
    if !inputs.is_empty() || !outputs.is_empty() {
        w.append(",")?;
        w.append_newline()?;
    }
    w.append_newline()?;
    for (i, (name, input)) in inputs.iter().enumerate() {
        w.append_indent()?;
        w.append("input wire logic ")?;
        if input.bit_width() > 1 {
            w.append(&format!("[{}:{}] ", input.bit_width() - 1, 0))?;
        }
        w.append(name)?;
        if !outputs.is_empty() || i < inputs.len() - 1 {
            w.append(",")?;
        }
        w.append_newline()?;
    }
    for (i, (name, output)) in outputs.iter().enumerate() {
        w.append_indent()?;
        w.append("output wire logic ")?;
        if output.bit_width() > 1 {
            w.append(&format!("[{}:{}] ", output.bit_width() - 1, 0))?;
        }
        w.append(name)?;
        if i < outputs.len() - 1 {
            w.append(",")?;
        }
        w.append_newline()?;
    }
    w.append_line(");")?;
    w.append_newline()?;

    for (name, output) in outputs.iter() {
        compiler::gen_node_decls(output, &mut c, w)?;
        c.queue_assignment(name.clone(), output);
    }

    for (name, value) in c.take_queued_assignments() {
        w.append_indent()?;
        w.append(&format!("assign {} = ", name))?;
        compiler::gen_assign_expr(value, &mut c, w)?;
        w.append(";")?;
        w.append_newline()?;
    }

    w.append_newline()?;
    w.unindent();
    w.append_line("endmodule")?;
    w.append_newline()?;

    Ok(())
}
