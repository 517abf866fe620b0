use super::codegen_context::*;

use crate::code_writer::CodeWriter;
use crate::graph::*;

use std::io::{Result, Write};

/// First pass: walks the expression DAG rooted at `signal` depth-first and writes the declarations it requires.
///
/// Only registers and bit/bit-range selects materialize as named wires; everything else is inlined into its use site(s) by [`gen_assign_expr`]. Each materialized signal is declared exactly once no matter how often it's shared, and queues the continuous assignment that drives it.
pub fn gen_node_decls<'a, W: Write>(
    signal: &'a Signal<'a>,
    c: &mut CodegenContext<'a>,
    w: &mut CodeWriter<W>,
) -> Result<()> {
    match signal.data {
        SignalData::Lit { .. } | SignalData::Input { .. } => Ok(()),
        SignalData::Reg { data } => {
            if c.decl_generated(signal) {
                return Ok(());
            }
            c.mark_decl_generated(signal);
            let next = match *data.next.borrow() {
                Some(next) => next,
                _ => panic!("Cannot generate code for a register which is not driven."),
            };
            gen_node_decls(next, c, w)?;
            let name = c.node_name(signal);
            w.append_indent()?;
            w.append("logic ")?;
            if data.bit_width > 1 {
                w.append(&format!("[{}:{}] ", data.bit_width - 1, 0))?;
            }
            w.append(&format!("{};", name))?;
            w.append_newline()?;
            w.append_indent()?;
            w.append("logic ")?;
            if data.bit_width > 1 {
                w.append(&format!("[{}:{}] ", data.bit_width - 1, 0))?;
            }
            w.append(&format!("{}_next;", name))?;
            w.append_newline()?;
            c.queue_assignment(format!("{}_next", name), next);
            let initial_value = match *data.initial_value.borrow() {
                Some(value) => value.numeric_value(),
                _ => 0,
            };
            w.append_line("always_ff @(posedge clk) begin")?;
            w.indent();
            w.append_line("if (!reset_n) begin")?;
            w.indent();
            w.append_line(&format!("{} <= {}'h{:x};", name, data.bit_width, initial_value))?;
            w.unindent();
            w.append_line("end")?;
            w.append_line("else begin")?;
            w.indent();
            w.append_line(&format!("{} <= {}_next;", name, name))?;
            w.unindent();
            w.append_line("end")?;
            w.unindent();
            w.append_line("end")?;
            w.append_newline()?;
            Ok(())
        }
        SignalData::UnOp { source, .. } => gen_node_decls(source, c, w),
        SignalData::BinOp { lhs, rhs, .. } => {
            gen_node_decls(lhs, c, w)?;
            gen_node_decls(rhs, c, w)
        }
        SignalData::Bit { source, .. } | SignalData::Bits { source, .. } => {
            if c.decl_generated(signal) {
                return Ok(());
            }
            c.mark_decl_generated(signal);
            gen_node_decls(source, c, w)?;
            let name = c.node_name(signal);
            w.append_indent()?;
            w.append("logic ")?;
            // The materialized wire carries the whole source, the select happens at each use site
            if source.bit_width() > 1 {
                w.append(&format!("[{}:{}] ", source.bit_width() - 1, 0))?;
            }
            w.append(&format!("{};", name))?;
            w.append_newline()?;
            c.queue_assignment(name, source);
            Ok(())
        }
        SignalData::Repeat { source, .. } => gen_node_decls(source, c, w),
        SignalData::Concat { lhs, rhs } => {
            gen_node_decls(lhs, c, w)?;
            gen_node_decls(rhs, c, w)
        }
        SignalData::Mux {
            cond,
            when_true,
            when_false,
        } => {
            gen_node_decls(when_true, c, w)?;
            gen_node_decls(when_false, c, w)?;
            gen_node_decls(cond, c, w)
        }
    }
}

/// Second pass: writes the expression text for `signal`, inlining everything that wasn't materialized by [`gen_node_decls`].
pub fn gen_assign_expr<'a, W: Write>(
    signal: &'a Signal<'a>,
    c: &mut CodegenContext<'a>,
    w: &mut CodeWriter<W>,
) -> Result<()> {
    match signal.data {
        SignalData::Lit { value, bit_width } => {
            w.append(&format!("{}'h{:x}", bit_width, value.numeric_value()))
        }
        SignalData::Input { ref name, .. } => w.append(name),
        SignalData::Reg { .. } => {
            let name = c.node_name(signal);
            w.append(&name)
        }
        SignalData::UnOp { source, op } => {
            w.append(match op {
                UnOp::Not => "~",
            })?;
            gen_assign_expr(source, c, w)
        }
        SignalData::BinOp {
            lhs,
            rhs,
            op,
            signed,
            ..
        } => {
            let op = match op {
                BinOp::Add => "+",
                BinOp::BitAnd => "&",
                BinOp::BitOr => "|",
                BinOp::BitXor => "^",
                BinOp::Equal => "==",
                BinOp::GreaterThan => ">",
                BinOp::GreaterThanEqual => ">=",
                BinOp::LessThan => "<",
                BinOp::LessThanEqual => "<=",
                BinOp::NotEqual => "!=",
            };
            w.append("(")?;
            if signed {
                w.append("$signed(")?;
            }
            gen_assign_expr(lhs, c, w)?;
            if signed {
                w.append(")")?;
            }
            w.append(&format!(" {} ", op))?;
            if signed {
                w.append("$signed(")?;
            }
            gen_assign_expr(rhs, c, w)?;
            if signed {
                w.append(")")?;
            }
            w.append(")")
        }
        SignalData::Bit { index, .. } => {
            let name = c.node_name(signal);
            w.append(&format!("{}[{}]", name, index))
        }
        SignalData::Bits {
            range_high,
            range_low,
            ..
        } => {
            let name = c.node_name(signal);
            w.append(&format!("{}[{}:{}]", name, range_high, range_low))
        }
        SignalData::Repeat { source, count } => {
            w.append(&format!("{{{}{{", count))?;
            gen_assign_expr(source, c, w)?;
            w.append("}}")
        }
        SignalData::Concat { lhs, rhs } => {
            w.append("{")?;
            gen_assign_expr(lhs, c, w)?;
            w.append(", ")?;
            gen_assign_expr(rhs, c, w)?;
            w.append("}")
        }
        SignalData::Mux {
            cond,
            when_true,
            when_false,
        } => {
            w.append("(")?;
            gen_assign_expr(cond, c, w)?;
            w.append(" ? ")?;
            gen_assign_expr(when_true, c, w)?;
            w.append(" : ")?;
            gen_assign_expr(when_false, c, w)?;
            w.append(")")
        }
    }
}
