use super::signal::*;
use super::value::*;

use std::cell::RefCell;
use std::ptr;

/// A hardware register, created by the [`Module`]::[`reg`] method.
///
/// A `Register` is clocked by its [`Module`]'s implicit clock, and is (re)set to its default value (if any) whenever the implicit, active-low reset is asserted. Before code can be generated for a [`Module`], each of its `Register`s must be driven with [`drive_next`].
///
/// # Examples
///
/// ```
/// use silica::*;
///
/// let c = Context::new();
///
/// let m = c.module("my_module");
///
/// let my_reg = m.reg(32);
/// my_reg.default_value(0xfadebabeu32); // Optional
/// my_reg.drive_next(!my_reg.value);
/// m.output("my_output", my_reg.value);
/// ```
///
/// [`drive_next`]: #method.drive_next
/// [`Module`]: ./struct.Module.html
/// [`reg`]: ./struct.Module.html#method.reg
#[must_use]
pub struct Register<'a> {
    /// A [`Signal`] that represents this `Register`'s current value.
    ///
    /// [`Signal`]: ./struct.Signal.html
    pub value: &'a Signal<'a>,

    pub(crate) data: &'a RegisterData<'a>,
}

impl<'a> Register<'a> {
    /// Specifies the value that this `Register` takes on whenever the implicit reset is asserted.
    ///
    /// A default value is optional. A `Register` without one resets to 0.
    ///
    /// # Panics
    ///
    /// Panics if this `Register` already has a default value, or if the specified `value` doesn't fit into this `Register`'s bit width.
    ///
    /// # Examples
    ///
    /// ```
    /// use silica::*;
    ///
    /// let c = Context::new();
    ///
    /// let m = c.module("my_module");
    ///
    /// let my_reg = m.reg(32);
    /// my_reg.default_value(0xfadebabeu32);
    /// ```
    pub fn default_value<V: Into<Value>>(&'a self, value: V) {
        if self.data.initial_value.borrow().is_some() {
            panic!("Attempted to specify a default value for a register that already has one.");
        }
        let value = value.into();
        let required_bits = value.required_bits();
        if required_bits > self.data.bit_width {
            let numeric_value = value.numeric_value();
            panic!("Cannot fit the specified value '{}' into the specified bit width '{}'. The value '{}' requires a bit width of at least {} bit(s).", numeric_value, self.data.bit_width, numeric_value, required_bits);
        }
        *self.data.initial_value.borrow_mut() = Some(value);
    }

    /// Specifies the [`Signal`] that drives this `Register`'s next value on each rising clock edge.
    ///
    /// Every `Register` must be driven exactly once before code can be generated for its [`Module`]. The driving [`Signal`] may (directly or indirectly) refer back to this `Register`'s [`value`], which is how feedback loops are expressed.
    ///
    /// # Panics
    ///
    /// Panics if `n` belongs to a different [`Module`] than this `Register`, if `n`'s bit width doesn't match this `Register`'s bit width, or if this `Register` is already driven.
    ///
    /// # Examples
    ///
    /// ```
    /// use silica::*;
    ///
    /// let c = Context::new();
    ///
    /// let m = c.module("my_module");
    ///
    /// let my_reg = m.reg(1);
    /// my_reg.drive_next(!my_reg.value); // Toggles every clock cycle
    /// ```
    ///
    /// [`Module`]: ./struct.Module.html
    /// [`Signal`]: ./struct.Signal.html
    /// [`value`]: #structfield.value
    pub fn drive_next(&'a self, n: &'a Signal<'a>) {
        if !ptr::eq(self.value.module, n.module) {
            panic!("Attempted to drive a register with a signal from another module.");
        }
        if n.bit_width() != self.data.bit_width {
            panic!(
                "Signals have different bit widths ({} and {}, respectively).",
                self.data.bit_width,
                n.bit_width()
            );
        }
        if self.data.next.borrow().is_some() {
            panic!("Attempted to drive the next value of a register that has already been driven.");
        }
        *self.data.next.borrow_mut() = Some(n);
    }
}

pub(crate) struct RegisterData<'a> {
    pub bit_width: u32,
    pub initial_value: RefCell<Option<Value>>,
    pub next: RefCell<Option<&'a Signal<'a>>>,
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn value_bit_width() {
        let c = Context::new();

        let m = c.module("a");
        let r = m.reg(17);

        assert_eq!(r.value.bit_width(), 17);
    }

    #[test]
    #[should_panic(
        expected = "Attempted to specify a default value for a register that already has one."
    )]
    fn default_value_already_specified_error() {
        let c = Context::new();

        let m = c.module("a");
        let r = m.reg(32);
        r.default_value(0xfadebabeu32); // OK

        // Panic
        r.default_value(0xdeadbeefu32);
    }

    #[test]
    #[should_panic(
        expected = "Cannot fit the specified value '128' into the specified bit width '7'. The value '128' requires a bit width of at least 8 bit(s)."
    )]
    fn default_value_doesnt_fit_error() {
        let c = Context::new();

        let m = c.module("a");
        let r = m.reg(7);

        // Panic
        r.default_value(128u32);
    }

    #[test]
    #[should_panic(expected = "Attempted to drive a register with a signal from another module.")]
    fn drive_next_separate_module_error() {
        let c = Context::new();

        let m1 = c.module("a");
        let r = m1.reg(1);

        let m2 = c.module("b");
        let i = m2.high();

        // Panic
        r.drive_next(i);
    }

    #[test]
    #[should_panic(expected = "Signals have different bit widths (4 and 8, respectively).")]
    fn drive_next_incompatible_bit_widths_error() {
        let c = Context::new();

        let m = c.module("a");
        let r = m.reg(4);
        let i = m.input("i", 8);

        // Panic
        r.drive_next(i);
    }

    #[test]
    #[should_panic(
        expected = "Attempted to drive the next value of a register that has already been driven."
    )]
    fn drive_next_already_driven_error() {
        let c = Context::new();

        let m = c.module("a");
        let r = m.reg(1);
        r.drive_next(!r.value); // OK

        // Panic
        r.drive_next(r.value);
    }
}
