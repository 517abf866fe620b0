use super::module::*;
use super::signal::*;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ptr;

/// A named-binding environment that turns imperative conditional rebinding into [multiplexer](https://en.wikipedia.org/wiki/Multiplexer) chains.
///
/// A `Bindings` maps names to [`Signal`]s for a single [`Module`]. Between [`enter_scope`] and [`exit_scope`] calls, [`set`]ting a name expresses "this binding takes this value when the scope's selector is high." On [`exit_scope`], each binding that changed inside the scope is replaced with a mux that selects the new value when the selector is high and retains the prior value otherwise. Bindings that weren't touched inside the scope are left as-is, so wrapping unrelated logic in a scope never perturbs it.
///
/// Scopes nest: an inner scope's muxes simply become the "new value" seen by the outer scope. Two sequential scopes that rebind the same name chain in source order, so a later scope's condition takes priority when both selectors are high, like a sequence of guarded overwrites.
///
/// # Examples
///
/// ```
/// use silica::*;
///
/// let c = Context::new();
///
/// let m = c.module("my_module");
/// let b = Bindings::new(m);
///
/// let mode = m.input("mode", 2);
/// b.set("tone", m.lit(0u32, 8));
///
/// b.enter_scope(mode.eq(m.lit(1u32, 2)));
/// b.set("tone", m.lit(0x40u32, 8));
/// b.exit_scope();
///
/// b.enter_scope(mode.eq(m.lit(2u32, 2)));
/// b.set("tone", m.lit(0x80u32, 8));
/// b.exit_scope();
///
/// m.output("tone", b.get("tone"));
/// ```
///
/// [`enter_scope`]: #method.enter_scope
/// [`exit_scope`]: #method.exit_scope
/// [`get`]: #method.get
/// [`Module`]: ./struct.Module.html
/// [`set`]: #method.set
/// [`Signal`]: ./struct.Signal.html
#[must_use]
pub struct Bindings<'a> {
    module: &'a Module<'a>,

    values: RefCell<BTreeMap<String, &'a Signal<'a>>>,
    scopes: RefCell<Vec<Scope<'a>>>,
}

struct Scope<'a> {
    sel: &'a Signal<'a>,
    snapshot: BTreeMap<String, &'a Signal<'a>>,
}

impl<'a> Bindings<'a> {
    /// Creates a new, empty `Bindings` environment for the given [`Module`].
    ///
    /// [`Module`]: ./struct.Module.html
    pub fn new(module: &'a Module<'a>) -> Bindings<'a> {
        Bindings {
            module,

            values: RefCell::new(BTreeMap::new()),
            scopes: RefCell::new(Vec::new()),
        }
    }

    /// Binds `name` to the given [`Signal`], replacing any previous binding for `name`.
    ///
    /// Outside any scope this is an ordinary (re)binding. Inside a scope it expresses the value `name` takes when the scope's selector is high; the mux is synthesized when the scope exits.
    ///
    /// # Panics
    ///
    /// Panics if `value` belongs to a different [`Module`] than this environment's.
    ///
    /// [`Module`]: ./struct.Module.html
    /// [`Signal`]: ./struct.Signal.html
    pub fn set<S: Into<String>>(&self, name: S, value: &'a Signal<'a>) {
        if !ptr::eq(self.module, value.module) {
            panic!("Cannot bind a signal from another module.");
        }
        self.values.borrow_mut().insert(name.into(), value);
    }

    /// Returns the [`Signal`] currently bound to `name`.
    ///
    /// # Panics
    ///
    /// Panics if no binding for `name` exists.
    ///
    /// [`Signal`]: ./struct.Signal.html
    pub fn get(&self, name: &str) -> &'a Signal<'a> {
        match self.values.borrow().get(name) {
            Some(&value) => value,
            _ => panic!("No binding named \"{}\" exists.", name),
        }
    }

    /// Enters a conditional scope guarded by `sel`, snapshotting the current value of every binding.
    ///
    /// Each `enter_scope` call must be matched by an [`exit_scope`] call.
    ///
    /// # Panics
    ///
    /// Panics if `sel` belongs to a different [`Module`] than this environment's, or if `sel`'s bit width is not 1.
    ///
    /// [`exit_scope`]: #method.exit_scope
    /// [`Module`]: ./struct.Module.html
    pub fn enter_scope(&self, sel: &'a Signal<'a>) {
        if !ptr::eq(self.module, sel.module) {
            panic!("Cannot use a selector from another module.");
        }
        if sel.bit_width() != 1 {
            panic!("Conditional scope selectors can only be 1 bit wide.");
        }
        self.scopes.borrow_mut().push(Scope {
            sel,
            snapshot: self.values.borrow().clone(),
        });
    }

    /// Exits the innermost conditional scope, synthesizing muxes for the bindings it changed.
    ///
    /// For each binding whose value is a different [`Signal`] reference than it was when the scope was entered, the binding is replaced with `mux(sel, current, snapshot)`. Bindings whose references are unchanged are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if no scope is currently entered, or if a binding was introduced inside the scope. New names must be introduced before any scope that rebinds them is entered, otherwise they'd silently lose their conditionality at scope exit.
    ///
    /// [`Signal`]: ./struct.Signal.html
    pub fn exit_scope(&self) {
        let scope = match self.scopes.borrow_mut().pop() {
            Some(scope) => scope,
            _ => panic!("Attempted to exit a conditional scope, but no scope is currently entered."),
        };
        let mut values = self.values.borrow_mut();
        for (name, value) in values.iter_mut() {
            let old = match scope.snapshot.get(name) {
                Some(old) => *old,
                _ => panic!("The binding \"{}\" was introduced inside a conditional scope. Bindings must be introduced before any scope that uses them is entered.", name),
            };
            if !ptr::eq(*value, old) {
                *value = self.module.mux(scope.sel, *value, old);
            }
        }
    }
}
