//! The wrapper around a user callback.

use latbind_core::errors::LatbindResult;
use latbind_core::models::{ArrayValue, ModifierKind, ModifierReturn};
use latbind_core::traits::IModifier;

use crate::signature;

/// Signature of a wrapped user callback.
///
/// Invoked with exactly the arguments it declared, in whitelist order.
pub type ModifierFn = dyn Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync;

/// A validated user callback bound to a modifier kind.
///
/// Holds the callback, its declared argument names, and a display label.
/// Created once at registration, immutable thereafter.
pub struct Modifier {
    func: Box<ModifierFn>,
    kind: ModifierKind,
    argnames: Vec<String>,
    label: String,
}

impl Modifier {
    /// Validate the declared names against the kind's whitelist and build
    /// the wrapper. No probe, no engine interaction.
    pub fn new<F>(kind: ModifierKind, params: &[&str], func: F) -> LatbindResult<Self>
    where
        F: Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync + 'static,
    {
        signature::check(params, kind)?;
        let label = format!("{}({})", kind.entry_name(), params.join(", "));
        Ok(Self {
            func: Box::new(func),
            kind,
            argnames: params.iter().map(|s| s.to_string()).collect(),
            label,
        })
    }

    fn declares(&self, name: &str) -> bool {
        self.argnames.iter().any(|n| n == name)
    }
}

impl IModifier for Modifier {
    fn kind(&self) -> ModifierKind {
        self.kind
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn argnames(&self) -> &[String] {
        &self.argnames
    }

    /// `args` is the full candidate tuple, one value per whitelist position.
    /// Only the positions whose names the callback declared are passed on,
    /// in whitelist order. The result is cast back to the first argument's
    /// dtype where a `same_kind` cast applies; otherwise it is returned raw.
    fn apply(&self, args: &[ArrayValue]) -> ModifierReturn {
        debug_assert_eq!(
            args.len(),
            self.kind.whitelist().len(),
            "candidate tuple must carry one value per whitelist position"
        );
        let selected: Vec<ArrayValue> = self
            .kind
            .whitelist()
            .iter()
            .zip(args)
            .filter(|(name, _)| self.declares(name))
            .map(|(_, value)| value.clone())
            .collect();

        let ret = (self.func)(&selected);
        match args.first() {
            Some(first) => ret.cast_same_kind(first.dtype()),
            None => ret,
        }
    }

    /// Probe with ones/zeros arrays of length 1 and report whether the
    /// result carries complex values.
    fn is_complex(&self) -> bool {
        let mut args = vec![ArrayValue::zeros(1); self.kind.whitelist().len()];
        if let Some(first) = args.first_mut() {
            *first = ArrayValue::ones(1);
        }
        self.apply(&args).is_complex()
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("kind", &self.kind)
            .field("argnames", &self.argnames)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
