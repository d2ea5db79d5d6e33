use crate::errors::LatbindResult;
use crate::traits::IModifier;

/// Registration surface of the external simulation engine.
///
/// One slot per modifier kind. A host should reject a wrapper whose `kind()`
/// does not match the slot with `ModifierError::KindMismatch`.
pub trait IModifierHost {
    fn register_site_state(&mut self, modifier: Box<dyn IModifier>) -> LatbindResult<()>;

    fn register_position(&mut self, modifier: Box<dyn IModifier>) -> LatbindResult<()>;

    fn register_onsite_energy(&mut self, modifier: Box<dyn IModifier>) -> LatbindResult<()>;

    fn register_hopping_energy(&mut self, modifier: Box<dyn IModifier>) -> LatbindResult<()>;
}
