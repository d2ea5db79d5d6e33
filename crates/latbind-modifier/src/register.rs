//! Registration entry points, one per modifier kind.
//!
//! Each binds a callback and its declared parameter list to a kind's
//! whitelist and output contract: signature check, wrapper construction,
//! then one synthetic probe. On success the returned [`Modifier`] is ready
//! to hand to the engine's registration slot for that kind.

use latbind_core::config::ProbeConfig;
use latbind_core::errors::LatbindResult;
use latbind_core::models::{ArrayValue, ModifierKind, ModifierReturn};
use latbind_core::traits::IModifier;

use crate::probe;
use crate::wrapper::Modifier;

fn make_modifier<F>(kind: ModifierKind, params: &[&str], func: F) -> LatbindResult<Modifier>
where
    F: Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync + 'static,
{
    let modifier = Modifier::new(kind, params, func)?;
    probe::run(&modifier, &ProbeConfig::default())?;
    tracing::debug!(
        kind = ?kind,
        label = modifier.label(),
        argnames = ?modifier.argnames(),
        "modifier accepted"
    );
    Ok(modifier)
}

/// Wrap a callback that marks sites as valid/invalid.
///
/// May declare any of `state, x, y, z, sub`; must return one real array.
pub fn site_state<F>(params: &[&str], func: F) -> LatbindResult<Modifier>
where
    F: Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync + 'static,
{
    make_modifier(ModifierKind::SiteState, params, func)
}

/// Wrap a callback that moves sites.
///
/// May declare any of `x, y, z, sub`; must return three real arrays, one per
/// spatial axis.
pub fn site_position<F>(params: &[&str], func: F) -> LatbindResult<Modifier>
where
    F: Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync + 'static,
{
    make_modifier(ModifierKind::Position, params, func)
}

/// Wrap a callback that alters the onsite potential.
///
/// May declare any of `potential, x, y, z, sub`; must return one real array.
pub fn onsite_energy<F>(params: &[&str], func: F) -> LatbindResult<Modifier>
where
    F: Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync + 'static,
{
    make_modifier(ModifierKind::OnsiteEnergy, params, func)
}

/// Wrap a callback that alters hopping terms.
///
/// May declare any of `hopping, hop_id, x1, y1, z1, x2, y2, z2`; must return
/// one array, which may be complex.
pub fn hopping_energy<F>(params: &[&str], func: F) -> LatbindResult<Modifier>
where
    F: Fn(&[ArrayValue]) -> ModifierReturn + Send + Sync + 'static,
{
    make_modifier(ModifierKind::HoppingEnergy, params, func)
}
