use serde::{Deserialize, Serialize};

/// The four fixed modifier categories understood by the engine.
///
/// Each kind carries an ordered whitelist of argument names a callback may
/// declare, the number of arrays it must return, and whether complex-valued
/// output is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Marks sites as valid/invalid during lattice construction.
    SiteState,
    /// Moves sites; returns one array per spatial axis.
    Position,
    /// Alters the onsite potential term.
    OnsiteEnergy,
    /// Alters hopping terms; the only kind allowed to return complex values.
    HoppingEnergy,
}

impl ModifierKind {
    /// Ordered argument names a callback of this kind may declare.
    pub fn whitelist(&self) -> &'static [&'static str] {
        match self {
            Self::SiteState => &["state", "x", "y", "z", "sub"],
            Self::Position => &["x", "y", "z", "sub"],
            Self::OnsiteEnergy => &["potential", "x", "y", "z", "sub"],
            Self::HoppingEnergy => &["hopping", "hop_id", "x1", "y1", "z1", "x2", "y2", "z2"],
        }
    }

    /// Number of arrays the callback must return.
    pub fn num_outputs(&self) -> usize {
        match self {
            Self::Position => 3,
            _ => 1,
        }
    }

    /// Whether complex-valued output is permitted.
    pub fn allows_complex(&self) -> bool {
        matches!(self, Self::HoppingEnergy)
    }

    /// Name of the registration entry point, used for display labels.
    pub fn entry_name(&self) -> &'static str {
        match self {
            Self::SiteState => "site_state",
            Self::Position => "site_position",
            Self::OnsiteEnergy => "onsite_energy",
            Self::HoppingEnergy => "hopping_energy",
        }
    }
}
