//! Semantic texture channels and the suffix alias table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Semantic role of one texture image inside a material.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Alpha,
    AmbientOcclusion,
    Bump,
    Diffuse,
    Displacement,
    Normal,
    Roughness,
    Specular,
    Unknown,
}

/// Recognized filename suffixes per channel. Matching is case-insensitive.
///
/// `met` and `spec` both land on [`Channel::Specular`]; archives in the wild
/// use either name for the same slot.
pub const ALIAS_TABLE: &[(Channel, &[&str])] = &[
    (Channel::Alpha, &["mask"]),
    (Channel::AmbientOcclusion, &["ao"]),
    (Channel::Bump, &["bump"]),
    (Channel::Diffuse, &["col", "diff"]),
    (Channel::Displacement, &["disp"]),
    (Channel::Normal, &["nor", "normal", "nrm"]),
    (Channel::Roughness, &["rgh", "rough", "roughness"]),
    (Channel::Specular, &["met", "spec"]),
];

static BY_ALIAS: Lazy<HashMap<&'static str, Channel>> = Lazy::new(|| {
    ALIAS_TABLE
        .iter()
        .flat_map(|(channel, aliases)| aliases.iter().map(move |alias| (*alias, *channel)))
        .collect()
});

impl Channel {
    /// The mutually-substitutable surface detail channels.
    pub const GEOMETRY: [Channel; 3] = [Channel::Normal, Channel::Bump, Channel::Displacement];

    /// Order in which channels are laid out and wired, following the input
    /// order of the principled shader so that links do not cross.
    pub const WIRING_ORDER: [Channel; 8] = [
        Channel::Diffuse,
        Channel::AmbientOcclusion,
        Channel::Specular,
        Channel::Roughness,
        Channel::Alpha,
        Channel::Normal,
        Channel::Bump,
        Channel::Displacement,
    ];

    /// Looks up a filename suffix. Returns `None` for anything not in [`ALIAS_TABLE`].
    pub fn lookup_alias(suffix: &str) -> Option<Channel> {
        BY_ALIAS.get(suffix.to_ascii_lowercase().as_str()).copied()
    }

    /// Like [`Channel::lookup_alias`] but maps unrecognized suffixes to [`Channel::Unknown`].
    pub fn from_alias(suffix: &str) -> Channel {
        Self::lookup_alias(suffix).unwrap_or(Channel::Unknown)
    }

    pub fn is_geometry(self) -> bool {
        Self::GEOMETRY.contains(&self)
    }

    /// Whether the image holds colour data (sRGB) rather than plain values.
    pub fn is_colour(self) -> bool {
        matches!(self, Channel::Diffuse | Channel::Specular)
    }

    pub fn id_str(self) -> &'static str {
        match self {
            Channel::Alpha => "alpha",
            Channel::AmbientOcclusion => "ambient_occlusion",
            Channel::Bump => "bump",
            Channel::Diffuse => "diffuse",
            Channel::Displacement => "displacement",
            Channel::Normal => "normal",
            Channel::Roughness => "roughness",
            Channel::Specular => "specular",
            Channel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::Alpha => "Alpha",
            Channel::AmbientOcclusion => "Ambient Occlusion",
            Channel::Bump => "Bump",
            Channel::Diffuse => "Diffuse",
            Channel::Displacement => "Displacement",
            Channel::Normal => "Normal",
            Channel::Roughness => "Roughness",
            Channel::Specular => "Specular",
            Channel::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Accepts either the channel id (`"normal"`) or any of its aliases (`"nrm"`).
impl FromStr for Channel {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if let Some(channel) = Channel::lookup_alias(&lowered) {
            return Ok(channel);
        }
        Channel::WIRING_ORDER
            .iter()
            .copied()
            .find(|c| c.id_str() == lowered)
            .ok_or_else(|| LibraryError::InvalidArgument(format!("unknown channel '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_is_case_insensitive() {
        for (channel, aliases) in ALIAS_TABLE {
            for alias in *aliases {
                assert_eq!(Channel::from_alias(alias), *channel);
                assert_eq!(Channel::from_alias(&alias.to_uppercase()), *channel);
            }
        }
    }

    #[test]
    fn test_no_alias_is_shared_between_channels() {
        let total: usize = ALIAS_TABLE.iter().map(|(_, a)| a.len()).sum();
        assert_eq!(BY_ALIAS.len(), total);
    }

    #[test]
    fn test_met_and_spec_collapse() {
        assert_eq!(Channel::from_alias("met"), Channel::Specular);
        assert_eq!(Channel::from_alias("Spec"), Channel::Specular);
    }

    #[test]
    fn test_unmatched_suffix_is_unknown() {
        assert_eq!(Channel::from_alias("arm"), Channel::Unknown);
        assert_eq!(Channel::lookup_alias(""), None);
    }

    #[test]
    fn test_parse_channel_by_id_or_alias() {
        assert_eq!("displacement".parse::<Channel>().unwrap(), Channel::Displacement);
        assert_eq!("NRM".parse::<Channel>().unwrap(), Channel::Normal);
        assert!("sheen".parse::<Channel>().is_err());
    }
}
