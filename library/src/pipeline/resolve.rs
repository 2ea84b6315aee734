//! Map resolution: apply inclusion flags and the geometry priority to a
//! classified texture set.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::classify::ClassifiedSet;
use crate::error::LibraryError;
use crate::model::channel::Channel;
use crate::model::component::{ClassifiedFile, ComponentFile};
use crate::model::config::ImportConfiguration;

/// Final channel to file assignment for one import.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResolvedAssignment {
    pub basename: String,
    /// Included channels. Holds several geometry channels only when unused
    /// maps are loaded.
    pub channels: BTreeMap<Channel, ComponentFile>,
    /// The geometry channel wired into the shader (or displacement terminal).
    pub active_geometry: Option<Channel>,
    /// Files created as unwired image nodes; empty unless unused maps are loaded.
    pub unused: Vec<ClassifiedFile>,
}

impl ResolvedAssignment {
    pub fn get(&self, channel: Channel) -> Option<&ComponentFile> {
        self.channels.get(&channel)
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains_key(&channel)
    }

    pub fn included_channels(&self) -> Vec<Channel> {
        self.channels.keys().copied().collect()
    }
}

pub fn resolve(
    set: &ClassifiedSet,
    config: &ImportConfiguration,
) -> Result<ResolvedAssignment, LibraryError> {
    config.validate()?;
    let basename = set
        .basename
        .clone()
        .ok_or(LibraryError::NoRecognizedComponents)?;

    let mut channels = BTreeMap::new();
    for (channel, classified) in &set.by_channel {
        if channel.is_geometry() || *channel == Channel::Unknown {
            continue;
        }
        if config.includes(*channel) {
            channels.insert(*channel, classified.file.clone());
        } else {
            debug!("Leaving out {} map {}", channel, classified.file.file_name());
        }
    }

    let priority = config.effective_geometry_priority();
    let active_geometry = priority.iter().copied().find(|c| set.contains(*c));

    let geometry: Vec<Channel> = if config.load_unused_maps {
        Channel::GEOMETRY
            .iter()
            .copied()
            .filter(|c| set.contains(*c) && config.includes(*c))
            .collect()
    } else {
        active_geometry.into_iter().collect()
    };
    for channel in geometry {
        if let Some(classified) = set.get(channel) {
            channels.insert(channel, classified.file.clone());
        }
    }

    if channels.is_empty() {
        return Err(LibraryError::NoRecognizedComponents);
    }

    let unused = if config.load_unused_maps {
        set.extras.clone()
    } else {
        Vec::new()
    };

    info!(
        "Resolved '{}': {} (geometry: {})",
        basename,
        channels
            .keys()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        active_geometry.map_or_else(|| "none".to_string(), |c| c.to_string())
    );

    Ok(ResolvedAssignment {
        basename,
        channels,
        active_geometry,
        unused,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::DisplacementUsage;
    use crate::pipeline::classify::classify;
    use std::path::PathBuf;

    fn set_of(names: &[&str]) -> ClassifiedSet {
        let files: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        classify(&files).unwrap()
    }

    #[test]
    fn test_priority_picks_first_present() {
        let set = set_of(&["t_bump.png", "t_disp.png", "t_diff.png"]);
        let resolved = resolve(&set, &ImportConfiguration::default()).unwrap();
        assert_eq!(resolved.active_geometry, Some(Channel::Bump));
        assert_eq!(
            resolved.included_channels(),
            vec![Channel::Bump, Channel::Diffuse]
        );
    }

    #[test]
    fn test_ao_needs_opt_in() {
        let set = set_of(&["t_ao.png", "t_diff.png"]);
        let resolved = resolve(&set, &ImportConfiguration::default()).unwrap();
        assert!(!resolved.contains(Channel::AmbientOcclusion));

        let config = ImportConfiguration {
            include_ambient_occlusion: true,
            ..Default::default()
        };
        let resolved = resolve(&set, &config).unwrap();
        assert!(resolved.contains(Channel::AmbientOcclusion));
    }

    #[test]
    fn test_disabled_displacement_is_never_selected() {
        let set = set_of(&["t_disp.png", "t_col.png"]);
        let config = ImportConfiguration {
            displacement_usage: DisplacementUsage::Disabled,
            load_unused_maps: true,
            ..Default::default()
        };
        let resolved = resolve(&set, &config).unwrap();
        assert_eq!(resolved.active_geometry, None);
        assert_eq!(resolved.included_channels(), vec![Channel::Diffuse]);
    }

    #[test]
    fn test_unknown_only_fails() {
        let set = set_of(&["t_arm.png", "t_preview.png"]);
        let config = ImportConfiguration {
            load_unused_maps: true,
            ..Default::default()
        };
        assert!(matches!(
            resolve(&set, &config),
            Err(LibraryError::NoRecognizedComponents)
        ));
    }

    #[test]
    fn test_excluded_channels_can_empty_the_assignment() {
        let set = set_of(&["t_diff.png"]);
        let config = ImportConfiguration {
            include_diffuse: false,
            ..Default::default()
        };
        assert!(matches!(
            resolve(&set, &config),
            Err(LibraryError::NoRecognizedComponents)
        ));
    }

    #[test]
    fn test_empty_priority_selects_no_geometry() {
        let set = set_of(&["t_nor.png", "t_rough.png"]);
        let config = ImportConfiguration {
            geometry_priority: Vec::new(),
            ..Default::default()
        };
        let resolved = resolve(&set, &config).unwrap();
        assert_eq!(resolved.active_geometry, None);
        assert_eq!(resolved.included_channels(), vec![Channel::Roughness]);
    }

    #[test]
    fn test_unused_files_only_with_flag() {
        let set = set_of(&["t_diff.png", "t_arm.png"]);
        let resolved = resolve(&set, &ImportConfiguration::default()).unwrap();
        assert!(resolved.unused.is_empty());

        let config = ImportConfiguration {
            load_unused_maps: true,
            ..Default::default()
        };
        let resolved = resolve(&set, &config).unwrap();
        assert_eq!(resolved.unused.len(), 1);
        assert_eq!(resolved.unused[0].file.raw_suffix, "arm");
    }
}
