use clap::Parser;
use std::path::PathBuf;
use texture_material::model::{
    AmbientOcclusionMode, DisplacementUsage, Extension, Interpolation, Projection,
};
use texture_material::{Channel, ImportConfiguration};

#[derive(Parser, Debug)]
#[command(name = "texture-import")]
#[command(about = "Build a shader material from a texture archive", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Archive to import, or a directory of already extracted textures
    pub input: PathBuf,

    /// Treat the input as an extracted directory instead of an archive
    #[arg(long)]
    pub from_dir: bool,

    /// Material name (defaults to the input file name without extension)
    #[arg(long)]
    pub name: Option<String>,

    /// Write the material graph as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file (defaults to import.toml in the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the import summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Store the effective settings back into the settings file
    #[arg(long)]
    pub save_config: bool,

    /// Archive unpacker executable
    #[arg(long, default_value = texture_material::io::archive::DEFAULT_UNPACKER)]
    pub unpacker: String,

    #[command(flatten)]
    pub overrides: Overrides,
}

/// Command-line overrides for individual import settings.
#[derive(clap::Args, Debug, Default)]
pub struct Overrides {
    #[arg(long)]
    pub no_diffuse: bool,
    #[arg(long)]
    pub no_specular: bool,
    #[arg(long)]
    pub no_roughness: bool,
    #[arg(long)]
    pub no_alpha: bool,

    /// Include the ambient occlusion map
    #[arg(long, conflicts_with = "no_ao")]
    pub ao: bool,
    /// Leave the ambient occlusion map out
    #[arg(long)]
    pub no_ao: bool,
    #[arg(long)]
    pub ao_mode: Option<AmbientOcclusionMode>,

    /// Also create image nodes for maps that are not wired
    #[arg(long, conflicts_with = "no_load_unused")]
    pub load_unused: bool,
    #[arg(long)]
    pub no_load_unused: bool,

    /// Geometry preference, e.g. `bump,normal,disp`
    #[arg(long, value_delimiter = ',')]
    pub priority: Option<Vec<Channel>>,

    #[arg(long)]
    pub displacement: Option<DisplacementUsage>,
    #[arg(long)]
    pub interpolation: Option<Interpolation>,
    #[arg(long)]
    pub projection: Option<Projection>,
    #[arg(long)]
    pub extension: Option<Extension>,
    #[arg(long)]
    pub blend: Option<f64>,
}

impl Overrides {
    pub fn apply(&self, config: &mut ImportConfiguration) {
        if self.no_diffuse {
            config.include_diffuse = false;
        }
        if self.no_specular {
            config.include_specular = false;
        }
        if self.no_roughness {
            config.include_roughness = false;
        }
        if self.no_alpha {
            config.include_alpha = false;
        }
        if self.ao {
            config.include_ambient_occlusion = true;
        }
        if self.no_ao {
            config.include_ambient_occlusion = false;
        }
        if let Some(mode) = self.ao_mode {
            config.ambient_occlusion_mode = mode;
        }
        if self.load_unused {
            config.load_unused_maps = true;
        }
        if self.no_load_unused {
            config.load_unused_maps = false;
        }
        if let Some(priority) = &self.priority {
            config.geometry_priority = priority.clone();
        }
        if let Some(usage) = self.displacement {
            config.displacement_usage = usage;
        }
        if let Some(interpolation) = self.interpolation {
            config.sampling.interpolation = interpolation;
        }
        if let Some(projection) = self.projection {
            config.sampling.projection = projection;
        }
        if let Some(extension) = self.extension {
            config.sampling.extension = extension;
        }
        if let Some(blend) = self.blend {
            config.sampling.blend = blend;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_touch_given_fields() {
        let cli = Cli::parse_from([
            "texture-import",
            "bark.zip",
            "--ao",
            "--priority",
            "bump,nrm",
            "--interpolation",
            "cubic",
        ]);
        let mut config = ImportConfiguration::default();
        cli.overrides.apply(&mut config);

        assert!(config.include_ambient_occlusion);
        assert!(config.include_diffuse);
        assert_eq!(config.geometry_priority, vec![Channel::Bump, Channel::Normal]);
        assert_eq!(config.sampling.interpolation, Interpolation::Cubic);
        assert_eq!(config.sampling.projection, Projection::Flat);
    }

    #[test]
    fn test_negative_flags_override_saved_settings() {
        let cli = Cli::parse_from(["texture-import", "bark.zip", "--no-ao", "--no-load-unused"]);
        let mut config = ImportConfiguration {
            include_ambient_occlusion: true,
            load_unused_maps: true,
            ..Default::default()
        };
        cli.overrides.apply(&mut config);

        assert!(!config.include_ambient_occlusion);
        assert!(!config.load_unused_maps);
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        let result = Cli::try_parse_from(["texture-import", "bark.zip", "--ao", "--no-ao"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let result = Cli::try_parse_from(["texture-import", "bark.zip", "--extension", "mirror"]);
        assert!(result.is_err());
    }
}
