use serde::Serialize;
use std::path::PathBuf;
use texture_material::model::DisplacementMethod;
use texture_material::ImportResult;

/// Short description of a finished import, printed to stdout.
#[derive(Serialize, Debug)]
pub struct ImportSummary {
    pub material: String,
    pub basename: String,
    pub channels: Vec<ChannelLine>,
    pub active_geometry: Option<String>,
    pub unused: Vec<PathBuf>,
    pub displacement_method: DisplacementMethod,
    pub nodes: usize,
    pub links: usize,
}

#[derive(Serialize, Debug)]
pub struct ChannelLine {
    pub channel: String,
    pub file: PathBuf,
    pub resolution: Option<u32>,
}

impl ImportSummary {
    pub fn from_result(result: &ImportResult) -> Self {
        let assignment = &result.assignment;
        Self {
            material: result.material.name.clone(),
            basename: assignment.basename.clone(),
            channels: assignment
                .channels
                .iter()
                .map(|(channel, file)| ChannelLine {
                    channel: channel.to_string(),
                    file: file.path.clone(),
                    resolution: file.resolution,
                })
                .collect(),
            active_geometry: assignment.active_geometry.map(|c| c.to_string()),
            unused: assignment.unused.iter().map(|u| u.file.path.clone()).collect(),
            displacement_method: result.material.nodes.displacement_method,
            nodes: result.material.graph.nodes.len(),
            links: result.material.graph.connections.len(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print(&self) {
        println!("Material: {} (basename '{}')", self.material, self.basename);
        for line in &self.channels {
            let file = line
                .file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match line.resolution {
                Some(px) => println!("  {:<18} {} ({} px)", line.channel, file, px),
                None => println!("  {:<18} {}", line.channel, file),
            }
        }
        println!(
            "  geometry: {}",
            self.active_geometry.as_deref().unwrap_or("none")
        );
        if !self.unused.is_empty() {
            println!("  unused: {} file(s)", self.unused.len());
        }
        println!("  {} node(s), {} link(s)", self.nodes, self.links);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use texture_material::{ImportConfiguration, ImportService};

    #[test]
    fn test_summary_as_json() {
        let files: Vec<PathBuf> = ["Bark02_col_2k.jpg", "Bark02_nrm_2k.jpg", "Bark02_arm_2k.jpg"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let config = ImportConfiguration {
            load_unused_maps: true,
            ..Default::default()
        };
        let result = ImportService::default()
            .import_files("Bark02", &files, &config)
            .unwrap();

        let json = ImportSummary::from_result(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["material"], "Bark02");
        assert_eq!(value["active_geometry"], "Normal");
        assert_eq!(value["channels"].as_array().unwrap().len(), 2);
        assert_eq!(value["channels"][0]["resolution"], 2048);
        assert_eq!(value["unused"].as_array().unwrap().len(), 1);
        assert_eq!(value["displacement_method"], "bump");
    }
}
