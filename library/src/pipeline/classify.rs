//! Filename classification: split names into basename and suffix, check the
//! basenames agree, and group files by channel.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LibraryError;
use crate::model::channel::Channel;
use crate::model::component::{ClassifiedFile, ComponentFile};

/// Trailing resolution segment such as `1k` or `2K`.
static RESOLUTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(\d+)k$").expect("valid resolution pattern"));

/// Unrecognized suffixes must look like a word to count as a component.
static WORD_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid suffix pattern"));

/// Files of one texture set, grouped by channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedSet {
    /// Shared basename; `None` when no file followed the naming convention.
    pub basename: Option<String>,
    /// First file seen for each recognized channel.
    pub by_channel: BTreeMap<Channel, ClassifiedFile>,
    /// Unknown-suffix files and later duplicates of a channel, in input order.
    pub extras: Vec<ClassifiedFile>,
}

impl ClassifiedSet {
    pub fn get(&self, channel: Channel) -> Option<&ClassifiedFile> {
        self.by_channel.get(&channel)
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.by_channel.contains_key(&channel)
    }
}

/// Split one file name into its naming parts.
///
/// The stem is cut at the last underscore-delimited segment that is a known
/// alias; everything before it is the basename. When no segment is an alias,
/// the last segment becomes an unknown suffix. A trailing resolution marker is
/// never part of either. Returns `None` for names without a usable suffix or
/// extension. Hidden files (`.DS_Store`, `._x.jpg`) are skipped too.
pub fn parse_file_name(path: &Path) -> Option<ComponentFile> {
    let file_name = path.file_name()?.to_str()?;
    if file_name.starts_with('.') || path.extension().is_none() {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let mut segments: Vec<&str> = stem.split('_').collect();

    let mut resolution = None;
    if segments.len() > 2 {
        if let Some(caps) = segments.last().and_then(|s| RESOLUTION_MARKER.captures(s)) {
            resolution = caps[1].parse::<u32>().ok().map(|n| n.saturating_mul(1024));
            segments.pop();
        }
    }
    if segments.len() < 2 {
        return None;
    }

    let alias_at = (1..segments.len())
        .rev()
        .find(|&i| Channel::lookup_alias(segments[i]).is_some());
    let split_at = match alias_at {
        Some(i) => i,
        None => {
            let last = segments.len() - 1;
            if !WORD_SUFFIX.is_match(segments[last]) {
                return None;
            }
            last
        }
    };

    let basename = segments[..split_at].join("_");
    if basename.is_empty() {
        return None;
    }

    Some(ComponentFile {
        path: path.to_path_buf(),
        basename,
        raw_suffix: segments[split_at].to_string(),
        resolution,
    })
}

/// Classify an ordered file listing.
///
/// Fails with `BasenameMismatch` as soon as a file disagrees with the first
/// file's basename. For a channel seen more than once the first file wins.
pub fn classify(files: &[PathBuf]) -> Result<ClassifiedSet, LibraryError> {
    let mut set = ClassifiedSet::default();
    let mut resolution: Option<u32> = None;

    for path in files {
        let Some(component) = parse_file_name(path) else {
            debug!("Skipping {}: not a texture component name", path.display());
            continue;
        };

        match &set.basename {
            None => set.basename = Some(component.basename.clone()),
            Some(expected) if *expected != component.basename => {
                return Err(LibraryError::BasenameMismatch {
                    expected: expected.clone(),
                    found: component.basename.clone(),
                    file: component.file_name(),
                });
            }
            Some(_) => {}
        }

        if let Some(size) = component.resolution {
            match resolution {
                None => resolution = Some(size),
                Some(seen) if seen != size => warn!(
                    "{} is {} px but earlier components are {} px",
                    component.file_name(),
                    size,
                    seen
                ),
                Some(_) => {}
            }
        }

        let classified = ClassifiedFile::new(component);
        debug!(
            "{} -> {} (suffix '{}')",
            classified.file.file_name(),
            classified.channel,
            classified.file.raw_suffix
        );

        if classified.channel == Channel::Unknown {
            set.extras.push(classified);
        } else if let Some(kept) = set.by_channel.get(&classified.channel) {
            warn!(
                "{} duplicates the {} map {}; keeping the first",
                classified.file.file_name(),
                classified.channel,
                kept.file.file_name()
            );
            set.extras.push(classified);
        } else {
            set.by_channel.insert(classified.channel, classified);
        }
    }

    Ok(set)
}
