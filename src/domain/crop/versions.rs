// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/versions.rs
//
// Image sets: one independently cropped region per named version.

use std::collections::HashSet;

use crate::domain::geometry::Rect;

use super::region::CropRegion;

/// A named version of an image set (e.g. "thumbnail", "banner").
#[derive(Debug, Clone)]
pub struct Version {
    pub name: String,
    pub crop: CropRegion,
}

/// The crop regions of a multi-version image set, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct VersionSet {
    versions: Vec<Version>,
}

impl VersionSet {
    /// Pairs each version name with its ratio; every version uses a fixed
    /// policy when its ratio is given and a free one otherwise.
    ///
    /// Mismatched list lengths, empty names and duplicates are configuration
    /// errors.
    pub fn new(names: &[String], ratios: &[Option<f64>]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            names.len() == ratios.len(),
            "image set has {} versions but {} aspect ratios",
            names.len(),
            ratios.len()
        );

        let mut seen = HashSet::new();
        let mut versions = Vec::with_capacity(names.len());
        for (name, ratio) in names.iter().zip(ratios) {
            anyhow::ensure!(!name.trim().is_empty(), "image set version names must not be empty");
            anyhow::ensure!(seen.insert(name.as_str()), "duplicate image set version '{name}'");
            let crop = CropRegion::new(*ratio, ratio.is_some())
                .map_err(|e| anyhow::anyhow!("version '{name}': {e}"))?;
            versions.push(Version {
                name: name.clone(),
                crop,
            });
        }

        Ok(Self { versions })
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|v| v.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&CropRegion> {
        self.versions.iter().find(|v| v.name == name).map(|v| &v.crop)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CropRegion> {
        self.versions
            .iter_mut()
            .find(|v| v.name == name)
            .map(|v| &mut v.crop)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }

    /// Applies new bounds to every version, e.g. after the viewport changed.
    pub fn set_bounds(&mut self, bounds: Rect) {
        for version in &mut self.versions {
            version.crop.set_bounds(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = VersionSet::new(&names(&["a", "b"]), &[Some(1.0)]).unwrap_err();
        assert!(err.to_string().contains("2 versions but 1 aspect ratios"));
    }

    #[test]
    fn duplicate_names_fail() {
        assert!(VersionSet::new(&names(&["a", "a"]), &[None, None]).is_err());
    }

    #[test]
    fn invalid_ratio_names_the_version() {
        let err = VersionSet::new(&names(&["wide"]), &[Some(0.0)]).unwrap_err();
        assert!(err.to_string().contains("wide"));
    }

    #[test]
    fn versions_crop_independently() {
        let mut set = VersionSet::new(&names(&["square", "wide"]), &[Some(1.0), Some(2.0)]).unwrap();
        set.set_bounds(Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(set.get("square").unwrap().region(), Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(set.get("wide").unwrap().region(), Rect::new(0.0, 100.0, 400.0, 300.0));

        set.get_mut("wide").unwrap().set_region(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(set.get("square").unwrap().region(), Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["square", "wide"]);
    }
}
