use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use image::RgbaImage;
use log::{info, warn};

/// Decoded tile, sprite and portrait images keyed by file stem.
#[derive(Default)]
pub struct ImageLibrary {
    images: HashMap<String, RgbaImage>,
    /// Names already reported missing, so each is logged once.
    missing: RefCell<HashSet<String>>,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `path` recursively for `.png` files and decode each one.
    ///
    /// Unreadable files are logged and skipped. When two files share a stem
    /// the first one found wins. A missing directory loads nothing.
    pub fn load_folder<P: AsRef<Path>>(&mut self, path: P) -> usize {
        let path = path.as_ref();
        let before = self.images.len();

        for entry in walkdir::WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let file_path = entry.path();
            if file_path.extension().and_then(|s| s.to_str()) != Some("png") {
                continue;
            }
            let name = match file_path.file_stem().and_then(|s| s.to_str()) {
                Some(n) if !n.is_empty() => n.to_string(),
                _ => continue,
            };
            if self.images.contains_key(&name) {
                warn!("duplicate image name '{name}' at {}; skipping", file_path.display());
                continue;
            }

            match image::open(file_path) {
                Ok(img) => { self.images.insert(name, img.to_rgba8()); }
                Err(e) => warn!("failed to load {}: {e}", file_path.display()),
            }
        }

        let loaded = self.images.len() - before;
        info!("loaded {loaded} images from {}", path.display());
        loaded
    }

    pub fn insert(&mut self, name: impl Into<String>, image: RgbaImage) {
        self.images.insert(name.into(), image);
    }

    pub fn get(&self, name: &str) -> Option<&RgbaImage> {
        self.images.get(name)
    }

    /// Like [`ImageLibrary::get`], logging the first miss of each name.
    pub fn lookup(&self, name: &str) -> Option<&RgbaImage> {
        let found = self.images.get(name);
        if found.is_none() && self.missing.borrow_mut().insert(name.to_string()) {
            warn!("no image named '{name}'; drawing placeholder");
        }
        found
    }

    pub fn len(&self) -> usize { self.images.len() }
    pub fn is_empty(&self) -> bool { self.images.is_empty() }
}
