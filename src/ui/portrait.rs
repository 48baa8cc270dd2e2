use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui;

use crate::data::model::{Portrait, Record};

// ---------------------------------------------------------------------------
// Portrait images, read once per path
// ---------------------------------------------------------------------------

/// Caches image bytes by the record's image path. `None` marks a path that
/// does not exist or could not be read, so it is not retried every frame.
#[derive(Default)]
pub struct PortraitCache {
    loaded: HashMap<String, Option<Arc<[u8]>>>,
}

impl PortraitCache {
    /// Image widget for the record's portrait, or `None` when the caller
    /// should show a text placeholder instead.
    pub fn image_for(&mut self, record: &Record) -> Option<egui::Image<'static>> {
        let bytes = self
            .loaded
            .entry(record.image.clone())
            .or_insert_with(|| read_portrait(record))
            .clone()?;
        Some(egui::Image::from_bytes(
            format!("bytes://{}", record.image),
            bytes,
        ))
    }
}

fn read_portrait(record: &Record) -> Option<Arc<[u8]>> {
    let Portrait::Available(path) = record.portrait() else {
        log::debug!("no image for {} at {:?}", record.name, record.image);
        return None;
    };
    match std::fs::read(&path) {
        Ok(bytes) => Some(Arc::from(bytes)),
        Err(e) => {
            log::warn!("cannot read {}: {e}", path.display());
            None
        }
    }
}
