use std::collections::HashMap;

use egui::TextureHandle;

/// Textures for carousel sources, evicting the least recently used one when full.
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
    max_cache_size: usize,
    access_order: Vec<String>,
}

impl TextureCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    pub fn get(&mut self, source: &str) -> Option<&TextureHandle> {
        let texture = self.textures.get(source)?;
        if let Some(pos) = self.access_order.iter().position(|s| s == source) {
            let source = self.access_order.remove(pos);
            self.access_order.push(source);
        }
        Some(texture)
    }

    pub fn insert(&mut self, source: String, texture: TextureHandle) {
        if self.textures.contains_key(&source) {
            self.access_order.retain(|s| s != &source);
        } else {
            while self.textures.len() >= self.max_cache_size && !self.access_order.is_empty() {
                let oldest = self.access_order.remove(0);
                self.textures.remove(&oldest);
                log::trace!("evicted texture {}", oldest);
            }
        }

        self.textures.insert(source.clone(), texture);
        self.access_order.push(source);
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.access_order.clear();
    }

    pub fn contains(&self, source: &str) -> bool {
        self.textures.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}
