use std::collections::HashSet;
use std::sync::{mpsc, Arc, Mutex};

use egui::{ColorImage, Context};
use rayon::prelude::*;

use crate::config::config::MAX_DECODE_THREADS;
use crate::core::image_cache::TextureCache;
use crate::core::image_loader::ImageLoader;

struct Decoded {
    generation: u64,
    source: String,
    image: ColorImage,
}

/// Decodes the images around the centered one on a background pool and hands
/// them to the UI thread.
///
/// Every mount starts a new generation; results decoded for an older mount are
/// dropped on arrival.
pub struct PreloadManager {
    image_receiver: mpsc::Receiver<Decoded>,
    image_sender: mpsc::Sender<Decoded>,
    loading: Arc<Mutex<HashSet<String>>>,
    generation: u64,
    preload_range: usize,
    loader: ImageLoader,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl PreloadManager {
    pub fn new(preload_range: usize) -> Self {
        let (sender, receiver) = mpsc::channel();
        let threads = num_cpus::get().clamp(1, MAX_DECODE_THREADS);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("carousel-decode-{i}"))
            .build()
            .map(Arc::new)
            .map_err(|e| log::warn!("no decode pool, falling back to global rayon pool: {e}"))
            .ok();

        Self {
            image_receiver: receiver,
            image_sender: sender,
            loading: Arc::new(Mutex::new(HashSet::new())),
            generation: 0,
            preload_range,
            loader: ImageLoader,
            pool,
        }
    }

    /// Forgets in-flight work and starts a new generation with `preload_range`.
    pub fn reset(&mut self, preload_range: usize) {
        self.generation += 1;
        self.preload_range = preload_range;
        self.loading = Arc::new(Mutex::new(HashSet::new()));
    }

    pub fn preload_range(&self) -> usize {
        self.preload_range
    }

    /// Queues the sources within `preload_range` of `current_index` (wrapping)
    /// that are neither cached nor already being decoded. Returns how many were queued.
    pub fn preload_images_around_index(
        &self,
        sources: &[String],
        current_index: usize,
        cache: &TextureCache,
    ) -> usize {
        let pending: Vec<String> = {
            let Ok(mut loading) = self.loading.lock() else {
                return 0;
            };
            window_indices(sources.len(), current_index, self.preload_range)
                .into_iter()
                .map(|i| &sources[i])
                .filter(|s| !cache.contains(s) && loading.insert((*s).clone()))
                .cloned()
                .collect()
        };

        if !pending.is_empty() {
            log::debug!("decoding {} images around index {}", pending.len(), current_index);
            self.spawn_decode(pending.clone());
        }
        pending.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.lock().map(|l| !l.is_empty()).unwrap_or(false)
    }

    fn spawn_decode(&self, sources: Vec<String>) {
        let sender = self.image_sender.clone();
        let loading = Arc::clone(&self.loading);
        let loader = self.loader;
        let generation = self.generation;

        let job = move || {
            sources.into_par_iter().for_each(|source| {
                let result = loader.load_image(&source);

                if let Ok(mut loading) = loading.lock() {
                    loading.remove(&source);
                }

                match result {
                    Ok(image) => {
                        // receiver gone means the app is shutting down
                        let _ = sender.send(Decoded {
                            generation,
                            source,
                            image,
                        });
                    }
                    Err(e) => log::warn!("failed to load {}: {}", source, e),
                }
            });
        };

        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }
    }

    /// Uploads decoded images of the current generation as textures.
    /// Returns how many were uploaded.
    pub fn process_loaded_images(&self, ctx: &Context, cache: &mut TextureCache) -> usize {
        let mut count = 0;
        while let Ok(decoded) = self.image_receiver.try_recv() {
            if decoded.generation != self.generation {
                log::trace!("dropping stale decode of {}", decoded.source);
                continue;
            }
            let texture = ctx.load_texture(
                format!("carousel_{}", decoded.source),
                decoded.image,
                egui::TextureOptions::LINEAR,
            );
            cache.insert(decoded.source, texture);
            count += 1;
        }
        count
    }
}

/// `center` first, then alternating neighbours out to `range`, wrapping around `len`.
pub fn window_indices(len: usize, center: usize, range: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let center = center % len;
    let mut indices = vec![center];
    for step in 1..=range.min(len) {
        for index in [(center + step) % len, (center + len - step % len) % len] {
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn wait_for(manager: &PreloadManager, ctx: &Context, cache: &mut TextureCache, want: usize) {
        let mut arrived = 0;
        for _ in 0..500 {
            arrived += manager.process_loaded_images(ctx, cache);
            if arrived >= want && !manager.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    fn pixel() -> ColorImage {
        ColorImage::from_rgba_unmultiplied([1, 1], &[0, 0, 0, 255])
    }

    #[test]
    fn window_wraps_around_both_ends() {
        assert_eq!(window_indices(10, 0, 2), [0, 1, 9, 2, 8]);
        assert_eq!(window_indices(10, 9, 1), [9, 0, 8]);
        assert_eq!(window_indices(3, 0, 5), [0, 1, 2]);
        assert_eq!(window_indices(1, 0, 3), [0]);
        assert!(window_indices(0, 0, 3).is_empty());
    }

    #[test]
    fn only_the_window_is_decoded() {
        let dir = TempDir::new().unwrap();
        let sources: Vec<String> = (0..6)
            .map(|i| {
                let path = dir.path().join(format!("{i}.png"));
                image::RgbaImage::new(2, 2).save(&path).unwrap();
                path.to_string_lossy().into_owned()
            })
            .collect();

        let ctx = Context::default();
        let mut cache = TextureCache::new(8);
        let manager = PreloadManager::new(1);

        assert_eq!(manager.preload_images_around_index(&sources, 0, &cache), 3);
        wait_for(&manager, &ctx, &mut cache, 3);
        assert!(cache.contains(&sources[0]));
        assert!(cache.contains(&sources[1]));
        assert!(cache.contains(&sources[5]));
        assert!(!cache.contains(&sources[3]));

        // moving by one only queues the new neighbour
        assert_eq!(manager.preload_images_around_index(&sources, 1, &cache), 1);
        wait_for(&manager, &ctx, &mut cache, 1);
        assert!(cache.contains(&sources[2]));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn results_from_an_earlier_mount_are_dropped() {
        let ctx = Context::default();
        let mut cache = TextureCache::new(8);
        let mut manager = PreloadManager::new(1);
        let old_generation = manager.generation;
        manager.reset(2);
        assert_eq!(manager.preload_range(), 2);

        manager
            .image_sender
            .send(Decoded {
                generation: old_generation,
                source: "old.png".into(),
                image: pixel(),
            })
            .unwrap();
        manager
            .image_sender
            .send(Decoded {
                generation: manager.generation,
                source: "new.png".into(),
                image: pixel(),
            })
            .unwrap();

        assert_eq!(manager.process_loaded_images(&ctx, &mut cache), 1);
        assert!(!cache.contains("old.png"));
        assert!(cache.contains("new.png"));
    }

    #[test]
    fn failed_sources_are_skipped() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.png").to_string_lossy().into_owned();

        let ctx = Context::default();
        let mut cache = TextureCache::new(8);
        let manager = PreloadManager::new(0);

        assert_eq!(manager.preload_images_around_index(&[missing], 0, &cache), 1);
        wait_for(&manager, &ctx, &mut cache, 0);
        assert!(!manager.is_loading());
        assert_eq!(cache.len(), 0);
    }
}
