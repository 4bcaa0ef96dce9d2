use std::path::{Path, PathBuf};
use std::time::Duration;

use eframe::egui;
use rfd::FileDialog;

use crate::config::config::*;
use crate::core::carousel_config::CarouselConfig;
use crate::core::controller::CarouselController;
use crate::core::file_manager::FileManager;
use crate::core::image_format::ImageFormat;
use crate::core::image_cache::TextureCache;
use crate::core::preload_manager::PreloadManager;
use crate::i18n::es::*;
use crate::ui::carousel_view::{CarouselCallbacks, CarouselView};

/// What the launcher hands to the window.
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub sources: Vec<String>,
    pub display_number: usize,
    pub step_interval: Duration,
}

pub struct CarouselApp {
    carousel: Option<CarouselView>,
    sources: Vec<String>,
    preloaded_at: Option<usize>,
    display_number: usize,
    step_interval: Duration,
    textures: TextureCache,
    preload_manager: PreloadManager,
    image_dir: Option<PathBuf>,
    error: Option<String>,
    fullscreen: bool,
    show_about: bool,
}

impl CarouselApp {
    pub fn new(settings: LaunchSettings) -> Self {
        let mut app = Self {
            carousel: None,
            sources: Vec::new(),
            preloaded_at: None,
            display_number: settings.display_number,
            step_interval: settings.step_interval,
            textures: TextureCache::new(TEXTURE_CACHE_SIZE),
            preload_manager: PreloadManager::new(PRELOAD_RANGE),
            image_dir: None,
            error: None,
            fullscreen: false,
            show_about: false,
        };
        if !settings.sources.is_empty() {
            app.mount(settings.sources);
        }
        app
    }

    /// Builds a fresh carousel for `sources`; position and pause state start over.
    fn mount(&mut self, sources: Vec<String>) {
        let config = CarouselConfig::new(sources.iter().cloned())
            .with_display_number(self.display_number)
            .with_step_interval(self.step_interval);

        let range = self.display_number / 2 + BORDER + PRELOAD_RANGE;
        self.preload_manager.reset(range);

        match CarouselController::new(config) {
            Ok(controller) => {
                // enough room for the decode window so it never evicts itself
                self.textures = TextureCache::new(TEXTURE_CACHE_SIZE.max(2 * range + 1));
                self.carousel = Some(CarouselView::new(controller, Self::callbacks()));
                self.error = None;
                log::info!("carousel mounted with {} images", sources.len());
            }
            Err(e) => {
                log::error!("cannot build carousel: {}", e);
                self.carousel = None;
                self.textures.clear();
                self.error = Some(format!("{}: {}", ERROR_CONFIG, e));
            }
        }
        self.sources = sources;
        self.preloaded_at = None;
    }

    /// Decodes the neighbourhood of the centered image once per index change.
    fn preload_around_center(&mut self) {
        let Some(carousel) = &self.carousel else {
            return;
        };
        let index = carousel.controller().viewing_index();
        if self.preloaded_at == Some(index) {
            return;
        }
        self.preload_manager
            .preload_images_around_index(&self.sources, index, &self.textures);
        self.preloaded_at = Some(index);
    }

    fn callbacks() -> CarouselCallbacks {
        CarouselCallbacks::default()
            .with_on_click_next(|index| log::info!("onClickNext({})", index))
            .with_on_click_prev(|index| log::info!("onClickPrev({})", index))
    }

    fn load_images_from_folder(&mut self, dir: &Path) {
        match FileManager::scan_directory(dir) {
            Ok(image_paths) => {
                self.image_dir = Some(dir.to_path_buf());
                let sources = image_paths.iter().map(|p| FileManager::source_of(p)).collect();
                self.mount(sources);
            }
            Err(e) => {
                log::error!("cannot scan {}: {}", dir.display(), e);
                self.error = Some(format!("{}: {}", ERROR_SCAN, e));
            }
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (next, prev, pause, escape, f11) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F11),
            )
        });

        if let Some(carousel) = &mut self.carousel {
            let controller = carousel.controller_mut();
            if next {
                controller.advance();
            }
            if prev {
                controller.retreat();
            }
            if pause {
                controller.toggle_pause();
            }
        }

        if escape && self.fullscreen {
            self.set_fullscreen(ctx, false);
        }
        if f11 {
            self.set_fullscreen(ctx, !self.fullscreen);
        }
    }

    fn set_fullscreen(&mut self, ctx: &egui::Context, fullscreen: bool) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        self.fullscreen = fullscreen;
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui);
                ui.separator();
                self.show_navigation_controls(ui);
                ui.separator();
                self.show_view_controls(ui, ctx);
                self.show_image_info(ui);
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui) {
        let start_dir = self.image_dir.clone().unwrap_or_else(|| PathBuf::from("."));

        if ui.button(format!("📂 {}", BTN_OPEN)).clicked() {
            if let Some(dir) = FileDialog::new().set_directory(&start_dir).pick_folder() {
                self.load_images_from_folder(&dir);
            }
        }

        if ui.button(format!("🖼 {}", BTN_OPEN_FILES)).clicked() {
            if let Some(files) = FileDialog::new()
                .set_directory(&start_dir)
                .add_filter(FILTER_IMAGES, &ImageFormat::get_supported_extensions())
                .pick_files()
            {
                self.image_dir = files.first().and_then(|f| f.parent()).map(Path::to_path_buf);
                self.mount(files.iter().map(|f| FileManager::source_of(f)).collect());
            }
        }
    }

    fn show_navigation_controls(&mut self, ui: &mut egui::Ui) {
        let enabled = self.carousel.is_some();
        let paused = self
            .carousel
            .as_ref()
            .is_some_and(|c| c.controller().is_paused());

        let prev = ui.add_enabled(enabled, egui::Button::new(format!("⬅️ {}", BTN_PREV))).clicked();
        let toggle = ui
            .add_enabled(
                enabled,
                egui::Button::new(if paused { format!("▶ {}", BTN_RESUME) } else { format!("⏸ {}", BTN_PAUSE) }),
            )
            .clicked();
        let next = ui.add_enabled(enabled, egui::Button::new(format!("➡️ {}", BTN_NEXT))).clicked();

        if let Some(carousel) = &mut self.carousel {
            let controller = carousel.controller_mut();
            if prev {
                controller.retreat();
            }
            if toggle {
                controller.toggle_pause();
            }
            if next {
                controller.advance();
            }
        }
    }

    fn show_view_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if ui.button(format!("🖥️ {}", BTN_FULLSCREEN)).clicked() {
            self.set_fullscreen(ctx, true);
        }

        if ui.button(format!("ℹ️ {}", BTN_ABOUT)).clicked() {
            self.show_about = true;
        }
    }

    fn show_image_info(&self, ui: &mut egui::Ui) {
        if let Some(carousel) = &self.carousel {
            let controller = carousel.controller();
            ui.separator();
            ui.label(format!("{} / {}", controller.viewing_index() + 1, controller.image_count()));
            ui.label(FileManager::display_name(controller.viewing_source()));
        }
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        egui::Window::new(BTN_ABOUT)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.heading(APP_NAME);
                    ui.label(format!("v{}", APP_VERSION));
                    ui.label(format!("{}{}", TEXT_AUTHOR, APP_AUTHOR));
                    ui.label(TEXT_LICENSE);
                    ui.label(TEXT_INFOAPP);
                });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::RIGHT), |ui| {
                    if ui.button(BTN_CLOSE).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn show_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            match &mut self.carousel {
                Some(carousel) => {
                    ui.add_space(ui.available_height() / 3.0);
                    carousel.show(ui, &mut self.textures);
                    ui.vertical_centered(|ui| ui.weak(TEXT_CLICKHINT));
                }
                None => Self::show_placeholder_text(ui),
            }
        });
    }

    fn show_placeholder_text(ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            ui.label("");
            ui.label(TEXT_OPENIMG);
            ui.label(TEXT_ROWSORSPACE);
            ui.label(TEXT_F11FULLSCREEN);
        });
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // pick up textures decoded since the last frame
        let uploaded = self.preload_manager.process_loaded_images(ctx, &mut self.textures);
        if uploaded > 0 {
            log::trace!("{} new textures, {} cached", uploaded, self.textures.len());
            ctx.request_repaint();
        }

        if let Some(carousel) = &mut self.carousel {
            carousel.controller_mut().tick();
        }

        self.handle_keyboard_input(ctx);

        if !self.fullscreen {
            self.show_toolbar(ctx);
        }

        self.show_about_dialog(ctx);
        self.show_main_content(ctx);
        self.preload_around_center();

        if self.preload_manager.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
        if let Some(wait) = self
            .carousel
            .as_ref()
            .and_then(|c| c.controller().time_until_next_step())
        {
            ctx.request_repaint_after(wait);
        }
    }
}
