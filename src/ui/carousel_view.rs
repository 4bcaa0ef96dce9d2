use egui::{pos2, vec2, Color32, CursorIcon, Rect, Response, Sense, Ui, Vec2};

use crate::config::config::{LAYER_SIZE, PLACEHOLDER_FILL};
use crate::core::controller::CarouselController;
use crate::core::image_cache::TextureCache;
use crate::core::sequence::Position;
use crate::core::step_timer::{Clock, SystemClock};
use crate::ui::layer_style::{background_color, hit_test, layer_styles, layout_layers, paint_order};

const FRAME_PADDING: f32 = 16.0;

/// Caller hooks for manual navigation. Both receive the centered index at click time.
pub struct CarouselCallbacks {
    pub on_click_next: Box<dyn FnMut(usize)>,
    pub on_click_prev: Box<dyn FnMut(usize)>,
}

impl Default for CarouselCallbacks {
    fn default() -> Self {
        Self {
            on_click_next: Box::new(|_| {}),
            on_click_prev: Box::new(|_| {}),
        }
    }
}

impl CarouselCallbacks {
    pub fn with_on_click_next(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_click_next = Box::new(f);
        self
    }

    pub fn with_on_click_prev(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_click_prev = Box::new(f);
        self
    }
}

/// Draws a [`CarouselController`] as a fanned deck and routes clicks back into it.
pub struct CarouselView<C: Clock = SystemClock> {
    controller: CarouselController<C>,
    callbacks: CarouselCallbacks,
    layer_size: Vec2,
}

impl<C: Clock> CarouselView<C> {
    pub fn new(controller: CarouselController<C>, callbacks: CarouselCallbacks) -> Self {
        Self {
            controller,
            callbacks,
            layer_size: vec2(LAYER_SIZE[0], LAYER_SIZE[1]),
        }
    }

    pub fn controller(&self) -> &CarouselController<C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController<C> {
        &mut self.controller
    }

    /// Side clicks navigate and notify the caller; the centered image toggles autoplay.
    ///
    /// Left pairs `retreat` with `on_click_next` and right pairs `advance` with
    /// `on_click_prev`; consumers rely on this pairing as it is.
    pub fn handle_click(&mut self, position: Position) {
        let index = self.controller.viewing_index();
        match position {
            Position::Left => {
                self.controller.retreat();
                (self.callbacks.on_click_next)(index);
            }
            Position::Right => {
                self.controller.advance();
                (self.callbacks.on_click_prev)(index);
            }
            Position::Mid => self.controller.toggle_pause(),
        }
        log::debug!("{:?} click at index {}", position, index);
    }

    pub fn show(&mut self, ui: &mut Ui, textures: &mut TextureCache) -> Response {
        let desired = vec2(ui.available_width(), self.layer_size.y + 2.0 * FRAME_PADDING);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        let clicked = {
            let images = self.controller.viewing_images();
            if images.is_empty() {
                return response;
            }

            let styles = layer_styles(images.len());
            let rects = layout_layers(&styles, rect, self.layer_size);
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 4.0, background_color(self.controller.is_paused()));

            for i in paint_order(&styles) {
                let Some(layer_rect) = rects[i] else {
                    continue;
                };
                match textures.get(images[i].source) {
                    Some(texture) => {
                        painter.image(
                            texture.id(),
                            layer_rect,
                            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                            Color32::WHITE,
                        );
                    }
                    None => {
                        let [r, g, b] = PLACEHOLDER_FILL;
                        painter.rect_filled(layer_rect, 2.0, Color32::from_rgb(r, g, b));
                    }
                }
            }

            response
                .clicked()
                .then(|| response.interact_pointer_pos())
                .flatten()
                .and_then(|pointer| hit_test(&styles, &rects, pointer))
                .map(|i| images[i].position)
        };

        if let Some(position) = clicked {
            self.handle_click(position);
            ui.ctx().request_repaint();
        }
        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}
