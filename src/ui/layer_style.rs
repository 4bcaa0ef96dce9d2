use egui::{Color32, Pos2, Rect, Vec2};

use crate::config::config::{LAYER_OVERLAP, PAUSED_BACKGROUND, PLAYING_BACKGROUND};

/// Visual attributes of one layer of the fanned deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    /// Stacking order; higher paints on top. Zero means hidden.
    pub depth: usize,
    pub scale: f32,
    pub visible: bool,
    /// Horizontal offset added before the layer's slot.
    pub offset_x: f32,
}

/// Style of the layer at `index` in a visible list of `len` entries.
pub fn layer_style(index: usize, len: usize) -> LayerStyle {
    let half = len / 2;
    let depth = if index == 0 || index >= len {
        0
    } else if len % 2 == 0 {
        // index > len/2 - 2
        if index + 2 > half {
            len - index - 1
        } else {
            index + 1
        }
    } else if 2 * index + 2 > len {
        // index > len/2 - 1, with real division
        len - index - 1
    } else {
        index
    };

    let scale = if depth == 0 {
        0.0
    } else {
        0.5 + depth as f32 / (2.0 * half as f32)
    };

    LayerStyle {
        depth,
        scale,
        visible: depth != 0,
        offset_x: if index == 1 { 0.0 } else { LAYER_OVERLAP },
    }
}

pub fn layer_styles(len: usize) -> Vec<LayerStyle> {
    (0..len).map(|i| layer_style(i, len)).collect()
}

pub fn background_color(paused: bool) -> Color32 {
    let [r, g, b] = if paused {
        PAUSED_BACKGROUND
    } else {
        PLAYING_BACKGROUND
    };
    Color32::from_rgb(r, g, b)
}

/// Places visible layers left to right like a flow row, centered in `area`.
/// Hidden layers take no room and get `None`.
pub fn layout_layers(styles: &[LayerStyle], area: Rect, base_size: Vec2) -> Vec<Option<Rect>> {
    let row_width: f32 = styles
        .iter()
        .filter(|s| s.visible)
        .map(|s| s.offset_x + base_size.x)
        .sum();

    let mut x = area.center().x - row_width / 2.0;
    let y = area.center().y;

    styles
        .iter()
        .map(|style| {
            if !style.visible {
                return None;
            }
            x += style.offset_x;
            let slot_center = Pos2::new(x + base_size.x / 2.0, y);
            x += base_size.x;
            Some(Rect::from_center_size(slot_center, base_size * style.scale))
        })
        .collect()
}

/// Layer indices in paint order, back to front.
pub fn paint_order(styles: &[LayerStyle]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..styles.len()).filter(|&i| styles[i].visible).collect();
    order.sort_by_key(|&i| styles[i].depth);
    order
}

/// Topmost layer under `pointer`.
pub fn hit_test(styles: &[LayerStyle], rects: &[Option<Rect>], pointer: Pos2) -> Option<usize> {
    paint_order(styles)
        .into_iter()
        .rev()
        .find(|&i| rects.get(i).copied().flatten().is_some_and(|r| r.contains(pointer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn depths(len: usize) -> Vec<usize> {
        layer_styles(len).iter().map(|s| s.depth).collect()
    }

    #[test]
    fn odd_length_fans_out_from_center() {
        assert_eq!(depths(5), [0, 1, 2, 1, 0]);
        let scales: Vec<f32> = layer_styles(5).iter().map(|s| s.scale).collect();
        assert_eq!(scales, [0.0, 0.75, 1.0, 0.75, 0.0]);
    }

    #[test]
    fn even_length_peaks_left_of_center() {
        assert_eq!(depths(6), [0, 2, 3, 2, 1, 0]);
        assert_eq!(depths(4), [0, 2, 1, 0]);
        let scales: Vec<f32> = layer_styles(6).iter().map(|s| s.scale).collect();
        assert_eq!(scales[2], 1.0);
        assert!((scales[1] - (0.5 + 2.0 / 6.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn single_visible_image_is_full_size() {
        assert_eq!(depths(3), [0, 1, 0]);
        assert_eq!(layer_style(1, 3).scale, 1.0);
    }

    #[test]
    fn first_layer_is_always_hidden() {
        for len in 1..12 {
            let style = layer_style(0, len);
            assert_eq!(style.depth, 0);
            assert!(!style.visible);
            assert_eq!(style.scale, 0.0);
        }
    }

    #[test]
    fn only_second_layer_has_no_overlap() {
        let offsets: Vec<f32> = layer_styles(5).iter().map(|s| s.offset_x).collect();
        assert_eq!(offsets, [-50.0, 0.0, -50.0, -50.0, -50.0]);
    }

    #[test]
    fn background_reflects_pause() {
        assert_eq!(background_color(true), Color32::from_rgb(255, 192, 203));
        assert_eq!(background_color(false), Color32::from_rgb(0, 128, 0));
    }

    #[test]
    fn layout_centers_overlapping_row() {
        let styles = layer_styles(5);
        let area = Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 200.0));
        let rects = layout_layers(&styles, area, vec2(100.0, 50.0));

        assert_eq!(rects[0], None);
        assert_eq!(rects[4], None);
        let left = rects[1].unwrap();
        let mid = rects[2].unwrap();
        let right = rects[3].unwrap();

        assert_eq!(mid.center(), pos2(500.0, 100.0));
        assert_eq!(mid.size(), vec2(100.0, 50.0));
        assert_eq!(left.center(), pos2(450.0, 100.0));
        assert_eq!(left.size(), vec2(75.0, 37.5));
        assert_eq!(right.center(), pos2(550.0, 100.0));
    }

    #[test]
    fn deepest_layer_wins_hit_test() {
        let styles = layer_styles(5);
        let area = Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 200.0));
        let rects = layout_layers(&styles, area, vec2(100.0, 50.0));

        assert_eq!(paint_order(&styles), [1, 3, 2]);
        assert_eq!(hit_test(&styles, &rects, pos2(500.0, 100.0)), Some(2));
        assert_eq!(hit_test(&styles, &rects, pos2(420.0, 100.0)), Some(1));
        assert_eq!(hit_test(&styles, &rects, pos2(580.0, 100.0)), Some(3));
        assert_eq!(hit_test(&styles, &rects, pos2(10.0, 10.0)), None);
    }
}
