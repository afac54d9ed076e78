//! Flow layout: places fixed-size items left-to-right, wrapping to a new row
//! when the next item's right edge would pass the available width.
//!
//! Pure geometry over `egui` math types. The gallery widget caches the result
//! per width; nothing here touches a `Ui`.

use std::ops::Range;

use egui::{Rect, Vec2, pos2};

/// Spacing configuration for a flow layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    margin: f32,
    h_spacing: f32,
    v_spacing: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            margin: 0.0,
            h_spacing: 16.0,
            v_spacing: 16.0,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowArrangement {
    /// One rect per input item, same order, relative to the container origin.
    pub rects: Vec<Rect>,
    /// Item index ranges, one per row, top to bottom.
    pub rows: Vec<Range<usize>>,
    /// Total height consumed including margins; `0.0` when there are no items.
    pub height: f32,
}

impl FlowArrangement {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl FlowLayout {
    pub fn new(margin: f32, h_spacing: f32, v_spacing: f32) -> Self {
        Self {
            margin: margin.max(0.0),
            h_spacing: h_spacing.max(0.0),
            v_spacing: v_spacing.max(0.0),
        }
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn h_spacing(&self) -> f32 {
        self.h_spacing
    }

    pub fn v_spacing(&self) -> f32 {
        self.v_spacing
    }

    /// Lay out `sizes` inside a container `available_width` wide.
    ///
    /// An item that does not fit on an empty row is placed there anyway, so a
    /// container narrower than one item degrades to a single column instead of
    /// placing nothing.
    pub fn arrange(&self, sizes: &[Vec2], available_width: f32) -> FlowArrangement {
        if sizes.is_empty() {
            return FlowArrangement::default();
        }

        let left = self.margin;
        let right = (available_width - self.margin).max(left);

        let mut rects = Vec::with_capacity(sizes.len());
        let mut rows = Vec::new();
        let mut x = left;
        let mut y = self.margin;
        let mut row_start = 0;
        let mut row_height = 0.0_f32;

        for (i, size) in sizes.iter().enumerate() {
            if i > row_start && x + size.x > right {
                rows.push(row_start..i);
                y += row_height + self.v_spacing;
                x = left;
                row_height = 0.0;
                row_start = i;
            }
            rects.push(Rect::from_min_size(pos2(x, y), *size));
            x += size.x + self.h_spacing;
            row_height = row_height.max(size.y);
        }
        rows.push(row_start..sizes.len());

        FlowArrangement {
            rects,
            rows,
            height: y + row_height + self.margin,
        }
    }
}
