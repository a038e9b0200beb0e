use crate::coords::{Point, Rect};
use crate::paint::Color;
use crate::text::FontSpec;

/// Backend-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Solid axis-aligned rectangle.
    FillRect { rect: Rect, color: Color },
    /// Straight line of `width` pixels from `from` to `to`.
    Line { from: Point, to: Point, color: Color, width: i32 },
    /// Single-line text; `origin` is the top-left of the text box.
    Text { text: String, font: FontSpec, origin: Point, color: Color },
}

impl DrawCmd {
    /// Bounding box of the command, used for clip culling and tests.
    ///
    /// Text has no intrinsic box without measurement; only its origin is reported.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCmd::FillRect { rect, .. } => *rect,
            DrawCmd::Line { from, to, width, .. } => {
                let x = from.x.min(to.x);
                let y = from.y.min(to.y);
                let w = (from.x - to.x).abs().max(*width);
                let h = (from.y - to.y).abs().max(*width);
                Rect::new(x, y, w, h)
            }
            DrawCmd::Text { origin, .. } => Rect::new(origin.x, origin.y, 0, 0),
        }
    }
}
