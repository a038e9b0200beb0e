//! Borderless window move / resize.
//!
//! A frame without native decorations composes one [`WindowDragController`]:
//! it classifies the pointer into a [`FrameZone`], then tracks a single drag
//! session and reports the window rectangle it implies.

use flatbar_engine::coords::{Point, Rect, Size};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResizeGrip {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeGrip {
    /// `Some(true)` for the right edge, `Some(false)` for the left one.
    const fn horizontal_edge(self) -> Option<bool> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(false),
            Self::Right | Self::TopRight | Self::BottomRight => Some(true),
            Self::Top | Self::Bottom => None,
        }
    }

    /// `Some(true)` for the bottom edge, `Some(false)` for the top one.
    const fn vertical_edge(self) -> Option<bool> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(false),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(true),
            Self::Left | Self::Right => None,
        }
    }
}

/// What a pointer press at some window-local point would start.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameZone {
    Client,
    Caption,
    Edge(ResizeGrip),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DragKind {
    Move,
    Resize(ResizeGrip),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct DragSession {
    kind: DragKind,
    anchor: Point,
    start: Rect,
    current: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDragController {
    border: i32,
    min_size: Size,
    session: Option<DragSession>,
}

impl WindowDragController {
    /// `border` is the width of the resize band along each window edge.
    pub fn new(border: i32, min_size: Size) -> Self {
        Self { border: border.max(0), min_size, session: None }
    }

    /// Edges win over the caption; `is_caption` is the ribbon's verdict for
    /// points away from the edges.
    pub fn classify(&self, window: Size, pos: Point, is_caption: bool) -> FrameZone {
        let b = self.border;
        if pos.x < 0 || pos.y < 0 || pos.x >= window.w || pos.y >= window.h {
            return FrameZone::Client;
        }
        let near_left = pos.x < b;
        let near_right = pos.x >= window.w - b;
        let near_top = pos.y < b;
        let near_bottom = pos.y >= window.h - b;

        let grip = match (near_left, near_right, near_top, near_bottom) {
            (true, false, true, false) => Some(ResizeGrip::TopLeft),
            (false, true, true, false) => Some(ResizeGrip::TopRight),
            (true, false, false, true) => Some(ResizeGrip::BottomLeft),
            (false, true, false, true) => Some(ResizeGrip::BottomRight),
            (true, false, false, false) => Some(ResizeGrip::Left),
            (false, true, false, false) => Some(ResizeGrip::Right),
            (false, false, true, false) => Some(ResizeGrip::Top),
            (false, false, false, true) => Some(ResizeGrip::Bottom),
            _ => None,
        };
        match grip {
            Some(g) => FrameZone::Edge(g),
            None if is_caption => FrameZone::Caption,
            None => FrameZone::Client,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a session. Client presses start nothing.
    pub fn begin(&mut self, zone: FrameZone, screen_pos: Point, window: Rect) -> bool {
        let kind = match zone {
            FrameZone::Client => return false,
            FrameZone::Caption => DragKind::Move,
            FrameZone::Edge(g) => DragKind::Resize(g),
        };
        log::debug!("window drag begin: {:?} at {:?}", kind, screen_pos);
        self.session = Some(DragSession { kind, anchor: screen_pos, start: window, current: window });
        true
    }

    /// New window rectangle for the pointer at `screen_pos`.
    pub fn update(&mut self, screen_pos: Point) -> Option<Rect> {
        let min = self.min_size;
        let s = self.session.as_mut()?;
        let d = screen_pos - s.anchor;
        s.current = match s.kind {
            DragKind::Move => s.start.translate(d),
            DragKind::Resize(grip) => resize(s.start, grip, d, min),
        };
        Some(s.current)
    }

    /// Ends the session, returning the final rectangle.
    pub fn end(&mut self) -> Option<Rect> {
        let s = self.session.take()?;
        log::debug!("window drag end: {:?}", s.current);
        Some(s.current)
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }
}

fn resize(start: Rect, grip: ResizeGrip, d: Point, min: Size) -> Rect {
    let (mut x, mut w) = (start.x, start.w);
    match grip.horizontal_edge() {
        Some(true) => w = (start.w + d.x).max(min.w),
        Some(false) => {
            w = (start.w - d.x).max(min.w);
            x = start.right() - w;
        }
        None => {}
    }
    let (mut y, mut h) = (start.y, start.h);
    match grip.vertical_edge() {
        Some(true) => h = (start.h + d.y).max(min.h),
        Some(false) => {
            h = (start.h - d.y).max(min.h);
            y = start.bottom() - h;
        }
        None => {}
    }
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctl() -> WindowDragController {
        WindowDragController::new(4, Size::new(200, 100))
    }

    #[test]
    fn classifies_edges_corners_and_caption() {
        let c = ctl();
        let win = Size::new(800, 600);
        assert_eq!(c.classify(win, Point::new(1, 1), true), FrameZone::Edge(ResizeGrip::TopLeft));
        assert_eq!(c.classify(win, Point::new(799, 599), false), FrameZone::Edge(ResizeGrip::BottomRight));
        assert_eq!(c.classify(win, Point::new(400, 2), true), FrameZone::Edge(ResizeGrip::Top));
        assert_eq!(c.classify(win, Point::new(797, 300), false), FrameZone::Edge(ResizeGrip::Right));
        assert_eq!(c.classify(win, Point::new(400, 15), true), FrameZone::Caption);
        assert_eq!(c.classify(win, Point::new(400, 15), false), FrameZone::Client);
        assert_eq!(c.classify(win, Point::new(900, 15), true), FrameZone::Client);
    }

    #[test]
    fn caption_drag_moves_window() {
        let mut c = ctl();
        assert!(c.begin(FrameZone::Caption, Point::new(500, 110), Rect::new(100, 100, 800, 600)));
        assert_eq!(c.update(Point::new(530, 90)), Some(Rect::new(130, 80, 800, 600)));
        assert_eq!(c.end(), Some(Rect::new(130, 80, 800, 600)));
        assert!(!c.is_dragging());
    }

    #[test]
    fn left_edge_resize_keeps_right_edge_and_minimum() {
        let mut c = ctl();
        c.begin(FrameZone::Edge(ResizeGrip::Left), Point::new(100, 300), Rect::new(100, 100, 800, 600));
        assert_eq!(c.update(Point::new(150, 300)), Some(Rect::new(150, 100, 750, 600)));
        // past the minimum width
        assert_eq!(c.update(Point::new(850, 300)), Some(Rect::new(700, 100, 200, 600)));
    }

    #[test]
    fn bottom_right_resize_grows_both_axes() {
        let mut c = ctl();
        c.begin(FrameZone::Edge(ResizeGrip::BottomRight), Point::new(900, 700), Rect::new(100, 100, 800, 600));
        assert_eq!(c.update(Point::new(920, 650)), Some(Rect::new(100, 100, 820, 550)));
    }

    #[test]
    fn client_press_starts_nothing() {
        let mut c = ctl();
        assert!(!c.begin(FrameZone::Client, Point::new(0, 0), Rect::new(0, 0, 10, 10)));
        assert_eq!(c.update(Point::new(5, 5)), None);
        assert_eq!(c.end(), None);
    }
}
