use flatbar_engine::coords::{Point, Rect};
use flatbar_engine::text::FontSpec;

use crate::control::Paintable;
use crate::painter::Painter;
use crate::slot::LayoutSlot;

/// Window command issued by a system button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SystemCommand {
    Minimize,
    Maximize,
    Close,
}

impl SystemCommand {
    fn glyph(self) -> &'static str {
        match self {
            SystemCommand::Minimize => "_",
            SystemCommand::Maximize => "[]",
            SystemCommand::Close => "X",
        }
    }
}

/// Right-anchored minimise / maximise / close cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemButtons {
    commands: Vec<SystemCommand>,
    button_width: i32,
    visible: bool,
}

impl SystemButtons {
    pub fn new(button_width: i32) -> Self {
        Self {
            commands: vec![SystemCommand::Minimize, SystemCommand::Maximize, SystemCommand::Close],
            button_width: button_width.max(0),
            visible: true,
        }
    }

    pub fn with_commands(mut self, commands: Vec<SystemCommand>) -> Self {
        self.commands = commands;
        self
    }

    pub fn commands(&self) -> &[SystemCommand] {
        &self.commands
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Per-button rectangles inside the cluster's placed `rect`.
    fn button_rects(&self, rect: Rect) -> impl Iterator<Item = (SystemCommand, Rect)> + '_ {
        self.commands.iter().enumerate().map(move |(i, cmd)| {
            let x = rect.x + i as i32 * self.button_width;
            (*cmd, Rect::new(x, rect.y, self.button_width, rect.h).clamp_within(rect))
        })
    }

    /// Command under `pos`, given where the cluster was placed.
    pub fn command_at(&self, rect: Rect, pos: Point) -> Option<SystemCommand> {
        self.button_rects(rect).find(|(_, r)| r.contains(pos)).map(|(cmd, _)| cmd)
    }
}

impl LayoutSlot for SystemButtons {
    fn required_width(&self) -> i32 {
        self.button_width.saturating_mul(self.commands.len() as i32)
    }

    fn effectively_visible(&self) -> bool {
        self.visible && !self.commands.is_empty() && self.required_width() > 0
    }
}

impl Paintable for SystemButtons {
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let text = painter.theme().button_text;
        let close = painter.theme().close_button;
        for (cmd, r) in self.button_rects(rect) {
            let color = if cmd == SystemCommand::Close { close } else { text };
            painter.text_centered(cmd.glyph(), FontSpec::default(), r, color);
        }
    }
}
