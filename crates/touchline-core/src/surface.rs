use crate::types::draw::{Color, DrawCommand, Layer, ShapeData};

// ─── Surface ──────────────────────────────────────────────────────────────────

/// Drawing target for the pitch renderer and the event plotter.
///
/// A surface is owned exclusively for the duration of a render pass. `reset`
/// always comes first and discards everything drawn before it.
pub trait Surface {
    /// Resize to `width` × `height` pixels and clear to `background`.
    fn reset(&mut self, width: f64, height: f64, background: Color);

    /// Composite one command on top of everything drawn so far.
    fn draw(&mut self, command: DrawCommand);
}

// ─── Frame ────────────────────────────────────────────────────────────────────

/// Recording surface: keeps the commands in paint order so any backend can
/// replay them.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width:      f64,
    pub height:     f64,
    pub background: Color,
    pub commands:   Vec<DrawCommand>,
}

impl Default for Frame {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, background: Color::BLACK, commands: Vec::new() }
    }
}

impl Frame {
    pub fn new() -> Self { Self::default() }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeData> {
        self.commands.iter().map(DrawCommand::shape)
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &ShapeData> {
        self.shapes().filter(move |s| s.layer == layer)
    }

    pub fn markers(&self) -> impl Iterator<Item = &ShapeData> { self.layer(Layer::Marker) }

    pub fn trajectories(&self) -> impl Iterator<Item = &ShapeData> { self.layer(Layer::Trajectory) }
}

impl Surface for Frame {
    fn reset(&mut self, width: f64, height: f64, background: Color) {
        self.width = width;
        self.height = height;
        self.background = background;
        self.commands.clear();
    }

    fn draw(&mut self, command: DrawCommand) { self.commands.push(command); }
}
