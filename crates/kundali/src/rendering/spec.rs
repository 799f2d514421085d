use crate::rendering::primitives::{Color, Shape};
use serde::{Deserialize, Serialize};

/// Declarative description of one rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
}

impl ChartSpec {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background_color: Color::WHITE,
            shapes: Vec::new(),
        }
    }

    /// Text content of every text shape, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(Shape::text_content)
    }
}
