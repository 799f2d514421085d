use crate::layout::{NorthIndianLayout, SouthIndianLayout};
use crate::layout::north::FRAME_SIZE;
use crate::layout::south::GridPos;
use crate::planet::planet_abbreviation;
use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use crate::rendering::visual_config::VisualConfig;
use kundali_config::ChartSettings;

/// Turns computed layouts into drawable chart specs
pub struct ChartSpecGenerator {
    settings: ChartSettings,
    visual_config: VisualConfig,
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSpecGenerator {
    pub fn new() -> Self {
        Self::with_settings(ChartSettings::default())
    }

    pub fn with_settings(settings: ChartSettings) -> Self {
        let visual_config = VisualConfig::from_settings(&settings);
        Self {
            settings,
            visual_config,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    fn text(
        &self,
        position: Point,
        content: impl Into<String>,
        size: f32,
        anchor: TextAnchor,
    ) -> Shape {
        Shape::Text {
            position,
            content: content.into(),
            size,
            color: self.visual_config.sign_label_color,
            anchor,
            bold: false,
        }
    }

    fn planet_text(&self, position: Point, planet: &str, size: f32, anchor: TextAnchor) -> Shape {
        Shape::Text {
            position,
            content: planet_abbreviation(planet),
            size,
            color: self.visual_config.planet_color(planet),
            anchor,
            bold: true,
        }
    }

    /// Diamond chart: frame, sign number per house, planet abbreviations.
    pub fn north(&self, layout: &NorthIndianLayout) -> ChartSpec {
        let north = &self.settings.north;
        let vc = &self.visual_config;
        let mut spec = ChartSpec::new(FRAME_SIZE, north.height);
        spec.background_color = vc.background_color;

        let frame = Stroke::solid(vc.frame_color, vc.frame_width);
        spec.shapes.push(Shape::Polygon {
            points: NorthIndianLayout::frame_square().to_vec(),
            fill: None,
            stroke: Some(frame.clone()),
        });
        for (from, to) in NorthIndianLayout::frame_diagonals() {
            spec.shapes.push(Shape::Line {
                from,
                to,
                stroke: frame.clone(),
            });
        }
        spec.shapes.push(Shape::Polygon {
            points: NorthIndianLayout::frame_diamond().to_vec(),
            fill: None,
            stroke: Some(frame),
        });

        for house in &layout.houses {
            if let Some(sign) = house.cell.sign {
                spec.shapes.push(self.text(
                    house.label_at,
                    sign.number().to_string(),
                    north.label_font_size,
                    TextAnchor::Middle,
                ));
            }
            for (planet, slot) in house.cell.planets.iter().zip(&house.planet_slots) {
                spec.shapes.push(self.planet_text(
                    *slot,
                    &planet.planet,
                    north.planet_font_size,
                    TextAnchor::Middle,
                ));
            }
        }

        spec
    }

    /// Grid chart: 12 sign cells with house numbers, ascendant highlight and
    /// a caption block in the centre.
    pub fn south(&self, layout: &SouthIndianLayout) -> ChartSpec {
        let south = &self.settings.south;
        let vc = &self.visual_config;
        let geometry = &layout.geometry;
        let size = geometry.total_size();
        let cell = geometry.cell_size;
        let mut spec = ChartSpec::new(size, size);
        spec.background_color = vc.background_color;

        for c in &layout.cells {
            let origin = geometry.cell_origin(c.grid);
            let fill = if c.is_ascendant {
                vc.ascendant_fill
            } else {
                vc.cell_fill
            };
            spec.shapes.push(Shape::Rect {
                origin,
                width: cell,
                height: cell,
                fill: Some(fill),
                stroke: Some(Stroke::solid(vc.cell_stroke, 1.0)),
            });
            if c.is_ascendant {
                spec.shapes.push(Shape::Line {
                    from: origin,
                    to: origin.offset(20.0, 20.0),
                    stroke: Stroke::solid(vc.ascendant_marker, 2.0),
                });
            }

            spec.shapes.push(self.text(
                origin.offset(8.0, 16.0),
                c.sign.glyph(),
                south.label_font_size + 4.0,
                TextAnchor::Start,
            ));
            spec.shapes.push(self.text(
                origin.offset(24.0, 16.0),
                c.sign.short(),
                south.label_font_size,
                TextAnchor::Start,
            ));
            if let Some(house_no) = c.house_no {
                spec.shapes.push(Shape::Text {
                    position: origin.offset(cell - 12.0, 14.0),
                    content: house_no.to_string(),
                    size: south.label_font_size,
                    color: vc.house_label_color,
                    anchor: TextAnchor::End,
                    bold: true,
                });
            }
            for (planet, slot) in c.planets.iter().zip(&c.planet_slots) {
                spec.shapes.push(self.planet_text(
                    *slot,
                    &planet.planet,
                    south.planet_font_size,
                    TextAnchor::Start,
                ));
            }
        }

        let centre_origin = geometry.cell_origin(GridPos { row: 1, col: 1 });
        spec.shapes.push(Shape::Rect {
            origin: centre_origin,
            width: cell * 2.0,
            height: cell * 2.0,
            fill: Some(vc.background_color),
            stroke: Some(Stroke::solid(vc.cell_stroke, 1.0)),
        });
        let mid = centre_origin.offset(cell, cell);
        spec.shapes.push(self.text(
            mid.offset(0.0, -18.0),
            "South Indian",
            south.planet_font_size,
            TextAnchor::Middle,
        ));
        spec.shapes.push(self.text(mid, "Kundali", south.planet_font_size, TextAnchor::Middle));
        if let Some(asc) = layout.ascendant {
            spec.shapes.push(self.text(
                mid.offset(0.0, 20.0),
                format!("Asc: {} {}", asc.glyph(), asc.name()),
                south.label_font_size,
                TextAnchor::Middle,
            ));
        }

        spec
    }
}
