use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Vec2};

use super::{Canvas, LineCap, Outline, Primitive, PrimitiveId};
use crate::error::{CanvasError, CanvasResult};

/// Number of segments used to approximate an oval outline
const OVAL_SEGMENTS: usize = 64;

/// In-memory canvas holding primitives in back-to-front order
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Vec<(PrimitiveId, Primitive)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, primitive)| primitive)
    }

    /// Iterate primitives from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives.iter().map(|(id, primitive)| (*id, primitive))
    }

    /// The topmost primitive, if any
    pub fn top(&self) -> Option<(PrimitiveId, &Primitive)> {
        self.primitives.last().map(|(id, primitive)| (*id, primitive))
    }

    fn push(&mut self, primitive: Primitive) -> PrimitiveId {
        self.next_id += 1;
        let id = PrimitiveId::new(self.next_id);
        log::trace!("Adding {} {}", primitive.kind(), id);
        self.primitives.push((id, primitive));
        id
    }

    fn position(&self, id: PrimitiveId) -> CanvasResult<usize> {
        self.primitives
            .iter()
            .position(|(candidate, _)| *candidate == id)
            .ok_or(CanvasError::UnknownPrimitive(id))
    }

    /// Paint every primitive, translating canvas coordinates by `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for (_, primitive) in &self.primitives {
            paint_primitive(painter, primitive, offset);
        }
    }
}

impl Canvas for Scene {
    fn draw_line(&mut self, from: Pos2, to: Pos2, outline: Outline, cap: LineCap) -> PrimitiveId {
        self.push(Primitive::Line {
            from,
            to,
            outline,
            cap,
        })
    }

    fn draw_rectangle(&mut self, from: Pos2, to: Pos2, outline: Outline) -> PrimitiveId {
        self.push(Primitive::Rectangle { from, to, outline })
    }

    fn draw_oval(&mut self, bounds: Rect, outline: Outline) -> PrimitiveId {
        self.push(Primitive::Oval { bounds, outline })
    }

    fn draw_text(&mut self, pos: Pos2, text: &str, color: Color32, font_size: f32) -> PrimitiveId {
        self.push(Primitive::Text {
            pos,
            text: text.to_owned(),
            color,
            font_size,
        })
    }

    fn delete(&mut self, id: PrimitiveId) -> CanvasResult<()> {
        let index = self.position(id)?;
        self.primitives.remove(index);
        Ok(())
    }

    fn raise(&mut self, id: PrimitiveId) -> CanvasResult<()> {
        let index = self.position(id)?;
        let entry = self.primitives.remove(index);
        self.primitives.push(entry);
        Ok(())
    }

    fn clear_all(&mut self) {
        self.primitives.clear();
    }
}

fn paint_primitive(painter: &Painter, primitive: &Primitive, offset: Vec2) {
    match primitive {
        Primitive::Line {
            from,
            to,
            outline,
            cap,
        } => {
            let points = [*from + offset, *to + offset];
            paint_path(painter, &points, outline);
            if *cap == LineCap::Round && outline.dash.is_none() {
                let radius = outline.width / 2.0;
                painter.circle_filled(points[0], radius, outline.color);
                painter.circle_filled(points[1], radius, outline.color);
            }
        }
        Primitive::Rectangle { from, to, outline } => {
            let rect = Rect::from_two_pos(*from, *to).translate(offset);
            let corners = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            paint_path(painter, &corners, outline);
        }
        Primitive::Oval { bounds, outline } => {
            let bounds = bounds.translate(offset);
            let radii = bounds.size() / 2.0;
            if radii.x <= 0.0 && radii.y <= 0.0 {
                return;
            }
            paint_path(painter, &oval_points(bounds.center(), radii), outline);
        }
        Primitive::Text {
            pos,
            text,
            color,
            font_size,
        } => {
            painter.text(
                *pos + offset,
                Align2::LEFT_TOP,
                text,
                FontId::proportional(*font_size),
                *color,
            );
        }
    }
}

fn paint_path(painter: &Painter, points: &[Pos2], outline: &Outline) {
    match outline.dash {
        Some(pattern) => {
            painter.extend(Shape::dashed_line(
                points,
                outline.stroke(),
                pattern.dash,
                pattern.gap,
            ));
        }
        None => {
            painter.add(Shape::line(points.to_vec(), outline.stroke()));
        }
    }
}

/// Closed polyline approximating the ellipse with the given center and radii
fn oval_points(center: Pos2, radii: Vec2) -> Vec<Pos2> {
    (0..=OVAL_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin())
        })
        .collect()
}
