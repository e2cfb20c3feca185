use std::collections::HashMap;

use egui::Pos2;

use crate::geometry::hit_testing;
use crate::shape::{Shape, ShapeId};

/// The shapes of one figure: an id-keyed arena plus the z-order.
///
/// `order[0]` is drawn first (bottom), the last id is on top.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: HashMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from shapes listed bottom to top
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let mut document = Self::new();
        for shape in shapes {
            document.add_shape(shape);
        }
        document
    }

    /// Append a shape on top of the others
    pub fn add_shape(&mut self, shape: Shape) {
        let index = self.order.len();
        self.insert_shape(index, shape);
    }

    /// Insert at a z-order position, clamped to the end. An existing shape
    /// with the same id is replaced and moved.
    pub fn insert_shape(&mut self, index: usize, shape: Shape) {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_some() {
            self.order.retain(|existing| *existing != id);
        }
        let index = index.min(self.order.len());
        self.order.insert(index, id);
    }

    /// Remove a shape, returning it with its former z-order position
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<(usize, Shape)> {
        let shape = self.shapes.remove(&id)?;
        let index = self.order.iter().position(|existing| *existing == id)?;
        self.order.remove(index);
        Some((index, shape))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids bottom to top
    pub fn order(&self) -> &[ShapeId] {
        &self.order
    }

    /// Shapes bottom to top
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> + '_ {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Topmost shape containing `pos`
    pub fn shape_at(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes()
            .rev()
            .find(|shape| hit_testing::contains_point(shape, pos))
            .map(Shape::id)
    }

    /// Owned copy of the shapes bottom to top
    pub fn snapshot(&self) -> Vec<Shape> {
        self.shapes().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Geometry, ShapeStyle};
    use egui::pos2;

    fn circle(x: f32) -> Shape {
        Shape::new(
            Geometry::Circle { center: pos2(x, 0.0), diameter: 100.0 },
            ShapeStyle::default(),
        )
    }

    #[test]
    fn topmost_shape_wins_picking() {
        let bottom = circle(0.0);
        let top = circle(20.0);
        let top_id = top.id();
        let document = Document::from_shapes([bottom, top]);
        assert_eq!(document.shape_at(pos2(10.0, 0.0)), Some(top_id));
    }

    #[test]
    fn reinserting_an_id_does_not_duplicate_it() {
        let shape = circle(0.0);
        let mut document = Document::from_shapes([shape.clone(), circle(5.0)]);
        document.insert_shape(5, shape.clone());
        assert_eq!(document.len(), 2);
        assert_eq!(document.order()[1], shape.id());
    }
}
