// chunk-broadphase contributors, 20261019

use super::geom::Point2;
use super::traits::{ManagedObject, ObjectID};

use cgmath::BaseFloat;
use smallvec::SmallVec;

/// An axis-aligned box, probed at its four corners
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxObject<ID, S> {
    handle: ID,
    position: Point2<S>,
    size: Point2<S>
}

impl<ID, S> BoxObject<ID, S>
where
    ID: ObjectID,
    S: BaseFloat
{
    pub fn new(handle: ID, position: Point2<S>, size: Point2<S>) -> Self {
        Self{handle, position, size}
    }

    pub fn set_position(&mut self, position: Point2<S>) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: Point2<S>) {
        self.size = size;
    }

    pub fn translate(&mut self, offset: Point2<S>) {
        self.position = self.position + offset;
    }

    /// Maximum corner of the box
    pub fn max(&self) -> Point2<S> {
        self.position + self.size
    }
}

impl<ID, S> ManagedObject<S> for BoxObject<ID, S>
where
    ID: ObjectID,
    S: BaseFloat
{
    type Handle = ID;
    type Vertices = SmallVec<[Point2<S>; 4]>;

    fn handle(&self) -> ID {
        self.handle
    }

    fn position(&self) -> Point2<S> {
        self.position
    }

    fn size(&self) -> Point2<S> {
        self.size
    }

    fn vertices(&self) -> Self::Vertices {
        let min = self.position;
        let max = self.max();
        smallvec![
            min,
            Point2::new(max.x(), min.y()),
            max,
            Point2::new(min.x(), max.y())]
    }
}
