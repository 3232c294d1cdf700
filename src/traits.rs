// chunk-broadphase contributors, 20261019

use super::geom::Point2;

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque object handle
///
/// Grids track objects by handle identity only; two objects with equal
/// geometry but different handles are distinct.
pub trait ObjectID: Copy + Clone + Hash + Ord + Debug {}

impl<T: Copy + Clone + Hash + Ord + Debug> ObjectID for T {}

/// An object whose chunk memberships are managed by a `SpatialGrid`
///
/// The grid reads nothing else: `position` and `size` define the axis-aligned
/// bounding box used for insertion, and `vertices` supplies the probe points
/// used for area queries. Probe points need not be true polygon vertices, but
/// there must be at least one.
pub trait ManagedObject<S> {
    type Handle: ObjectID;
    type Vertices: IntoIterator<Item = Point2<S>>;

    /// A handle which stays stable for as long as the object is registered
    fn handle(&self) -> Self::Handle;

    /// Minimum corner of the bounding box
    fn position(&self) -> Point2<S>;

    fn size(&self) -> Point2<S>;

    fn vertices(&self) -> Self::Vertices;
}
