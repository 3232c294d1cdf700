// chunk-broadphase contributors, 20261019

use super::error::GridError;
use super::geom::Point2;
use super::index::{to_f64, ChunkCoord, ChunkLayout};
use super::traits::{ManagedObject, ObjectID};

use cgmath::BaseFloat;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Handles of the objects overlapping one chunk, in insertion order
type Chunk<ID> = SmallVec<[ID; 4]>;

/// Flat indices of the chunks one object occupies
type Membership = SmallVec<[usize; 4]>;

/// Why an object is being removed from a `SpatialGrid`
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disposition {
    /// The object will be added again shortly; its registration is kept
    Reinsert,
    /// The object is being destroyed; its registration is dropped
    Dispose
}

/// A uniform grid of chunks over a bounded 2D area
///
/// Each chunk lists the objects overlapping it, and a membership cache remembers
/// which chunks every registered object occupies so that removal touches only
/// those chunks.
///
/// `ID` is the object handle type and `S` the scalar type of positions.
pub struct SpatialGrid<ID, S = f32>
where
    ID: ObjectID,
    S: BaseFloat
{
    layout: ChunkLayout<S>,
    bounds: Point2<S>,
    chunks: Vec<Chunk<ID>>,
    cache: FxHashMap<ID, Membership>,
    objects: usize,
    collisions: Vec<(ID, ID)>
}

impl<ID, S> SpatialGrid<ID, S>
where
    ID: ObjectID,
    S: BaseFloat
{
    /// Create an empty grid covering `[0, bounds.x) x [0, bounds.y)`
    pub fn new(chunk_size: S, bounds: Point2<S>) -> Result<Self, GridError> {
        SpatialGridBuilder::new()
            .with_chunk_size(chunk_size)
            .with_bounds(bounds)
            .build()
    }

    pub fn chunk_size(&self) -> S {
        self.layout.chunk_size()
    }

    pub fn bounds(&self) -> Point2<S> {
        self.bounds
    }

    pub fn chunks_x(&self) -> usize {
        self.layout.chunks_x()
    }

    pub fn chunks_y(&self) -> usize {
        self.layout.chunks_y()
    }

    /// Running tally of `add_object` calls minus `remove_object` calls
    ///
    /// Every add increments and every remove decrements, whether or not any
    /// chunk membership changed, so this is not an occupancy count. It never
    /// drops below zero. See `len` for the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Rebuild the grid for new bounds, discarding every registration
    ///
    /// The grid is left unchanged if `bounds` is invalid.
    pub fn resize(&mut self, bounds: Point2<S>) -> Result<(), GridError> {
        let layout = ChunkLayout::new(self.layout.chunk_size(), bounds)?;
        let chunks = allocate_chunks(layout, bounds)?;

        self.clear();
        self.layout = layout;
        self.bounds = bounds;
        self.chunks = chunks;

        debug!("resized grid to {}x{} chunks", layout.chunks_x(), layout.chunks_y());
        Ok(())
    }

    /// Empty every chunk and forget every registration
    pub fn clear(&mut self) {
        for chunk in self.chunks.iter_mut() {
            chunk.clear();
        }
        self.cache.clear();
        self.collisions.clear();
        self.objects = 0;
    }

    /// Snap a position to the coordinate of the chunk containing it
    ///
    /// The result may lie outside the grid.
    pub fn align_point_to_chunk_coord(&self, point: Point2<S>) -> Point2<S> {
        self.layout.align(point)
    }

    /// Flat index of the chunk containing `point`, or `None` outside the grid
    pub fn chunk_index(&self, point: Point2<S>) -> Option<usize> {
        self.layout.index_of(point)
    }

    /// Objects in the chunk containing `point`, or `None` outside the grid
    pub fn chunk(&self, point: Point2<S>) -> Option<&[ID]> {
        self.chunk_index(point).map(|index| self.chunks[index].as_slice())
    }

    pub fn chunk_at(&self, coord: ChunkCoord) -> Option<&[ID]> {
        self.layout.index(coord).map(|index| self.chunks[index].as_slice())
    }

    /// Iterate over all non-empty chunks
    ///
    /// This is primarily intended for visualization + debugging
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (ChunkCoord, &'a [ID])> + 'a {
        let layout = self.layout;
        self.chunks.iter()
            .enumerate()
            .filter(|(_, chunk)| !chunk.is_empty())
            .map(move |(index, chunk)| (layout.coord_of(index), chunk.as_slice()))
    }

    /// True if the object is registered, even if it currently occupies no chunks
    pub fn has_object<O>(&self, object: &O) -> bool
    where
        O: ManagedObject<S, Handle = ID> + ?Sized
    {
        self.cache.contains_key(&object.handle())
    }

    /// Chunks the object was last inserted into, or `None` if it is not registered
    pub fn occupied_chunks<'a, O>(&'a self, object: &O) -> Option<impl Iterator<Item = ChunkCoord> + 'a>
    where
        O: ManagedObject<S, Handle = ID> + ?Sized
    {
        let layout = self.layout;
        self.cache.get(&object.handle())
            .map(move |membership| membership.iter().map(move |&index| layout.coord_of(index)))
    }

    /// Register an object in every chunk its bounding box samples
    ///
    /// The box is sampled in steps of `ceil(size / chunk_size)` along each axis.
    /// Once that step exceeds the chunk size, chunks in the interior of the box
    /// may be skipped. Samples outside the grid are ignored; an object entirely
    /// outside is still registered, with no chunks.
    pub fn add_object<O>(&mut self, object: &O)
    where
        O: ManagedObject<S, Handle = ID> + ?Sized
    {
        let id = object.handle();
        let position = object.position();
        let size = object.size();
        let end = position + size;

        let chunk_size = self.layout.chunk_size();
        let step = (size / chunk_size).ceil().map(|step| step.max(S::one()));

        // reuse the cached allocation; a live entry means the object was never removed
        let cached = self.cache.remove(&id);
        if step.x() > chunk_size || step.y() > chunk_size {
            if cached.is_none() {
                warn!("object {:?} of size {:?} is sampled in steps of {:?}; interior chunks may be missed",
                    id, size, step);
            } else {
                debug!("object {:?} still sampled in steps of {:?}", id, step);
            }
        }

        let mut inserted = cached.unwrap_or_default();
        if !inserted.is_empty() {
            debug!("object {:?} added while still registered; dropping previous chunks", id);
            Self::unlink(&mut self.chunks, id, &inserted);
            inserted.clear();
        }

        let mut x = position.x();
        while x < end.x() {
            let mut y = position.y();
            while y < end.y() {
                if let Some(index) = self.layout.index_of(Point2::new(x, y)) {
                    let chunk = &mut self.chunks[index];
                    if !chunk.contains(&id) {
                        chunk.push(id);
                        inserted.push(index);
                    }
                }

                let next = y + step.y();
                if next <= y {
                    break;
                }
                y = next;
            }

            let next = x + step.x();
            if next <= x {
                break;
            }
            x = next;
        }

        if inserted.is_empty() && log_enabled!(log::Level::Debug) {
            debug!("object {:?} at {:?} occupies no chunks", id, position);
        }

        self.cache.insert(id, inserted);
        self.objects += 1;
    }

    /// Unregister an object from all of its chunks
    ///
    /// `Disposition::Reinsert` keeps the (now empty) registration for a
    /// following `add_object`; `Disposition::Dispose` drops it. Removing an
    /// unregistered object changes nothing but `object_count`.
    pub fn remove_object<O>(&mut self, object: &O, disposition: Disposition)
    where
        O: ManagedObject<S, Handle = ID> + ?Sized
    {
        let id = object.handle();
        match disposition {
            Disposition::Reinsert => {
                if let Some(membership) = self.cache.get_mut(&id) {
                    Self::unlink(&mut self.chunks, id, membership);
                    membership.clear();
                }
            },
            Disposition::Dispose => {
                if let Some(membership) = self.cache.remove(&id) {
                    Self::unlink(&mut self.chunks, id, &membership);
                }
            }
        }
        self.objects = self.objects.saturating_sub(1);
    }

    /// Recompute an object's chunks from its current position and size
    pub fn move_object<O>(&mut self, object: &O)
    where
        O: ManagedObject<S, Handle = ID> + ?Sized
    {
        self.remove_object(object, Disposition::Reinsert);
        self.add_object(object);
    }

    /// Every other object sharing a chunk with one of the object's probe points
    ///
    /// Each neighbor is returned once, in the order it was first found; the
    /// object itself is never returned. Probe points outside the grid are
    /// skipped.
    pub fn objects_in_area<O>(&self, object: &O) -> Result<Vec<ID>, GridError>
    where
        O: ManagedObject<S, Handle = ID> + ?Sized
    {
        let id = object.handle();
        let mut probes = 0usize;
        let mut visited: SmallVec<[usize; 4]> = SmallVec::new();
        let mut combined: FxHashSet<ID> = FxHashSet::default();
        let mut found = Vec::new();

        for point in object.vertices() {
            probes += 1;

            let index = match self.layout.index_of(point) {
                Some(index) => index,
                None => continue
            };
            if visited.contains(&index) {
                continue;
            }
            visited.push(index);

            for &id_ in self.chunks[index].iter() {
                if id_ != id && combined.insert(id_) {
                    found.push(id_);
                }
            }
        }

        if probes == 0 {
            return Err(GridError::NoProbePoints);
        }

        Ok(found)
    }

    /// Detects candidate pairs between all objects in the grid
    ///
    /// Pairs are ordered `(lesser, greater)`, sorted, and unique.
    pub fn scan<'a>(&'a mut self)
        -> &'a Vec<(ID, ID)>
    {
        self.scan_filtered(|_, _| true)
    }

    /// Detects candidate pairs between all objects in the grid, returning only those which pass a user-specified test
    ///
    /// Pairs are filtered prior to duplicate removal, so `filter` may see the
    /// same pair once for every chunk the two objects share.
    pub fn scan_filtered<'a, F>(&'a mut self, mut filter: F)
        -> &'a Vec<(ID, ID)>
    where
        F: FnMut(ID, ID) -> bool
    {
        self.collisions.clear();

        for chunk in self.chunks.iter() {
            for (i, &lhs) in chunk.iter().enumerate() {
                for &rhs in chunk[i + 1..].iter() {
                    let pair = if lhs < rhs { (lhs, rhs) } else { (rhs, lhs) };
                    if filter(pair.0, pair.1) {
                        self.collisions.push(pair);
                    }
                }
            }
        }

        self.collisions.sort_unstable();
        self.collisions.dedup();

        &self.collisions
    }

    fn unlink(chunks: &mut [Chunk<ID>], id: ID, membership: &[usize]) {
        for &index in membership {
            let chunk = &mut chunks[index];
            if let Some(position) = chunk.iter().position(|&id_| id_ == id) {
                chunk.remove(position);
            }
        }
    }
}

/// One empty chunk per grid cell, failing instead of aborting when the grid cannot be allocated
fn allocate_chunks<ID, S>(layout: ChunkLayout<S>, bounds: Point2<S>) -> Result<Vec<Chunk<ID>>, GridError>
where
    ID: ObjectID,
    S: BaseFloat
{
    let mut chunks = Vec::new();
    if chunks.try_reserve_exact(layout.len()).is_err() {
        warn!("cannot allocate {}x{} chunks", layout.chunks_x(), layout.chunks_y());
        return Err(GridError::InvalidBounds{
            x: to_f64(bounds.x()),
            y: to_f64(bounds.y())
        });
    }
    chunks.extend((0..layout.len()).map(|_| Chunk::new()));
    Ok(chunks)
}

/// A builder for `SpatialGrid`s
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialGridBuilder<S> {
    chunk_size: S,
    bounds: Point2<S>,
    object_capacity: Option<usize>,
    collision_capacity: Option<usize>
}

impl<S> Default for SpatialGridBuilder<S>
where
    S: BaseFloat
{
    fn default() -> Self {
        Self{
            chunk_size: S::one(),
            bounds: Point2::new(S::zero(), S::zero()),
            object_capacity: None,
            collision_capacity: None
        }
    }
}

impl<S> SpatialGridBuilder<S>
where
    S: BaseFloat
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_size(&mut self, chunk_size: S) -> &mut Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_bounds(&mut self, bounds: Point2<S>) -> &mut Self {
        self.bounds = bounds;
        self
    }

    /// Reserve membership cache space for this many objects
    pub fn with_object_capacity(&mut self, capacity: usize) -> &mut Self {
        self.object_capacity = Some(capacity);
        self
    }

    pub fn with_collision_capacity(&mut self, capacity: usize) -> &mut Self {
        self.collision_capacity = Some(capacity);
        self
    }

    pub fn build<ID>(&self) -> Result<SpatialGrid<ID, S>, GridError>
    where
        ID: ObjectID
    {
        let layout = ChunkLayout::new(self.chunk_size, self.bounds)?;

        Ok(SpatialGrid::<ID, S>{
            layout,
            bounds: self.bounds,
            chunks: allocate_chunks(layout, self.bounds)?,
            cache: match self.object_capacity {
                    Some(capacity) => FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                    None => FxHashMap::default()
                },
            objects: 0,
            collisions: match self.collision_capacity {
                    Some(capacity) => Vec::with_capacity(capacity),
                    None => Vec::new()
                }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::BoxObject;

    use std::sync::{Mutex, Once};

    type Object = BoxObject<u32, f32>;

    fn grid() -> SpatialGrid<u32, f32> {
        SpatialGrid::new(10f32, Point2::new(100f32, 100f32)).unwrap()
    }

    fn object(id: u32, x: f32, y: f32, w: f32, h: f32) -> Object {
        BoxObject::new(id, Point2::new(x, y), Point2::new(w, h))
    }

    fn occupied(grid: &SpatialGrid<u32, f32>, object: &Object) -> Vec<ChunkCoord> {
        let mut coords: Vec<ChunkCoord> = grid.occupied_chunks(object)
            .map(|coords| coords.collect())
            .unwrap_or_default();
        coords.sort();
        coords
    }

    /// Collects warnings so tests can count them
    struct WarningLog;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static WARNING_LOG: WarningLog = WarningLog;
    static INSTALL: Once = Once::new();

    impl log::Log for WarningLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut warnings) = WARNINGS.lock() {
                    warnings.push(format!("{}", record.args()));
                }
            }
        }

        fn flush(&self) {}
    }

    fn warnings_about(prefix: &str) -> usize {
        INSTALL.call_once(|| {
            if log::set_logger(&WARNING_LOG).is_ok() {
                log::set_max_level(log::LevelFilter::Warn);
            }
        });
        WARNINGS.lock().unwrap().iter().filter(|message| message.starts_with(prefix)).count()
    }

    /// An object without probe points
    struct Hollow;

    impl ManagedObject<f32> for Hollow {
        type Handle = u32;
        type Vertices = Vec<Point2<f32>>;

        fn handle(&self) -> u32 { 99 }
        fn position(&self) -> Point2<f32> { Point2::new(0f32, 0f32) }
        fn size(&self) -> Point2<f32> { Point2::new(1f32, 1f32) }
        fn vertices(&self) -> Vec<Point2<f32>> { Vec::new() }
    }

    #[test]
    fn move_into_neighborhood() {
        let mut grid = grid();
        assert_eq!((grid.chunks_x(), grid.chunks_y()), (10, 10));

        let mut a = object(0, 0f32, 0f32, 5f32, 5f32);
        let b = object(1, 50f32, 50f32, 5f32, 5f32);
        grid.add_object(&a);
        grid.add_object(&b);
        assert_eq!(occupied(&grid, &a), vec![ChunkCoord::new(0, 0)]);
        assert_eq!(occupied(&grid, &b), vec![ChunkCoord::new(5, 5)]);
        assert_eq!(grid.objects_in_area(&a), Ok(vec![]));

        a.set_position(Point2::new(50f32, 52f32));
        grid.move_object(&a);
        assert_eq!(grid.objects_in_area(&a), Ok(vec![1]));
        assert_eq!(grid.objects_in_area(&b), Ok(vec![0]));
        assert_eq!(grid.chunk(Point2::new(0f32, 0f32)), Some(&[][..]));
    }

    #[test]
    fn spanning_object_is_stored_once_per_chunk() {
        let mut grid = grid();
        let wide = object(3, 5f32, 5f32, 10f32, 10f32);
        grid.add_object(&wide);
        assert_eq!(occupied(&grid, &wide), vec![
            ChunkCoord::new(0, 0),
            ChunkCoord::new(0, 1),
            ChunkCoord::new(1, 0),
            ChunkCoord::new(1, 1)]);
        for (_, chunk) in grid.iter() {
            assert_eq!(chunk, &[3]);
        }

        grid.move_object(&wide);
        grid.move_object(&wide);
        assert_eq!(grid.iter().count(), 4);
        for (_, chunk) in grid.iter() {
            assert_eq!(chunk, &[3]);
        }
    }

    #[test]
    fn neighbors_are_unique() {
        let mut grid = grid();
        let a = object(0, 5f32, 5f32, 10f32, 10f32);
        let b = object(1, 8f32, 8f32, 10f32, 10f32);
        grid.add_object(&a);
        grid.add_object(&b);
        assert_eq!(grid.objects_in_area(&a), Ok(vec![1]));
        assert_eq!(grid.objects_in_area(&b), Ok(vec![0]));
    }

    #[test]
    fn dispose() {
        let mut grid = grid();
        let a = object(0, 5f32, 5f32, 10f32, 10f32);
        grid.add_object(&a);
        grid.remove_object(&a, Disposition::Dispose);
        assert!(!grid.has_object(&a));
        assert!(grid.occupied_chunks(&a).is_none());
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.object_count(), 0);
    }

    #[test]
    fn reinsert_keeps_registration() {
        let mut grid = grid();
        let a = object(0, 5f32, 5f32, 1f32, 1f32);
        grid.add_object(&a);
        grid.remove_object(&a, Disposition::Reinsert);
        assert!(grid.has_object(&a));
        assert_eq!(occupied(&grid, &a), vec![]);
        assert_eq!(grid.iter().count(), 0);

        grid.add_object(&a);
        assert_eq!(occupied(&grid, &a), vec![ChunkCoord::new(0, 0)]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.object_count(), 1);
    }

    #[test]
    fn readding_registered_object_drops_old_chunks() {
        let mut grid = grid();
        let mut a = object(0, 5f32, 5f32, 1f32, 1f32);
        grid.add_object(&a);
        a.set_position(Point2::new(75f32, 75f32));
        grid.add_object(&a);
        assert_eq!(grid.chunk(Point2::new(5f32, 5f32)), Some(&[][..]));
        assert_eq!(grid.chunk(Point2::new(75f32, 75f32)), Some(&[0][..]));
        assert_eq!(occupied(&grid, &a), vec![ChunkCoord::new(7, 7)]);
    }

    #[test]
    fn object_count_tracks_calls() {
        let mut grid = grid();
        let inside = object(0, 5f32, 5f32, 1f32, 1f32);
        let outside = object(1, -50f32, -50f32, 1f32, 1f32);
        grid.add_object(&inside);
        grid.add_object(&outside);
        assert!(grid.has_object(&outside));
        assert_eq!(occupied(&grid, &outside), vec![]);
        assert_eq!(grid.object_count(), 2);
        assert_eq!(grid.len(), 2);

        let stranger = object(2, 0f32, 0f32, 1f32, 1f32);
        grid.remove_object(&stranger, Disposition::Dispose);
        assert_eq!(grid.object_count(), 1);
        assert_eq!(grid.len(), 2);

        grid.remove_object(&inside, Disposition::Dispose);
        grid.remove_object(&outside, Disposition::Dispose);
        grid.remove_object(&outside, Disposition::Dispose);
        assert_eq!(grid.object_count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn zero_size_object_occupies_nothing() {
        let mut grid = grid();
        let point = object(0, 5f32, 5f32, 0f32, 0f32);
        grid.add_object(&point);
        assert!(grid.has_object(&point));
        assert_eq!(occupied(&grid, &point), vec![]);
    }

    #[test]
    fn resize_discards_registrations() {
        let mut grid = grid();
        let a = object(0, 5f32, 5f32, 1f32, 1f32);
        grid.add_object(&a);
        grid.resize(Point2::new(45f32, 20f32)).unwrap();
        assert!(!grid.has_object(&a));
        assert_eq!((grid.chunks_x(), grid.chunks_y()), (5, 2));
        assert_eq!(grid.bounds(), Point2::new(45f32, 20f32));
        assert_eq!(grid.object_count(), 0);
        assert_eq!(grid.chunk(Point2::new(49f32, 19f32)), Some(&[][..]));
        assert_eq!(grid.chunk(Point2::new(50f32, 19f32)), None);
    }

    #[test]
    fn invalid_resize_keeps_grid() {
        let mut grid = grid();
        let a = object(0, 5f32, 5f32, 1f32, 1f32);
        grid.add_object(&a);
        assert!(grid.resize(Point2::new(-1f32, 10f32)).is_err());
        assert!(grid.has_object(&a));
        assert_eq!(grid.chunks_x(), 10);
    }

    #[test]
    fn clear_keeps_layout() {
        let mut grid = grid();
        let a = object(0, 5f32, 5f32, 1f32, 1f32);
        grid.add_object(&a);
        grid.clear();
        assert!(!grid.has_object(&a));
        assert_eq!(grid.object_count(), 0);
        assert_eq!(grid.iter().count(), 0);
        assert_eq!((grid.chunks_x(), grid.chunks_y()), (10, 10));
        assert_eq!(grid.chunk_size(), 10f32);

        grid.add_object(&a);
        assert_eq!(occupied(&grid, &a), vec![ChunkCoord::new(0, 0)]);
    }

    #[test]
    fn far_edge_has_no_chunk() {
        let grid = grid();
        assert_eq!(grid.chunk(Point2::new(100f32, 50f32)), None);
        assert_eq!(grid.chunk_index(Point2::new(50f32, 100f32)), None);
        assert_eq!(grid.chunk_index(Point2::new(99f32, 99f32)), Some(99));
        assert_eq!(grid.align_point_to_chunk_coord(Point2::new(100f32, -1f32)), Point2::new(10f32, -1f32));
        assert_eq!(grid.chunk_at(ChunkCoord::new(10, 0)), None);
    }

    #[test]
    fn query_requires_probe_points() {
        let grid = grid();
        assert_eq!(grid.objects_in_area(&Hollow), Err(GridError::NoProbePoints));
    }

    #[test]
    fn query_outside_grid_is_empty() {
        let mut grid = grid();
        grid.add_object(&object(0, 0f32, 0f32, 5f32, 5f32));
        let far = object(1, 500f32, 500f32, 5f32, 5f32);
        assert_eq!(grid.objects_in_area(&far), Ok(vec![]));
    }

    #[test]
    fn scan_pairs() {
        let mut grid = grid();
        grid.add_object(&object(2, 5f32, 5f32, 10f32, 10f32));
        grid.add_object(&object(0, 8f32, 8f32, 10f32, 10f32));
        grid.add_object(&object(1, 12f32, 12f32, 1f32, 1f32));
        grid.add_object(&object(3, 80f32, 80f32, 1f32, 1f32));
        assert_eq!(grid.scan(), &vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(grid.scan_filtered(|lhs, _| lhs != 0), &vec![(1, 2)]);
    }

    #[test]
    fn builder_validates() {
        assert!(SpatialGrid::<u32, f32>::new(0f32, Point2::new(10f32, 10f32)).is_err());
        assert!(SpatialGrid::<u32, f32>::new(-2f32, Point2::new(10f32, 10f32)).is_err());

        let grid = SpatialGridBuilder::new()
            .with_chunk_size(4f64)
            .with_bounds(Point2::new(10f64, 3f64))
            .with_object_capacity(16)
            .with_collision_capacity(16)
            .build::<u64>()
            .unwrap();
        assert_eq!((grid.chunks_x(), grid.chunks_y()), (3, 1));
        assert!(grid.is_empty());
    }

    #[test]
    fn oversized_bounds_are_rejected() {
        let bounds = Point2::new(4e9f64, 4e9f64);
        assert_eq!(
            SpatialGrid::<u32, f64>::new(1f64, bounds).err(),
            Some(GridError::InvalidBounds{x: 4e9f64, y: 4e9f64}));

        let mut grid = SpatialGrid::<u32, f64>::new(10f64, Point2::new(100f64, 100f64)).unwrap();
        let a = BoxObject::new(0u32, Point2::new(5f64, 5f64), Point2::new(1f64, 1f64));
        grid.add_object(&a);
        assert!(grid.resize(Point2::new(4e10f64, 4e10f64)).is_err());
        assert!(grid.has_object(&a));
        assert_eq!((grid.chunks_x(), grid.chunks_y()), (10, 10));
        assert_eq!(grid.chunk(Point2::new(5f64, 5f64)), Some(&[0][..]));
    }

    #[test]
    fn coarse_sampling_warns_once_per_registration() {
        let before = warnings_about("object 4242 ");

        let mut grid = SpatialGrid::<u32, f32>::new(2f32, Point2::new(20f32, 20f32)).unwrap();
        let wide = object(4242, 0f32, 0f32, 9f32, 1f32);
        grid.add_object(&wide);
        for _ in 0..3 {
            grid.move_object(&wide);
        }
        assert_eq!(warnings_about("object 4242 "), before + 1);

        grid.remove_object(&wide, Disposition::Dispose);
        grid.add_object(&wide);
        assert_eq!(warnings_about("object 4242 "), before + 2);
    }
}
