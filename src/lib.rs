// chunk-broadphase contributors, 20261019

//! A uniform chunk grid for 2D broadphase collision detection
//!
//! A [`SpatialGrid`] divides a bounded area into square chunks and remembers which
//! chunks each [`ManagedObject`] overlaps. Objects are added as they spawn, moved
//! once per step, and queried for neighbors before narrow-phase tests:
//!
//! ```
//! use chunk_broadphase::{BoxObject, Disposition, Point2, SpatialGrid};
//!
//! let mut grid = SpatialGrid::new(10f32, Point2::new(100f32, 100f32)).unwrap();
//! let mut a = BoxObject::new(0u32, Point2::new(0f32, 0f32), Point2::new(5f32, 5f32));
//! let b = BoxObject::new(1u32, Point2::new(50f32, 50f32), Point2::new(5f32, 5f32));
//! grid.add_object(&a);
//! grid.add_object(&b);
//! assert!(grid.objects_in_area(&a).unwrap().is_empty());
//!
//! a.set_position(Point2::new(50f32, 52f32));
//! grid.move_object(&a);
//! assert_eq!(grid.objects_in_area(&a).unwrap(), vec![1]);
//!
//! grid.remove_object(&a, Disposition::Dispose);
//! assert!(!grid.has_object(&a));
//! ```
//!
//! [`SpatialGrid`]: struct.SpatialGrid.html
//! [`ManagedObject`]: trait.ManagedObject.html

extern crate cgmath;
extern crate num_traits;
extern crate rustc_hash;
extern crate thiserror;

#[macro_use]
extern crate log;

#[macro_use]
extern crate smallvec;

mod error;
mod geom;
mod grid;
mod index;
mod object;
mod traits;

pub use error::GridError;
pub use geom::Point2;
pub use grid::{Disposition, SpatialGrid, SpatialGridBuilder};
pub use index::ChunkCoord;
pub use object::BoxObject;
pub use traits::{ManagedObject, ObjectID};
