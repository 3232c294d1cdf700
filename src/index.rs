// chunk-broadphase contributors, 20261019

use super::error::GridError;
use super::geom::Point2;

use cgmath::BaseFloat;
use num_traits::NumCast;

/// Integer coordinates of a chunk, counted from the grid origin
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChunkCoord {
    pub x: usize,
    pub y: usize
}

impl ChunkCoord {
    pub fn new(x: usize, y: usize) -> Self {
        Self{x, y}
    }
}

/// Maps continuous positions onto the chunks of a fixed-size grid
///
/// Chunks are stored row-major, so the flat index of `(x, y)` is
/// `y * chunks_x + x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ChunkLayout<S> {
    chunk_size: S,
    chunks_x: usize,
    chunks_y: usize
}

pub(crate) fn to_f64<S: BaseFloat>(value: S) -> f64 {
    value.to_f64().unwrap_or(std::f64::NAN)
}

impl<S> ChunkLayout<S>
where
    S: BaseFloat
{
    pub fn new(chunk_size: S, bounds: Point2<S>) -> Result<Self, GridError> {
        if !chunk_size.is_finite() || chunk_size <= S::zero() {
            return Err(GridError::InvalidChunkSize(to_f64(chunk_size)));
        }

        let invalid_bounds = || GridError::InvalidBounds{
            x: to_f64(bounds.x()),
            y: to_f64(bounds.y())
        };

        if !bounds.is_finite() || bounds.x() < S::zero() || bounds.y() < S::zero() {
            return Err(invalid_bounds());
        }

        let chunks = (bounds / chunk_size).ceil();
        let chunks_x: usize = NumCast::from(chunks.x()).ok_or_else(invalid_bounds)?;
        let chunks_y: usize = NumCast::from(chunks.y()).ok_or_else(invalid_bounds)?;
        chunks_x.checked_mul(chunks_y).ok_or_else(invalid_bounds)?;

        Ok(Self{chunk_size, chunks_x, chunks_y})
    }

    pub fn chunk_size(self) -> S {
        self.chunk_size
    }

    pub fn chunks_x(self) -> usize {
        self.chunks_x
    }

    pub fn chunks_y(self) -> usize {
        self.chunks_y
    }

    /// Total number of chunks
    pub fn len(self) -> usize {
        self.chunks_x * self.chunks_y
    }

    /// Snap a position to the (possibly out-of-range) chunk coordinate containing it
    pub fn align(self, point: Point2<S>) -> Point2<S> {
        (point / self.chunk_size).floor()
    }

    /// The chunk containing `point`, if it lies within the grid
    pub fn coord(self, point: Point2<S>) -> Option<ChunkCoord> {
        let aligned = self.align(point);
        if aligned.x() < S::zero() || aligned.y() < S::zero() {
            return None;
        }

        let x: usize = NumCast::from(aligned.x())?;
        let y: usize = NumCast::from(aligned.y())?;
        if x >= self.chunks_x || y >= self.chunks_y {
            return None;
        }

        Some(ChunkCoord::new(x, y))
    }

    pub fn index(self, coord: ChunkCoord) -> Option<usize> {
        if coord.x < self.chunks_x && coord.y < self.chunks_y {
            Some(coord.y * self.chunks_x + coord.x)
        } else {
            None
        }
    }

    pub fn index_of(self, point: Point2<S>) -> Option<usize> {
        self.coord(point).and_then(|coord| self.index(coord))
    }

    pub fn coord_of(self, index: usize) -> ChunkCoord {
        ChunkCoord::new(index % self.chunks_x, index / self.chunks_x)
    }
}
