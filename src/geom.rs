// chunk-broadphase contributors, 20261019

use super::error::GridError;

use cgmath::{BaseFloat, InnerSpace};

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D coordinate or extent
///
/// `Point2` has value semantics: every operation returns a new point and leaves
/// its operands untouched. Components may only be replaced through the checked
/// setters, which reject NaN and infinities.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<S> {
    x: S,
    y: S
}

fn check_finite<S: BaseFloat>(axis: char, value: S) -> Result<S, GridError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GridError::NonFiniteComponent{
            axis,
            value: value.to_f64().unwrap_or(std::f64::NAN)
        })
    }
}

impl<S> Point2<S> {
    /// Construct a point without validating its components
    pub const fn new(x: S, y: S) -> Self {
        Self{x, y}
    }
}

impl<S> Point2<S>
where
    S: BaseFloat
{
    /// Construct a point, failing if either component is NaN or infinite
    pub fn try_new(x: S, y: S) -> Result<Self, GridError> {
        Ok(Self{
            x: check_finite('x', x)?,
            y: check_finite('y', y)?
        })
    }

    pub fn x(self) -> S {
        self.x
    }

    pub fn y(self) -> S {
        self.y
    }

    pub fn set_x(&mut self, x: S) -> Result<(), GridError> {
        self.x = check_finite('x', x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: S) -> Result<(), GridError> {
        self.y = check_finite('y', y)?;
        Ok(())
    }

    /// True if neither component is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(S) -> S
    {
        Self::new(f(self.x), f(self.y))
    }

    pub fn add_element_wise(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub_element_wise(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn mul_element_wise(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    pub fn div_element_wise(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    pub fn scale(self, scalar: S) -> Self {
        self.map(|value| value * scalar)
    }

    pub fn div_scalar(self, divisor: S) -> Self {
        self.map(|value| value / divisor)
    }

    /// Euclidean length of the vector from the origin to this point
    pub fn magnitude(self) -> S {
        cgmath::Vector2::from(self).magnitude()
    }

    pub fn floor(self) -> Self {
        self.map(S::floor)
    }

    pub fn ceil(self) -> Self {
        self.map(S::ceil)
    }
}

impl<S: BaseFloat> Add for Point2<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_element_wise(other)
    }
}

impl<S: BaseFloat> Sub for Point2<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.sub_element_wise(other)
    }
}

impl<S: BaseFloat> Mul for Point2<S> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.mul_element_wise(other)
    }
}

impl<S: BaseFloat> Div for Point2<S> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.div_element_wise(other)
    }
}

impl<S: BaseFloat> Mul<S> for Point2<S> {
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        self.scale(scalar)
    }
}

impl<S: BaseFloat> Div<S> for Point2<S> {
    type Output = Self;

    fn div(self, divisor: S) -> Self {
        self.div_scalar(divisor)
    }
}

impl<S: BaseFloat> Neg for Point2<S> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|value| -value)
    }
}

impl<S> From<cgmath::Point2<S>> for Point2<S> {
    fn from(point: cgmath::Point2<S>) -> Self {
        Self::new(point.x, point.y)
    }
}

impl<S> From<Point2<S>> for cgmath::Point2<S> {
    fn from(point: Point2<S>) -> Self {
        cgmath::Point2::new(point.x, point.y)
    }
}

impl<S> From<cgmath::Vector2<S>> for Point2<S> {
    fn from(vector: cgmath::Vector2<S>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl<S> From<Point2<S>> for cgmath::Vector2<S> {
    fn from(point: Point2<S>) -> Self {
        cgmath::Vector2::new(point.x, point.y)
    }
}
