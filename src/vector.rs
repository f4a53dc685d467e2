use crate::{Result, VectorError};
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul, Neg};

/// Default tolerance for the zero, orthogonality and parallelism checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable Euclidean vector of dimension one or more.
///
/// Every operation that yields a vector returns a new instance; the stored
/// coordinates are never touched after construction. Equality is exact,
/// coordinate by coordinate, and vectors of different dimension are unequal.
///
/// Serialized as a plain array of numbers. Arithmetic can overflow into
/// infinite coordinates, which `serde_json` writes as `null`; such output does
/// not deserialize back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Builds a vector from a non-empty sequence of finite coordinates.
    pub fn new(coordinates: impl Into<Vec<f64>>) -> Result<Self> {
        Self::try_from(Array1::from_vec(coordinates.into()))
    }

    /// Parses a JSON array of numbers, e.g. `[1.0, -2.5, 3]`.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| VectorError::InvalidArgument(e.to_string()))
    }

    // Results of arithmetic on valid vectors skip the finiteness check.
    fn from_data(data: Array1<f64>) -> Self {
        Self { data }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_data(&self.data + &other.data))
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self::from_data(&self.data - &other.data))
    }

    pub fn times_scalar(&self, scalar: f64) -> Vector {
        Self::from_data(&self.data * scalar)
    }

    fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()))
    }

    /// Euclidean norm.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring. The result overflows only when the norm itself exceeds
    /// `f64::MAX`, and subnormal inputs do not flush to zero.
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let scaled = &self.data / scale;
        scale * scaled.dot(&scaled).sqrt()
    }

    /// Unit vector pointing the same way as `self`.
    pub fn normalized(&self) -> Result<Vector> {
        let scale = self.max_abs();
        if scale == 0.0 {
            return Err(VectorError::DivisionByZero(
                "cannot normalize the zero vector".to_string(),
            ));
        }
        // |scaled| lies in [1, sqrt(dimension)], so its reciprocal is safe.
        let scaled = Self::from_data(&self.data / scale);
        Ok(scaled.times_scalar(1.0 / scaled.magnitude()))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.data.dot(&other.data))
    }

    /// Angle between `self` and `other`, in `[0, π]` radians or `[0, 180]`
    /// degrees.
    ///
    /// The cosine of two unit vectors can drift a few ulps outside `[-1, 1]`
    /// for (anti-)parallel inputs; it is clamped back before `acos`.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        self.check_dimension(other)?;
        let u1 = self.normalized()?;
        let u2 = other.normalized()?;
        let cosine = u1.dot(&u2)?;
        let clamped = cosine.clamp(-1.0, 1.0);
        if clamped != cosine {
            debug!("clamped cosine {} into [-1, 1] before acos", cosine);
        }

        let radians = clamped.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_within(other, DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_to_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_to_within(other, DEFAULT_TOLERANCE)
    }

    /// True when either vector is zero, or the two point in the same or
    /// opposite directions: `1 - |û·v̂| < tolerance`.
    ///
    /// Comparing the cosine rather than the angle keeps the check stable,
    /// since `acos` is ill-conditioned near ±1.
    pub fn is_parallel_to_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        self.check_dimension(other)?;
        let is_zero = |v: &Vector| v.magnitude() == 0.0 || v.is_zero_within(tolerance);
        if is_zero(self) || is_zero(other) {
            return Ok(true);
        }

        let cosine = self.normalized()?.dot(&other.normalized()?)?;
        Ok(1.0 - cosine.abs() < tolerance)
    }

    /// Projection of `self` onto the direction of `basis`.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector> {
        self.check_dimension(basis)?;
        let unit = basis.normalized()?;
        let weight = self.dot(&unit)?;
        Ok(unit.times_scalar(weight))
    }

    /// What remains of `self` after removing its projection onto `basis`.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.component_parallel_to(basis)?;
        self.minus(&projection)
    }

    /// Cross product. Two-dimensional operands are lifted into the `z = 0`
    /// plane first, so the result always has three coordinates.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for dimension in [self.dimension(), other.dimension()] {
            if dimension != 2 && dimension != 3 {
                return Err(VectorError::InvalidArgument(format!(
                    "cross product needs 2 or 3 dimensions, got {}",
                    dimension
                )));
            }
        }
        self.check_dimension(other)?;

        if self.dimension() == 2 {
            debug!("embedding 2-dimensional operands into 3 dimensions for cross product");
        }
        let [x1, y1, z1] = self.as_3d();
        let [x2, y2, z2] = other.as_3d();

        Ok(Self::from_data(Array1::from_vec(vec![
            y1 * z2 - z1 * y2,
            z1 * x2 - x1 * z2,
            x1 * y2 - y1 * x2,
        ])))
    }

    // Only called once the dimension is known to be 2 or 3.
    fn as_3d(&self) -> [f64; 3] {
        let z = if self.dimension() == 3 { self.data[2] } else { 0.0 };
        [self.data[0], self.data[1], z]
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(data: Array1<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(VectorError::InvalidArgument(
                "the coordinates must be nonempty".to_string(),
            ));
        }
        if let Some(position) = data.iter().position(|c| !c.is_finite()) {
            return Err(VectorError::InvalidArgument(format!(
                "coordinate {} is not a finite number: {}",
                position, data[position]
            )));
        }
        Ok(Self { data })
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::try_from(Array1::from_vec(coordinates))
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::try_from(coordinates.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Vec<f64> {
        vector.data.to_vec()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", c)?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.times_scalar(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.times_scalar(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_data(-&self.data)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}
