use crate::{vector::Vector, Result, VectorError};
use ndarray::Array1;

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(v1.minus(v2)?.magnitude())
}

/// Generates `num` vectors of dimension `dim` with coordinates drawn
/// uniformly from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    use rand::Rng;
    if dim == 0 {
        return Err(VectorError::InvalidArgument(
            "cannot generate vectors of dimension 0".to_string(),
        ));
    }
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            Vector::try_from(Array1::from_vec(
                (0..dim).map(|_| rng.gen_range(-1.0_f64..1.0)).collect(),
            ))
        })
        .collect()
}
