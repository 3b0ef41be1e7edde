use nalgebra::Vector3;

/// Scalar triple product `(a × b) · c`, expanded component-wise.
#[inline(always)]
pub fn triple_product(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    (a.y * b.z - b.y * a.z) * c.x + (a.z * b.x - b.z * a.x) * c.y + (a.x * b.y - b.x * a.y) * c.z
}
