//! Initial-state seed policies and random draws.

use magnon_core::Vector3;
use rand::Rng;

/// How a freshly allocated state array is populated.
///
/// The randomness source itself is supplied by the caller; these policies
/// only describe the distribution drawn from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Every site starts identical: spin `+1`, or orientation `+z`.
    Aligned,
    /// Independent uniform draws per site: ±1 with equal probability, or a
    /// uniformly distributed point on the unit sphere.
    Random,
}

/// Draw a uniformly distributed orientation on the unit sphere.
///
/// Inverse-CDF sphere point picking: `θ = 2πu` and `φ = arccos(2v − 1)`
/// give the azimuthal and polar angles of an unbiased unit vector.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let v = magnon_state::random_unit_vector(&mut rng);
/// assert!((v.norm() - 1.0).abs() < 1e-12);
/// ```
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    let theta = 2.0 * std::f64::consts::PI * rng.random::<f64>();
    let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
    let sin_phi = phi.sin();
    Vector3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), phi.cos())
}

/// Draw a uniform ±1 spin.
pub fn random_spin<R: Rng + ?Sized>(rng: &mut R) -> i8 {
    if rng.random::<bool>() {
        1
    } else {
        -1
    }
}
