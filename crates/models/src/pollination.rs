//! Pollination-response algebra shared by every model variant.
//!
//! Three saturating responses drive the dynamics:
//!
//! 1. [`Attraction::visitation`] — pollinator visitation rate `P` at a single
//!    plant, from its flower total and visited share.
//! 2. [`pressure`] — pollination pressure `Λ`, a saturating function of
//!    visitation per flower (single plant) or allocation weight (landscape).
//! 3. [`Dispersal::transfer`] — per-flower rates at which non-colonized
//!    flowers become unvisited or visited, given `Λ`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Saturating pollination pressure: `rate / (half_saturation + rate)`.
///
/// `half_saturation` is the `L_0` parameter; pressure is `0.5` when `rate`
/// equals it and approaches `1` as `rate` grows.
#[must_use]
pub fn pressure(rate: f64, half_saturation: f64) -> f64 {
    rate / (half_saturation + rate)
}

/// Raw parameters of an [`Attraction`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttractionConfig {
    /// Maximum visitation rate `P_max`.
    pub p_max: f64,
    /// Weight `q` in `[0, 1]` given to palatability over background attraction.
    pub q: f64,
    /// Visited share at which palatability halves, `s_0`.
    pub s_0: f64,
    /// Hill exponent `h` of the palatability response.
    pub h: f64,
    /// Half-saturation `f_0` of the background attraction response.
    pub f_0: f64,
    /// Flower total `F̃` at which normalized density is one half.
    pub f_tilde: f64,
    /// Hill exponent `u` of the background attraction response.
    pub u: f64,
}

/// Pollinator visitation response of a single plant.
///
/// Visitation is a mix of two Hill-type responses:
///
/// ```text
/// phi = (F/(F+F̃))^u / (f_0^u + (F/(F+F̃))^u)     background attraction
/// psi = s_0^h / (s_0^h + (B/F)^h)                 palatability
/// P   = P_max * (q*psi + (1-q)*phi)
/// ```
///
/// `s_0^h` and `f_0^u` are computed once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "AttractionConfig", into = "AttractionConfig")
)]
pub struct Attraction {
    config: AttractionConfig,
    s_0_h: f64,
    f_0_u: f64,
}

impl Attraction {
    #[must_use]
    pub fn new(config: AttractionConfig) -> Self {
        Self {
            config,
            s_0_h: config.s_0.powf(config.h),
            f_0_u: config.f_0.powf(config.u),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AttractionConfig {
        &self.config
    }

    /// Visitation rate `P` for a plant with `total` flowers, `visited` of which
    /// have been visited.
    #[must_use]
    pub fn visitation(&self, total: f64, visited: f64) -> f64 {
        let AttractionConfig {
            p_max,
            q,
            h,
            f_tilde,
            u,
            ..
        } = self.config;

        let density = (total / (total + f_tilde)).powf(u);
        let phi = density / (self.f_0_u + density);
        let psi = self.s_0_h / (self.s_0_h + (visited / total).powf(h));

        p_max * (q * psi + (1.0 - q) * phi)
    }
}

impl From<AttractionConfig> for Attraction {
    fn from(config: AttractionConfig) -> Self {
        Self::new(config)
    }
}

impl From<Attraction> for AttractionConfig {
    fn from(attraction: Attraction) -> Self {
        attraction.config
    }
}

/// Colonization (`g_*`) and loss (`d_*`) coefficients of a plant.
///
/// Each rate is a baseline plus a term linear in pollination pressure `Λ`:
///
/// ```text
/// gamma_y = g_yp*Λ          gamma_b = g_b0 + g_bp*Λ
/// delta_y = d_yp*Λ          delta_b = d_b0 + d_bp*Λ
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dispersal {
    pub d_yp: f64,
    pub d_b0: f64,
    pub d_bp: f64,
    pub g_yp: f64,
    pub g_b0: f64,
    pub g_bp: f64,
}

/// Per-flower rates at which non-colonized flowers become unvisited (`y`) or
/// visited (`b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer {
    pub y: f64,
    pub b: f64,
}

impl Dispersal {
    /// Transfer rates under pressure `lambda`, given the unvisited and visited
    /// shares of the plant's flowers.
    #[must_use]
    pub fn transfer(&self, lambda: f64, unvisited: f64, visited: f64) -> Transfer {
        let gamma_y = self.g_yp * lambda;
        let gamma_b = self.g_b0 + self.g_bp * lambda;
        let delta_y = self.d_yp * lambda;
        let delta_b = self.d_b0 + self.d_bp * lambda;

        Transfer {
            y: delta_y * unvisited + gamma_y,
            b: delta_b * visited + gamma_b,
        }
    }
}
