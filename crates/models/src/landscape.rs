//! Multi-plant landscape model with a shared pollinator pool.
//!
//! State is a matrix of per-plant `(Y, B)` proportions (see [`Proportions`]).
//! Every evaluation runs in two phases: first the pollinator [`Allocation`] is
//! computed from the whole landscape, then each plant's derivative is computed
//! from its own share `P_i`:
//!
//! ```text
//! Λ_i   = P_i / (L_0_i + P_i)
//! N_i   = 1 - Y_i - B_i
//! dY/dt = transfer_y * N_i - m_i*Y_i
//! dB/dt = transfer_b * N_i - m_i*B_i
//! ```
//!
//! Because `P_i` depends on every plant's visited share, a plant's derivative
//! depends on the live state of the whole landscape.

use std::convert::Infallible;

use pollen_core::Model;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DimensionError, Proportions, Sample,
    allocation::{Allocation, Competition},
    dynamics::Rates,
    pollination::{Dispersal, pressure},
    proportions::ProportionRates,
};

/// Biological constants of one plant in a landscape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plant {
    /// Mortality rate `m`.
    pub m: f64,
    /// Pollination-pressure half saturation `L_0`.
    pub l_0: f64,
    pub dispersal: Dispersal,
}

/// Per-plant parameters given column by column, one entry per plant.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlantColumns {
    pub m: Vec<f64>,
    pub d_yp: Vec<f64>,
    pub d_b0: Vec<f64>,
    pub d_bp: Vec<f64>,
    pub g_yp: Vec<f64>,
    pub g_b0: Vec<f64>,
    pub g_bp: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "L_0"))]
    pub l_0: Vec<f64>,
}

impl PlantColumns {
    /// Checks that every column has one entry per plant, as set by `m`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] naming the first column whose
    /// length differs from `m`.
    pub fn validate(&self) -> Result<usize, DimensionError> {
        let n_plants = self.m.len();
        let columns = [
            ("d_yp", &self.d_yp),
            ("d_b0", &self.d_b0),
            ("d_bp", &self.d_bp),
            ("g_yp", &self.g_yp),
            ("g_b0", &self.g_b0),
            ("g_bp", &self.g_bp),
            ("L_0", &self.l_0),
        ];
        for (field, column) in columns {
            DimensionError::check(field, n_plants, column.len())?;
        }
        Ok(n_plants)
    }
}

/// Parameters of a whole landscape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "LandscapeConfig", into = "LandscapeConfig")
)]
pub struct LandscapeParams {
    plants: Vec<Plant>,
    competition: Competition,
}

impl LandscapeParams {
    #[must_use]
    pub fn new(plants: Vec<Plant>, competition: Competition) -> Self {
        Self {
            plants,
            competition,
        }
    }

    /// Builds parameters from per-plant columns.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if any column's length differs
    /// from the length of `m`.
    pub fn from_columns(
        columns: &PlantColumns,
        competition: Competition,
    ) -> Result<Self, DimensionError> {
        let n_plants = columns.validate()?;

        let plants = (0..n_plants)
            .map(|i| Plant {
                m: columns.m[i],
                l_0: columns.l_0[i],
                dispersal: Dispersal {
                    d_yp: columns.d_yp[i],
                    d_b0: columns.d_b0[i],
                    d_bp: columns.d_bp[i],
                    g_yp: columns.g_yp[i],
                    g_b0: columns.g_b0[i],
                    g_bp: columns.g_bp[i],
                },
            })
            .collect();

        Ok(Self::new(plants, competition))
    }

    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    #[must_use]
    pub fn competition(&self) -> &Competition {
        &self.competition
    }

    /// Per-plant parameters in column form.
    #[must_use]
    pub fn columns(&self) -> PlantColumns {
        let column = |f: fn(&Plant) -> f64| -> Vec<f64> { self.plants.iter().map(f).collect() };
        PlantColumns {
            m: column(|p| p.m),
            d_yp: column(|p| p.dispersal.d_yp),
            d_b0: column(|p| p.dispersal.d_b0),
            d_bp: column(|p| p.dispersal.d_bp),
            g_yp: column(|p| p.dispersal.g_yp),
            g_b0: column(|p| p.dispersal.g_b0),
            g_bp: column(|p| p.dispersal.g_bp),
            l_0: column(|p| p.l_0),
        }
    }
}

/// Serialized form of [`LandscapeParams`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandscapeConfig {
    pub plants: PlantColumns,
    pub competition: Competition,
}

impl TryFrom<LandscapeConfig> for LandscapeParams {
    type Error = DimensionError;

    fn try_from(config: LandscapeConfig) -> Result<Self, Self::Error> {
        Self::from_columns(&config.plants, config.competition)
    }
}

impl From<LandscapeParams> for LandscapeConfig {
    fn from(params: LandscapeParams) -> Self {
        Self {
            plants: params.columns(),
            competition: params.competition,
        }
    }
}

/// Landscape flower dynamics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Landscape {
    params: LandscapeParams,
}

/// Output of a [`Landscape`] evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct LandscapeRates {
    /// Time derivative of the proportions.
    pub derivative: ProportionRates,
    /// Pollinator shares used for this evaluation.
    pub allocation: Allocation,
}

impl Landscape {
    #[must_use]
    pub fn new(params: LandscapeParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &LandscapeParams {
        &self.params
    }

    #[must_use]
    pub fn n_plants(&self) -> usize {
        self.params.plants.len()
    }

    /// Builds an initial state, checking both columns against the plant count.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] naming `Y0` or `B0` if either has
    /// the wrong length.
    pub fn initial_state(&self, y0: &[f64], b0: &[f64]) -> Result<Proportions, DimensionError> {
        DimensionError::check("Y0", self.n_plants(), y0.len())?;
        DimensionError::check("B0", self.n_plants(), b0.len())?;
        Proportions::from_columns(y0, b0)
    }

    /// Checks that `state` has one row per plant.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if the row count differs.
    pub fn check_state(&self, state: &Proportions) -> Result<(), DimensionError> {
        DimensionError::check("state", self.n_plants(), state.n_plants())
    }

    /// Pollinator shares for the given proportions.
    #[must_use]
    pub fn allocate(&self, state: &Proportions) -> Allocation {
        self.params.competition.allocate(state)
    }

    /// Evaluates the dynamics for every plant.
    ///
    /// `state` must have one row per plant; extra rows get a zero derivative.
    #[must_use]
    pub fn rates(&self, state: &Proportions) -> LandscapeRates {
        let allocation = self.allocate(state);
        let mut derivative = ProportionRates::zeros(state.n_plants());

        for (i, (plant, &share)) in self
            .params
            .plants
            .iter()
            .zip(allocation.weights())
            .enumerate()
        {
            let (y, b, n) = (state.y(i), state.b(i), state.n(i));

            let pressure = pressure(share, plant.l_0);
            let transfer = plant.dispersal.transfer(pressure, y, b);

            derivative.set(
                i,
                transfer.y * n - plant.m * y,
                transfer.b * n - plant.m * b,
            );
        }

        LandscapeRates {
            derivative,
            allocation,
        }
    }
}

impl Model for Landscape {
    type Input = Sample<Proportions>;
    type Output = LandscapeRates;
    type Error = Infallible;

    fn call(&self, input: &Sample<Proportions>) -> Result<LandscapeRates, Infallible> {
        Ok(self.rates(&input.state))
    }
}

impl Rates for LandscapeRates {
    type State = Proportions;

    fn derivative(&self) -> ProportionRates {
        self.derivative.clone()
    }
}
