//! Plant-pollinator flower dynamics for the Pollen framework.
//!
//! Flowers are tracked in three states: unvisited (`Y`), visited by a
//! pollinator (`B`), and non-colonized (`N`). Three models are provided, all
//! implementing [`Model`] with a [`Sample`] of their state as input and a
//! [`Rates`] output:
//!
//! - [`OnePlant`] — one plant, absolute flower counts, constant resource inflow
//! - [`OnePlantSeason`] — the same plant under a seasonal Weibull inflow pulse
//! - [`Landscape`] — many plants as `(Y, B)` proportions, competing for a
//!   shared pollinator pool through an [`Allocation`] recomputed at every
//!   evaluation
//!
//! [`simulate`] integrates any of them with the fixed-step solvers from
//! `pollen-solvers` and records a [`Trajectory`]. The [`table`] module turns a
//! trajectory into output rows, and [`scenario`] bundles a model, initial
//! state and horizon into one loadable run.
//!
//! ```
//! use pollen_models::{
//!     Flowers, Horizon, Method, OnePlant, SinglePlantParams, simulate,
//!     pollination::{Attraction, AttractionConfig, Dispersal},
//!     resource::Constant,
//! };
//!
//! let params = SinglePlantParams {
//!     m: 0.1,
//!     l_0: 1.0,
//!     dispersal: Dispersal {
//!         d_yp: 0.2,
//!         d_b0: 0.05,
//!         d_bp: 0.1,
//!         g_yp: 0.3,
//!         g_b0: 0.05,
//!         g_bp: 0.1,
//!     },
//!     attraction: Attraction::new(AttractionConfig {
//!         p_max: 5.0,
//!         q: 0.5,
//!         s_0: 1.0,
//!         h: 2.0,
//!         f_0: 1.0,
//!         f_tilde: 1.0,
//!         u: 2.0,
//!     }),
//! };
//! let plant = OnePlant::new(params, Constant(1.0));
//!
//! let horizon = Horizon::new(0.1, 1.0)?;
//! let trajectory = simulate(&plant, Flowers::new(1.0, 1.0, 1.0), &horizon, Method::Rk4)?;
//! assert_eq!(trajectory.len(), 11);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Model`]: pollen_core::Model

mod allocation;
mod dynamics;
mod error;
mod flowers;
mod landscape;
mod proportions;
mod sample;
mod simulate;
mod single;

pub mod pollination;
pub mod resource;
pub mod scenario;
pub mod table;

pub use allocation::{Allocation, Competition};
pub use dynamics::{Dynamics, Rates};
pub use error::DimensionError;
pub use flowers::{FlowerRates, Flowers};
pub use landscape::{
    Landscape, LandscapeConfig, LandscapeParams, LandscapeRates, Plant, PlantColumns,
};
pub use proportions::{ProportionColumns, ProportionRates, Proportions};
pub use sample::Sample;
pub use scenario::{Scenario, ScenarioError};
pub use simulate::simulate;
pub use single::{OnePlant, OnePlantSeason, PlantRates, SinglePlant, SinglePlantParams};

pub use pollen_observers::Trajectory;
pub use pollen_solvers::transient::{Horizon, HorizonError, Method};
