//! Tabular output assembled from recorded trajectories.
//!
//! Each row carries the sampled state plus a pollination column `P` that is
//! recomputed from that state with the same algebra the dynamics use. For a
//! single plant `P` is the visitation rate; in a landscape it is the plant's
//! pollinator share.

use pollen_observers::Trajectory;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Flowers, Landscape, Proportions, SinglePlant, resource::Resource};

/// Column names of [`PlantRow`], in field order.
pub const PLANT_COLUMNS: [&str; 5] = ["t", "Y", "B", "N", "P"];

/// Column names of [`LandscapeRow`], in field order.
pub const LANDSCAPE_COLUMNS: [&str; 5] = ["t", "plant", "Y", "B", "P"];

/// One sample of a single-plant run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlantRow {
    pub t: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    pub n: f64,
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub p: f64,
}

/// One plant at one sample of a landscape run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LandscapeRow {
    pub t: f64,
    /// Zero-based plant index.
    pub plant: usize,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub p: f64,
}

/// One row per sample, in recorded order.
#[must_use]
pub fn single_plant<R: Resource>(
    model: &SinglePlant<R>,
    trajectory: &Trajectory<Flowers>,
) -> Vec<PlantRow> {
    trajectory
        .iter()
        .map(|(t, flowers)| PlantRow {
            t,
            y: flowers.y,
            b: flowers.b,
            n: flowers.n,
            p: model.visitation(flowers),
        })
        .collect()
}

/// One row per plant per sample, ordered by time and then by plant.
#[must_use]
pub fn landscape(model: &Landscape, trajectory: &Trajectory<Proportions>) -> Vec<LandscapeRow> {
    let mut rows = Vec::with_capacity(trajectory.len() * model.n_plants());

    for (t, state) in trajectory.iter() {
        let allocation = model.allocate(state);
        rows.extend(
            allocation
                .weights()
                .iter()
                .enumerate()
                .map(|(plant, &p)| LandscapeRow {
                    t,
                    plant,
                    y: state.y(plant),
                    b: state.b(plant),
                    p,
                }),
        );
    }

    rows
}
