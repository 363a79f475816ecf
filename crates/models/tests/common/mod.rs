#![allow(dead_code)]

use pollen_models::{
    Competition, Landscape, LandscapeParams, PlantColumns, SinglePlantParams,
    pollination::{Attraction, AttractionConfig, Dispersal},
};
use tracing_subscriber::EnvFilter;

/// Routes solver logs to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn dispersal() -> Dispersal {
    Dispersal {
        d_yp: 0.2,
        d_b0: 0.05,
        d_bp: 0.1,
        g_yp: 0.3,
        g_b0: 0.05,
        g_bp: 0.1,
    }
}

pub fn plant_params() -> SinglePlantParams {
    SinglePlantParams {
        m: 0.1,
        l_0: 1.0,
        dispersal: dispersal(),
        attraction: Attraction::new(AttractionConfig {
            p_max: 5.0,
            q: 0.5,
            s_0: 1.0,
            h: 2.0,
            f_0: 1.0,
            f_tilde: 1.0,
            u: 2.0,
        }),
    }
}

/// Columns for `n_plants` plants sharing the same constants.
pub fn uniform_columns(n_plants: usize) -> PlantColumns {
    let d = dispersal();
    PlantColumns {
        m: vec![0.1; n_plants],
        d_yp: vec![d.d_yp; n_plants],
        d_b0: vec![d.d_b0; n_plants],
        d_bp: vec![d.d_bp; n_plants],
        g_yp: vec![d.g_yp; n_plants],
        g_b0: vec![d.g_b0; n_plants],
        g_bp: vec![d.g_bp; n_plants],
        l_0: vec![1.0; n_plants],
    }
}

pub fn landscape(columns: &PlantColumns, u: f64, x: f64) -> Landscape {
    let params = LandscapeParams::from_columns(columns, Competition::new(u, x))
        .expect("columns should be consistent");
    Landscape::new(params)
}
