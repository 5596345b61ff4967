//! Test helpers: an `AppState` over the sample catalog in `data/`.

use std::path::PathBuf;

use fourc_core::Catalog;

use crate::app::AppState;

pub fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("data")
}

pub fn sample_app() -> AppState {
    let dir = sample_data_dir();
    let catalog = Catalog::load(&dir).unwrap();
    AppState::new(catalog, dir)
}
