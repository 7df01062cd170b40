// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit a custom cfg flag for the projection word width.
//!
//! This enables `#[cfg(projection_word_128)]` instead of
//! `#[cfg(feature = "wide_projections")]` throughout the crate and its tests.

fn main() {
    println!("cargo:rustc-check-cfg=cfg(projection_word_128)");

    if std::env::var_os("CARGO_FEATURE_WIDE_PROJECTIONS").is_some() {
        println!("cargo:rustc-cfg=projection_word_128");
    }
}
