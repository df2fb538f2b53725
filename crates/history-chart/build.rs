// File: crates/history-chart/build.rs
// Summary: Build script to link required Windows system libraries when Skia/ICU is in use.

fn main() {
    // Skia is only linked with the `raster` feature.
    if std::env::var_os("CARGO_FEATURE_RASTER").is_none() {
        return;
    }
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
