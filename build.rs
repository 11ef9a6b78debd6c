fn main() {
    #[cfg(feature = "swift")]
    swift();
}

/// Generates the Swift and C headers for the iOS app from `src/bridge.rs`.
#[cfg(feature = "swift")]
fn swift() {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("swift");
    let bridges = vec!["src/bridge.rs"];

    for path in &bridges {
        println!("cargo:rerun-if-changed={path}");
    }

    swift_bridge_build::parse_bridges(bridges)
        .write_all_concatenated(out_dir, env!("CARGO_PKG_NAME"));
}
