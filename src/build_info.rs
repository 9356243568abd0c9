pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_DATE: &str = env!("VERGEN_BUILD_DATE");
pub const TARGET: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");
pub const RUSTC: &str = env!("VERGEN_RUSTC_SEMVER");

pub fn summary() -> String {
    format!(
        "vite-rust-wasm {} ({} {}, rustc {})",
        VERSION, TARGET, BUILD_DATE, RUSTC
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_version_and_target() {
        let s = summary();
        assert!(s.starts_with("vite-rust-wasm "));
        assert!(s.contains(VERSION));
        assert!(s.contains(TARGET));
    }
}
