#![forbid(unsafe_code)]

fn main() {
    // Git metadata is unavailable when building from a source archive, so
    // only the compiler version is captured at build time.
    build_data::set_RUSTC_VERSION();
}
