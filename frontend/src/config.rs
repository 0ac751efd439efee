use shared::Endpoints;

/// `sessionStorage` key holding the chosen colour theme.
pub const THEME_STORAGE_KEY: &str = "fauxbuster.theme";

/// Endpoints baked in at build time.
///
/// A WASM bundle has no process environment, so overrides are read with
/// `option_env!` when trunk compiles the crate, e.g.
/// `FAUXBUSTER_IMAGE_API=https://img.internal trunk build`.
pub fn endpoints() -> Endpoints {
    Endpoints::with_overrides(
        option_env!("FAUXBUSTER_IMAGE_API"),
        option_env!("FAUXBUSTER_VIDEO_API"),
    )
}
