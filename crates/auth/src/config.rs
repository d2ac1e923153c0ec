//! Authentication configuration

/// Authentication configuration.
///
/// The signing secret is injected here at construction and never held in
/// mutable global state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}
