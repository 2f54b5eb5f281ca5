use thiserror::Error;

/// Errors raised while building glow overlays or loading their config.
///
/// None of these ever reach the user of the host window: a failed
/// overlay simply means that edge has no glow.
#[derive(Error, Debug)]
pub enum GlowError {
    #[error("could not register window class {class} (error {code})")]
    ClassRegistration { class: String, code: u32 },

    #[error("could not create overlay window: {0}")]
    WindowCreation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GlowResult<T> = Result<T, GlowError>;
