/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the pipeline
/// can turn every failure into exactly one user-facing reply.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// Failed to reach the lookup API or to parse what it sent back.
    #[error("transport error: {0}")]
    Transport(String),

    /// The lookup API answered, but reported a semantic error of its own.
    #[error("lookup service reported: {0}")]
    Remote(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
