#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Positional lookup past the end of the registry. Caller bug.
    PositionOutOfRange { index: usize, count: usize },
    /// Registry configuration could not be parsed.
    Config(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositionOutOfRange { index, count } => {
                write!(f, "position {index} out of range (registry holds {count} games)")
            },
            Self::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {}
