use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed chart document: {0}")]
    MalformedDocument(String),

    #[error("chart document must include type: \"arch\" or \"westminster\"")]
    InvalidLayoutType,

    #[error("chart document must include a non-empty parties array")]
    MissingParties,

    #[error("if provided, options must be an object")]
    InvalidOptions,

    #[error("options.{name} must be true or false")]
    InvalidOption { name: &'static str },

    #[error("party at index {index} must have a non-empty name")]
    InvalidPartyName { index: usize },

    #[error("party \"{name}\" must have a color")]
    InvalidPartyColor { name: String },

    #[error("party \"{name}\" must have seats as a positive integer")]
    InvalidPartySeats { name: String },

    #[error("party \"{name}\" must include side: \"government\" or \"opposition\" for westminster")]
    InvalidPartySide { name: String },

    #[error("westminster layout requires at least one government party and one opposition party")]
    MissingSideRepresentation,

    #[error("chart has {total} seats, more than the supported maximum of {max}")]
    TooManySeats { total: usize, max: usize },

    #[error("unknown party id: {0}")]
    UnknownParty(usize),
}
