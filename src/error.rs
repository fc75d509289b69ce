use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FryError {
    #[error("venue name is required to check in")]
    EmptyVenue,

    #[error("the check-in form is not open")]
    FormClosed,

    #[error("no view at navigation index {0}")]
    TabOutOfRange(usize),

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),

    #[error("unknown crispiness: {0:?}")]
    UnknownCrispiness(String),
}
