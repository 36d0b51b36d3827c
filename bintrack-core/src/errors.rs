use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinTrackError {
    #[error("Invalid bin range: start bin {start} is greater than end bin {end}")]
    InvalidBinRange { start: u32, end: u32 },

    #[error("Unknown coordinate unit: {0}")]
    UnknownUnit(String),
}
