use thiserror::Error;

use hr_core::{CellId, TrainId, WorldPos};
use hr_track::TrackError;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("track error: {0}")]
    Track(#[from] TrackError),

    #[error("train {0} not found")]
    TrainNotFound(TrainId),

    #[error("cannot spawn train at {cell} from {prev_cell}: {reason}")]
    InvalidSpawn {
        cell:      CellId,
        prev_cell: CellId,
        reason:    &'static str,
    },

    #[error("no track near world point {0}")]
    NoTrackNear(WorldPos),
}

pub type SimResult<T> = Result<T, SimError>;
