//! Conversions from history wire types to chart points.

use super::wire::{HistoryEntry, PriceHistoryResponse};
use super::PriceHistoryPoint;
use crate::error::DecodingError;
use chrono::DateTime;

impl TryFrom<HistoryEntry> for PriceHistoryPoint {
    type Error = DecodingError;

    fn try_from(entry: HistoryEntry) -> Result<Self, Self::Error> {
        let timestamp = DateTime::from_timestamp(entry.timestamp, 0).ok_or_else(|| {
            DecodingError(serde::de::Error::custom(format!(
                "Invalid timestamp: {}",
                entry.timestamp
            )))
        })?;
        Ok(Self {
            timestamp,
            price: entry.price,
        })
    }
}

/// Chronological (oldest first) points of a history response.
pub(crate) fn history_points(
    resp: PriceHistoryResponse,
) -> Result<Vec<PriceHistoryPoint>, DecodingError> {
    let mut points = resp
        .data
        .history
        .into_iter()
        .map(PriceHistoryPoint::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    points.sort_by_key(|p| p.timestamp);
    Ok(points)
}
