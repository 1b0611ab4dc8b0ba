use crate::errors::{AppError, AppResult};
use crate::models::{group::Group, rating::Rating, response::Response};
use crate::store::ResponseLog;
use chrono::NaiveDateTime;

pub struct SubmitLogic;

impl SubmitLogic {
    /// Normalize the rating input, stamp it and append it to the log.
    /// Normalization happens here, at the point of data entry, so the
    /// log only ever carries canonical labels.
    pub fn apply(
        store: &ResponseLog,
        group: Option<Group>,
        rating_input: &str,
        now: NaiveDateTime,
    ) -> AppResult<Response> {
        let rating = Rating::normalize(rating_input)
            .ok_or_else(|| AppError::InvalidRating(rating_input.to_string()))?;

        let response = Response::new(now, group, rating);
        store.append(&response)?;
        Ok(response)
    }
}
