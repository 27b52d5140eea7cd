//! Outcome of applying one operation to the state machine
//!
//! A handler answers every operation with a `CoordinatorResult`: the records
//! to append to the log, in application order, and an optional response for
//! the caller. The runtime that consumes it appends the records and only then
//! hands the response back.
//!
//! On the wire an absent response is an omitted `response` key, so a present
//! response that serializes to `null` (such as `()`) survives a round trip.

use serde::{Deserialize, Serialize};

use crate::error::ResultError;

/// The result of an operation applied to a state machine
///
/// `T` is the response type and `U` the record type. Records are always
/// present (possibly empty); the response is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResult<T, U>")]
#[serde(bound(
    serialize = "T: Serialize, U: Serialize",
    deserialize = "T: Deserialize<'de>, U: Deserialize<'de>"
))]
pub struct CoordinatorResult<T, U> {
    records: Box<[U]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<T>,
}

impl<T, U> CoordinatorResult<T, U> {
    /// Create a result from records and an optional response
    pub fn new(records: Vec<U>, response: Option<T>) -> Self {
        CoordinatorResult {
            records: records.into_boxed_slice(),
            response,
        }
    }

    /// Create a result from a record sequence that may be absent
    ///
    /// Fails with `InvalidArgument` when `records` is `None`; an operation that
    /// produced no mutation must pass an empty sequence instead.
    pub fn try_new<I>(records: Option<I>, response: Option<T>) -> Result<Self, ResultError>
    where
        I: IntoIterator<Item = U>,
    {
        let Some(records) = records else {
            tracing::debug!(
                has_response = response.is_some(),
                "rejected result without records"
            );
            return Err(ResultError::missing_records());
        };
        Ok(Self::new(records.into_iter().collect(), response))
    }

    /// Create a result that carries records but no response
    pub fn records_only(records: Vec<U>) -> Self {
        Self::new(records, None)
    }

    /// The records, in the order they must be appended
    pub fn records(&self) -> &[U] {
        &self.records
    }

    /// The response, if the operation has one
    pub fn response(&self) -> Option<&T> {
        self.response.as_ref()
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    /// Split into records and response
    pub fn into_parts(self) -> (Vec<U>, Option<T>) {
        (self.records.into_vec(), self.response)
    }

    /// Convert the response, keeping the records untouched
    pub fn map_response<V, F>(self, f: F) -> CoordinatorResult<V, U>
    where
        F: FnOnce(T) -> V,
    {
        CoordinatorResult {
            records: self.records,
            response: self.response.map(f),
        }
    }
}

impl<T, U> Default for CoordinatorResult<T, U> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

/// Wire form accepted on deserialization, before the records check
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, U: Deserialize<'de>"))]
struct RawResult<T, U> {
    records: Option<Vec<U>>,
    #[serde(default, deserialize_with = "present")]
    response: Option<T>,
}

/// A `response` key that is present always yields `Some`, even for `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T, U> TryFrom<RawResult<T, U>> for CoordinatorResult<T, U> {
    type Error = ResultError;

    fn try_from(raw: RawResult<T, U>) -> Result<Self, Self::Error> {
        Self::try_new(raw.records, raw.response)
    }
}
