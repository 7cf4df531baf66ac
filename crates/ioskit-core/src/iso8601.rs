// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed-precision ISO 8601 encodings for dates sent to native handlers.
//
// Native handlers parse request dates with an `ISO8601DateFormatter` that
// accepts exactly one shape: with fractional seconds or without. chrono's
// default serializer picks the shape from the value, so request fields that
// reach a formatter are pinned to one of these modules with
// `#[serde(with = "...")]`. Decoding accepts either shape.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

fn encode(date: &DateTime<Utc>, precision: SecondsFormat) -> String {
    date.to_rfc3339_opts(precision, true)
}

/// `2024-06-01T08:30:00.000Z`, for `[.withInternetDateTime, .withFractionalSeconds]`.
pub mod millis {
    use super::*;

    pub fn format(date: &DateTime<Utc>) -> String {
        encode(date, SecondsFormat::Millis)
    }

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(d)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => s.serialize_some(&format(date)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<DateTime<Utc>>::deserialize(d)
        }
    }
}

/// `2024-06-01T08:30:00Z`, for `[.withInternetDateTime]`. Sub-second parts
/// are truncated.
pub mod seconds {
    use super::*;

    pub fn format(date: &DateTime<Utc>) -> String {
        encode(date, SecondsFormat::Secs)
    }

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(d)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => s.serialize_some(&format(date)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<DateTime<Utc>>::deserialize(d)
        }
    }
}
