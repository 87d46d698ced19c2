/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{fmt, time::Duration};
use chrono::{DateTime,Utc};
use serde::{Serialize,Serializer,Deserialize,Deserializer};
use serde_json::Value;

/// an absolute point in time as reported by OpenSky (integer seconds since the epoch)
///
/// JSON null (or any other non-numeric value) decodes into [`Timestamp::UNSET`], which has no date
/// and hence can't be produced by a decoded epoch value. UNSET orders before all set timestamps
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    pub const UNSET: Timestamp = Timestamp(None);

    pub fn new (date: DateTime<Utc>)->Self { Timestamp(Some(date)) }

    /// out-of-range values are mapped to UNSET
    pub fn from_epoch_secs (secs: i64)->Self {
        Timestamp( DateTime::from_timestamp( secs, 0))
    }

    pub fn from_json (v: &Value)->Self {
        match v {
            Value::Number(n) => match n.as_f64() {
                Some(secs) => Self::from_epoch_secs( secs as i64), // Go/OpenSky semantics: truncate fractional seconds
                None => Self::UNSET
            }
            _ => Self::UNSET
        }
    }

    pub fn is_set (&self)->bool { self.0.is_some() }

    pub fn date_time (&self)->Option<DateTime<Utc>> {
        self.0
    }

    pub fn epoch_secs (&self)->Option<i64> {
        self.date_time().map( |d| d.timestamp())
    }

    /// absolute duration between two timestamps, independent of argument order.
    /// UNSET counts as the earliest representable date
    pub fn difference (&self, other: &Timestamp)->Duration {
        (self.or_min() - other.or_min()).abs().to_std().unwrap_or_default()
    }

    fn or_min (&self)->DateTime<Utc> {
        self.0.unwrap_or( DateTime::<Utc>::MIN_UTC)
    }
}

impl Default for Timestamp {
    fn default()->Self { Self::UNSET }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from (date: DateTime<Utc>)->Self { Timestamp(Some(date)) }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date_time() {
            Some(d) => write!( f, "{}", d.format("%Y-%m-%dT%H:%M:%SZ")),
            None => write!( f, "unset")
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: Deserializer<'de> {
        let v = Value::deserialize(deserializer)?;
        Ok( Timestamp::from_json(&v))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        match self.epoch_secs() {
            Some(secs) => serializer.serialize_i64(secs),
            None => serializer.serialize_none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_epoch_zero_is_set () {
        let ts = Timestamp::from_json( &json!(0));
        assert!( ts.is_set());
        assert_eq!( ts.epoch_secs(), Some(0));
        assert_ne!( ts, Timestamp::UNSET);
    }

    #[test]
    fn test_fractional_secs_truncate () {
        let ts = Timestamp::from_json( &json!(1700000000.9));
        assert_eq!( ts.epoch_secs(), Some(1700000000));
    }

    #[test]
    fn test_non_numeric_is_unset () {
        for v in [json!(null), json!("1700000000"), json!(true), json!([1]), json!({"t": 1})] {
            assert!( !Timestamp::from_json(&v).is_set(), "{v} should not decode into a set timestamp");
        }
    }

    #[test]
    fn test_serde_roundtrip_of_unset () {
        let s = serde_json::to_string( &Timestamp::UNSET).unwrap();
        assert_eq!( s, "null");
        let ts: Timestamp = serde_json::from_str( &s).unwrap();
        assert_eq!( ts, Timestamp::UNSET);
    }

    #[test]
    fn test_earliest_date_is_set () {
        let secs = DateTime::<Utc>::MIN_UTC.timestamp();
        let ts = Timestamp::from_epoch_secs( secs);
        assert!( ts.is_set());
        assert_ne!( ts, Timestamp::UNSET);
        assert_eq!( ts.epoch_secs(), Some(secs));

        assert!( !Timestamp::from_epoch_secs( secs - 1).is_set());
    }
}
