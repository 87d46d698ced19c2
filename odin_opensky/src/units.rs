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

//! scalar wrapper types for the numeric state vector slots
//!
//! OpenSky reports all of these in SI units (degrees, meters, meters per second). A value that is
//! missing or not numeric in the response is stored as the sentinel [`ABSENT`] and flagged as not
//! present. Use `value()` or `is_set()` before converting.

use std::fmt;
use serde::{Serialize,Serializer,Deserialize,Deserializer};
use serde_json::Value;
use uom::si::{f64::{Length,Velocity}, length::meter, velocity::meter_per_second};

/// the in-band value for "absent or not numeric"
pub const ABSENT: f64 = -1.0;

pub const METERS_TO_FEET: f64 = 3.28084;
pub const MPS_TO_KNOTS: f64 = 1.94384;
pub const MPS_TO_FT_PER_MIN: f64 = 196.85;

macro_rules! define_unit_wrapper {
    ( $( #[$meta:meta] )* $name:ident ) => {
        $( #[$meta] )*
        ///
        /// presence is tracked separately from the stored value so that a real reading of `-1.0`
        /// is not mistaken for the [`ABSENT`] sentinel
        #[derive(Debug,Clone,Copy,PartialEq)]
        pub struct $name {
            value: f64,
            present: bool,
        }

        impl $name {
            pub const ABSENT: $name = $name { value: ABSENT, present: false };

            pub fn new (value: f64)->Self { $name { value, present: true } }

            /// decode from a raw JSON scalar. Numbers are stored as-is, everything else becomes the sentinel.
            /// This never fails
            pub fn from_json (v: &Value)->Self {
                match v.as_f64() {
                    Some(value) => $name::new( value),
                    None => Self::ABSENT
                }
            }

            /// the stored value, including the sentinel
            pub fn raw (&self)->f64 { self.value }

            pub fn is_set (&self)->bool { self.present }

            pub fn value (&self)->Option<f64> {
                if self.present { Some(self.value) } else { None }
            }
        }

        /// the zero value of a slot that was not reported
        impl Default for $name {
            fn default()->Self { $name { value: 0.0, present: false } }
        }

        impl From<f64> for $name {
            fn from (value: f64)->Self { $name::new( value) }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.value() {
                    Some(v) => write!( f, "{}", v),
                    None => write!( f, "-")
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: Deserializer<'de> {
                let v = Value::deserialize(deserializer)?;
                Ok( $name::from_json(&v))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
                match self.value() {
                    Some(v) => serializer.serialize_f64(v),
                    None => serializer.serialize_none()
                }
            }
        }
    }
}

define_unit_wrapper! {
    /// degree values such as longitude, latitude or true track
    Angle
}

define_unit_wrapper! {
    /// barometric or geometric altitude in meters
    Altitude
}

define_unit_wrapper! {
    /// ground speed or vertical rate in meters per second
    Speed
}

impl Angle {
    pub fn degrees (&self)->f64 { self.value }
}

impl Altitude {
    /// note this does not check for the sentinel
    pub fn convert_to_feet (&self)->f64 { self.value * METERS_TO_FEET }

    pub fn length (&self)->Option<Length> {
        self.value().map( |v| Length::new::<meter>(v))
    }
}

impl Speed {
    /// note this does not check for the sentinel
    pub fn convert_to_knots (&self)->f64 { self.value * MPS_TO_KNOTS }

    /// note this does not check for the sentinel
    pub fn convert_to_ft_per_min (&self)->f64 { self.value * MPS_TO_FT_PER_MIN }

    pub fn velocity (&self)->Option<Velocity> {
        self.value().map( |v| Velocity::new::<meter_per_second>(v))
    }
}
