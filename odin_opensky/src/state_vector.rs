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

//! decoding of OpenSky state vectors
//!
//! OpenSky does not send state vectors as JSON objects but as heterogeneous JSON arrays, i.e. the
//! field is determined by its position within the array. See
//! <https://openskynetwork.github.io/opensky-api/rest.html#all-state-vectors> for the slot layout.
//! Since there is no self-describing schema we only accept arrays with exactly [`N_SLOTS`] elements.

use std::fmt;
use serde::{Serialize,Deserialize,Deserializer,de::Error as DeError};
use serde_json::Value;

use crate::{
    errors::{decode_error,OdinOpenSkyError,Result},
    units::{Angle,Altitude,Speed},
    timestamp::Timestamp,
    classification::{PositionSource,Category},
};

/// number of positional slots in an (extended) state vector
pub const N_SLOTS: usize = 18;

// slot indices
const ICAO24: usize = 0;
const CALLSIGN: usize = 1;
const ORIGIN_COUNTRY: usize = 2;
const TIME_POSITION: usize = 3;
const LAST_CONTACT: usize = 4;
const LONGITUDE: usize = 5;
const LATITUDE: usize = 6;
const BARO_ALTITUDE: usize = 7;
const ON_GROUND: usize = 8;
const VELOCITY: usize = 9;
const TRUE_TRACK: usize = 10;
const VERTICAL_RATE: usize = 11;
const SENSORS: usize = 12;
const GEO_ALTITUDE: usize = 13;
const SQUAWK: usize = 14;
const SPI: usize = 15;
const POSITION_SOURCE: usize = 16;
const CATEGORY: usize = 17;

/// the instantaneous state of an aircraft (or other vehicle) as reported by OpenSky
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct StateVector {
    pub icao24: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    pub origin_country: String,
    pub time_position: Timestamp,
    pub last_contact: Timestamp,
    pub longitude: Angle,
    pub latitude: Angle,
    pub baro_altitude: Altitude,
    pub on_ground: bool,
    pub velocity: Speed,
    pub true_track: Angle,
    pub vertical_rate: Speed,
    pub sensors: Option<Vec<i32>>,
    pub geo_altitude: Altitude,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: PositionSource,
    pub category: Category,
}

impl StateVector {
    /// positional decoding of the state vector slots
    ///
    /// optional slots that are null (or of unexpected type) keep their zero value, which is *not*
    /// the sentinel produced by [`Angle::from_json`] et al. Mandatory slots that fail their type
    /// assertion abort the decoding with an error that names the slot
    pub fn from_slots (slots: &[Value])->Result<Self> {
        if slots.len() != N_SLOTS {
            return Err( decode_error!("state vector has {} slots, expected {}", slots.len(), N_SLOTS))
        }

        Ok( StateVector {
            icao24: slots[ICAO24].as_str().unwrap_or_default().to_string(),
            callsign: opt_string( &slots[CALLSIGN]),
            origin_country: req_string( slots, ORIGIN_COUNTRY, "origin_country")?,
            time_position: Timestamp::from_json( &slots[TIME_POSITION]),
            last_contact: Timestamp::from_epoch_secs( req_number( slots, LAST_CONTACT, "last_contact")? as i64),
            longitude: opt_scalar( &slots[LONGITUDE]),
            latitude: opt_scalar( &slots[LATITUDE]),
            baro_altitude: opt_scalar( &slots[BARO_ALTITUDE]),
            on_ground: req_bool( slots, ON_GROUND, "on_ground")?,
            velocity: opt_scalar( &slots[VELOCITY]),
            true_track: opt_scalar( &slots[TRUE_TRACK]),
            vertical_rate: opt_scalar( &slots[VERTICAL_RATE]),
            sensors: opt_sensors( &slots[SENSORS]),
            geo_altitude: opt_scalar( &slots[GEO_ALTITUDE]),
            squawk: opt_string( &slots[SQUAWK]),
            spi: req_bool( slots, SPI, "spi")?,
            position_source: PositionSource::from( req_code( slots, POSITION_SOURCE, "position_source")?),
            category: Category::from( req_code( slots, CATEGORY, "category")?),
        })
    }

    pub fn has_position (&self)->bool {
        self.time_position.is_set()
    }
}

impl<'de> Deserialize<'de> for StateVector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: Deserializer<'de> {
        let slots = Vec::<Value>::deserialize(deserializer)?;
        StateVector::from_slots( &slots).map_err( D::Error::custom)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "StateVector( icao24: {}", self.icao24)?;
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{}\"", cs.trim_end())?; }
        write!( f, ", country: {}", self.origin_country)?;
        if self.has_position() {
            write!( f, ", pos: ({:.5},{:.5}) at {}", self.longitude.degrees(), self.latitude.degrees(), self.time_position)?;
        }
        if let Some(alt) = self.baro_altitude.value() { write!( f, ", alt: {:.0}ft", alt * crate::units::METERS_TO_FEET)?; }
        if self.on_ground { write!( f, ", on_ground")?; }
        if self.velocity.is_set() { write!( f, ", spd: {:.1}kn", self.velocity.convert_to_knots())?; }
        if let Some(trk) = self.true_track.value() { write!( f, ", trk: {:.0}", trk)?; }
        if let Some(sq) = &self.squawk { write!( f, ", squawk: {sq}")?; }
        write!( f, ", src: {}, last_contact: {})", self.position_source, self.last_contact)
    }
}

//--- slot accessors

fn opt_string (v: &Value)->Option<String> {
    v.as_str().map( |s| s.to_string())
}

fn opt_scalar<T> (v: &Value)->T where T: From<f64> + Default {
    v.as_f64().map( T::from).unwrap_or_default()
}

// sensor serials are all-or-nothing: a list with a non-integer element is treated like a missing list
fn opt_sensors (v: &Value)->Option<Vec<i32>> {
    v.as_array()?.iter()
        .map( |s| s.as_i64().and_then( |i| i32::try_from(i).ok()))
        .collect()
}

fn req_string (slots: &[Value], idx: usize, name: &str)->Result<String> {
    slots[idx].as_str()
        .map( |s| s.to_string())
        .ok_or_else( || decode_error!("slot {} ({}) is not a string: {}", idx, name, slots[idx]))
}

fn req_bool (slots: &[Value], idx: usize, name: &str)->Result<bool> {
    slots[idx].as_bool()
        .ok_or_else( || decode_error!("slot {} ({}) is not a boolean: {}", idx, name, slots[idx]))
}

fn req_number (slots: &[Value], idx: usize, name: &str)->Result<f64> {
    slots[idx].as_f64()
        .ok_or_else( || decode_error!("slot {} ({}) is not a number: {}", idx, name, slots[idx]))
}

// any number is accepted. Codes without a defined meaning end up as `Unknown`, fractions are truncated
fn req_code (slots: &[Value], idx: usize, name: &str)->Result<i64> {
    match slots[idx].as_i64() {
        Some(code) => Ok(code),
        None => req_number( slots, idx, name).map( |v| v as i64)
    }
}

/* #region response envelope ***********************************************************************/

/// the result of a state vector query: the server time and the state vectors in the order they were received
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct StateVectorResponse {
    pub time: i64,
    pub states: Vec<StateVector>,
}

impl StateVectorResponse {
    pub fn time_stamp (&self)->Timestamp { Timestamp::from_epoch_secs( self.time) }

    pub fn len (&self)->usize { self.states.len() }

    pub fn is_empty (&self)->bool { self.states.is_empty() }

    pub fn get (&self, icao24: &str)->Option<&StateVector> {
        self.states.iter().find( |s| s.icao24 == icao24)
    }
}

// the raw envelope. OpenSky sends `"states": null` if no state vector matched the query
#[derive(Deserialize)]
struct RawStateVectorResponse {
    time: i64,
    #[serde(default)]
    states: Option<Vec<Vec<Value>>>,
}

/// decode a complete state vector response body. A single failed record fails the whole response
pub fn decode_state_vector_response (bytes: &[u8])->Result<StateVectorResponse> {
    let raw: RawStateVectorResponse = serde_json::from_slice( bytes)?;

    let mut states = Vec::with_capacity( raw.states.as_ref().map_or( 0, |s| s.len()));
    for (i, slots) in raw.states.unwrap_or_default().iter().enumerate() {
        let sv = StateVector::from_slots( slots)
            .map_err( |e| match e {
                OdinOpenSkyError::DecodeError(msg) => decode_error!("record {}: {}", i, msg),
                other => other
            })?;
        states.push( sv);
    }

    Ok( StateVectorResponse { time: raw.time, states } )
}

/* #endregion response envelope */
