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

use std::fmt;
use serde::{Serialize,Deserialize,Deserializer};

use crate::{errors::Result, timestamp::Timestamp};

/// a tracked flight as returned by the OpenSky `flights/*` endpoints
/// (unlike state vectors these are keyed JSON objects)
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct Flight {
    pub icao24: String,
    pub first_seen: Timestamp,
    pub est_departure_airport: Option<String>,
    pub last_seen: Timestamp,
    pub est_arrival_airport: Option<String>,
    pub callsign: Option<String>,

    #[serde(rename="estDepartureAirportHorizDistance", default, deserialize_with="null_as_zero")]
    pub est_departure_airport_horiz_distance: i32,
    #[serde(rename="estDepartureAirportVertDistance", default, deserialize_with="null_as_zero")]
    pub est_departure_airport_vert_distance: i32,
    #[serde(rename="estArrivalAirportHorizDistance", default, deserialize_with="null_as_zero")]
    pub est_arrival_airport_horiz_distance: i32,
    #[serde(rename="estArrivalAirportVertDistance", default, deserialize_with="null_as_zero")]
    pub est_arrival_airport_vert_distance: i32,

    #[serde(rename="departureAirportCandidatesCount", default, deserialize_with="null_as_zero")]
    pub departure_airport_candidates: i32,
    #[serde(rename="arrivalAirportCandidatesCount", default, deserialize_with="null_as_zero")]
    pub arrival_airport_candidates: i32,
}

impl Flight {
    pub fn duration (&self)->std::time::Duration {
        self.last_seen.difference( &self.first_seen)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dep = self.est_departure_airport.as_deref().unwrap_or("?");
        let arr = self.est_arrival_airport.as_deref().unwrap_or("?");
        write!( f, "Flight( icao24: {}", self.icao24)?;
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{}\"", cs.trim_end())?; }
        write!( f, ", {} {} -> {} {})", dep, self.first_seen, arr, self.last_seen)
    }
}

pub type FlightsResponse = Vec<Flight>;

fn null_as_zero<'de,D> (deserializer: D)->std::result::Result<i32,D::Error> where D: Deserializer<'de> {
    Ok( Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

pub fn decode_flights (bytes: &[u8])->Result<FlightsResponse> {
    Ok( serde_json::from_slice( bytes)? )
}
