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

//! typed OpenSky queries
//!
//! each request type only accumulates query parameters (in insertion order) and knows which
//! endpoint it targets and how to decode the response. Validation that OpenSky would reject anyway
//! (interval limits, airport/transponder code lengths) is done upfront in the constructors.
//! See <https://openskynetwork.github.io/opensky-api/rest.html>

use chrono::{DateTime,TimeDelta,Utc,NaiveTime};

use crate::{
    errors::{invalid_request,Result},
    state_vector::{decode_state_vector_response,StateVectorResponse},
    flight::{decode_flights,FlightsResponse},
};

pub const ALL_STATES: &str = "states/all";
pub const OWN_STATES: &str = "states/own";
pub const FLIGHTS_WITHIN_INTERVAL: &str = "flights/all";
pub const FLIGHTS_BY_AIRCRAFT: &str = "flights/aircraft";
pub const ARRIVALS_BY_AIRPORT: &str = "flights/arrival";
pub const DEPARTURES_BY_AIRPORT: &str = "flights/departure";

pub const MAX_FLIGHTS_INTERVAL: TimeDelta = TimeDelta::hours(2);
pub const MAX_AIRPORT_INTERVAL: TimeDelta = TimeDelta::days(7);
pub const MAX_AIRCRAFT_INTERVAL: TimeDelta = TimeDelta::days(30);

pub type QueryParams = Vec<(String,String)>;

/// the abstraction used by [`crate::OpenSkyClient`] to execute queries
pub trait OpenSkyRequest {
    type Response;

    /// path relative to the configured base url
    fn endpoint (&self)->&'static str;

    fn params (&self)->&[(String,String)];

    fn decode (bytes: &[u8])->Result<Self::Response>;
}

macro_rules! impl_request {
    ($req:ty, $resp:ty, $decode:path) => {
        impl $req {
            pub fn params (&self)->&[(String,String)] { self.params.as_slice() }

            fn add (&mut self, key: &str, value: impl ToString) {
                self.params.push( (key.to_string(), value.to_string()))
            }
        }

        impl OpenSkyRequest for $req {
            type Response = $resp;
            fn endpoint (&self)->&'static str { self.endpoint() }
            fn params (&self)->&[(String,String)] { self.params.as_slice() }
            fn decode (bytes: &[u8])->Result<$resp> { $decode( bytes) }
        }
    }
}

/// geographic query area in WGS84 degrees
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn new (lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64)->Self {
        BoundingBox { lat_min, lat_max, lon_min, lon_max }
    }
}

fn deg_to_string (deg: f64)->String { format!("{:.5}", deg) }

fn warn_icao24 (icao24: &str) {
    if icao24.len() != 6 { warn!("length of icao24 address '{}' should be 6", icao24) }
}

/* #region state vector requests ********************************************************************/

/// query for all state vectors, optionally filtered by area, transponder and time
#[derive(Debug,Clone,Default)]
pub struct StateVectorRequest {
    params: QueryParams,
}

impl StateVectorRequest {
    pub fn new ()->Self { Self::default() }

    pub fn endpoint (&self)->&'static str { ALL_STATES }

    pub fn with_bounding_box (mut self, bbox: &BoundingBox)->Self {
        self.add( "lamin", deg_to_string( bbox.lat_min));
        self.add( "lomin", deg_to_string( bbox.lon_min));
        self.add( "lamax", deg_to_string( bbox.lat_max));
        self.add( "lomax", deg_to_string( bbox.lon_max));
        self
    }

    /// OpenSky accepts non-conforming addresses (and returns nothing for them) so we only warn
    pub fn with_icao24 (mut self, icao24: &str)->Self {
        warn_icao24( icao24);
        self.add( "icao24", icao24.to_lowercase());
        self
    }

    pub fn at_time (mut self, date: DateTime<Utc>)->Self {
        self.add( "time", date.timestamp());
        self
    }

    /// request the extended format that includes the aircraft category
    pub fn include_category (mut self)->Self {
        self.add( "extended", 1);
        self
    }
}

impl_request!{ StateVectorRequest, StateVectorResponse, decode_state_vector_response }

/// query for state vectors of the user's own sensors. Requires credentials
#[derive(Debug,Clone,Default)]
pub struct OwnStateVectorsRequest {
    params: QueryParams,
}

impl OwnStateVectorsRequest {
    pub fn new ()->Self { Self::default() }

    pub fn endpoint (&self)->&'static str { OWN_STATES }

    pub fn with_sensors (mut self, serials: &[i32])->Self {
        for serial in serials {
            self.add( "serials", serial);
        }
        self
    }

    pub fn with_icao24 (mut self, icao24: &str)->Self {
        warn_icao24( icao24);
        self.add( "icao24", icao24.to_lowercase());
        self
    }

    pub fn at_time (mut self, date: DateTime<Utc>)->Self {
        self.add( "time", date.timestamp());
        self
    }
}

impl_request!{ OwnStateVectorsRequest, StateVectorResponse, decode_state_vector_response }

/* #endregion state vector requests */

/* #region flight requests **************************************************************************/

/// flights within a time interval of at most [`MAX_FLIGHTS_INTERVAL`]
#[derive(Debug,Clone)]
pub struct FlightsWithinIntervalRequest {
    params: QueryParams,
}

impl FlightsWithinIntervalRequest {
    pub fn new (begin: DateTime<Utc>, end: DateTime<Utc>)->Result<Self> {
        check_interval( &begin, &end, MAX_FLIGHTS_INTERVAL)?;

        let mut req = FlightsWithinIntervalRequest { params: Vec::with_capacity(2) };
        req.add( "begin", begin.timestamp());
        req.add( "end", end.timestamp());
        Ok(req)
    }

    pub fn endpoint (&self)->&'static str { FLIGHTS_WITHIN_INTERVAL }
}

impl_request!{ FlightsWithinIntervalRequest, FlightsResponse, decode_flights }

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum AirportRequestType {
    Departure,
    Arrival
}

/// departures or arrivals for a given airport within an interval of at most [`MAX_AIRPORT_INTERVAL`]
#[derive(Debug,Clone)]
pub struct FlightsByAirportRequest {
    params: QueryParams,
    request_type: AirportRequestType,
}

impl FlightsByAirportRequest {
    pub fn new (airport: &str, begin: DateTime<Utc>, end: DateTime<Utc>, request_type: AirportRequestType)->Result<Self> {
        if airport.chars().count() != 4 {
            return Err( invalid_request!("ICAO airport code must be 4 characters long: '{}'", airport))
        }
        check_interval( &begin, &end, MAX_AIRPORT_INTERVAL)?;

        let mut req = FlightsByAirportRequest { params: Vec::with_capacity(3), request_type };
        req.add( "airport", airport.to_uppercase());
        req.add( "begin", begin.timestamp());
        req.add( "end", end.timestamp());
        Ok(req)
    }

    pub fn request_type (&self)->AirportRequestType { self.request_type }

    pub fn endpoint (&self)->&'static str {
        match self.request_type {
            AirportRequestType::Departure => DEPARTURES_BY_AIRPORT,
            AirportRequestType::Arrival => ARRIVALS_BY_AIRPORT,
        }
    }
}

impl_request!{ FlightsByAirportRequest, FlightsResponse, decode_flights }

/// flights of a given aircraft within an interval of at most [`MAX_AIRCRAFT_INTERVAL`]
#[derive(Debug,Clone)]
pub struct FlightsByAircraftRequest {
    params: QueryParams,
}

impl FlightsByAircraftRequest {
    pub fn new (icao24: &str, begin: DateTime<Utc>, end: DateTime<Utc>)->Result<Self> {
        if icao24.chars().count() != 6 {
            return Err( invalid_request!("icao24 address must be exactly 6 characters: '{}'", icao24))
        }
        check_interval( &begin, &end, MAX_AIRCRAFT_INTERVAL)?;

        let mut req = FlightsByAircraftRequest { params: Vec::with_capacity(3) };
        req.add( "icao24", icao24.to_lowercase());
        req.add( "begin", begin.timestamp());
        req.add( "end", end.timestamp());
        Ok(req)
    }

    pub fn endpoint (&self)->&'static str { FLIGHTS_BY_AIRCRAFT }
}

impl_request!{ FlightsByAircraftRequest, FlightsResponse, decode_flights }

/* #endregion flight requests */

/// check that `end` is not before `begin` and the interval does not exceed `limit`
pub fn check_interval (begin: &DateTime<Utc>, end: &DateTime<Utc>, limit: TimeDelta)->Result<()> {
    if end < begin {
        return Err( invalid_request!("end {} must not be before begin {}", end, begin))
    }
    if (*end - *begin) > limit {
        return Err( invalid_request!("interval duration must not exceed {} hours", limit.num_hours()))
    }
    Ok(())
}

/// UTC midnight of the given date and the following midnight
pub fn start_and_end_of_day (date: DateTime<Utc>)->(DateTime<Utc>,DateTime<Utc>) {
    let begin = date.date_naive().and_time( NaiveTime::MIN).and_utc();
    (begin, begin + TimeDelta::days(1))
}
