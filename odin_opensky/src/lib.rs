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

//! client crate for the [OpenSky Network](https://opensky-network.org) REST API
//!
//! the main parts are
//! - typed request builders ([`requests`]) that validate query parameters upfront
//! - the async HTTP transport ([`OpenSkyClient`])
//! - the response decoders, most notably the positional [`StateVector`] decoder
//!
//! decoding is synchronous and does not log. Only the transport and request builders do.

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them.
 * These have to be defined before the modules that use them
 */

macro_rules! debug {
    ( $( $e: expr ),* ) => { tracing::debug!( $( $e ),* ) }
}

macro_rules! warn {
    ( $( $e: expr ),* ) => { tracing::warn!( $( $e ),* ) }
}

pub mod errors;
pub use errors::{OdinOpenSkyError,Result};

pub mod units;
pub use units::{Angle,Altitude,Speed};

pub mod timestamp;
pub use timestamp::Timestamp;

pub mod classification;
pub use classification::{PositionSource,Category};

pub mod state_vector;
pub use state_vector::{StateVector,StateVectorResponse,decode_state_vector_response};

pub mod flight;
pub use flight::{Flight,FlightsResponse,decode_flights};

pub mod requests;
pub use requests::{
    BoundingBox, AirportRequestType, OpenSkyRequest, StateVectorRequest, OwnStateVectorsRequest,
    FlightsWithinIntervalRequest, FlightsByAirportRequest, FlightsByAircraftRequest,
    check_interval, start_and_end_of_day
};

pub mod client;
pub use client::{OpenSkyClient,OpenSkyConfig,load_config_path};
