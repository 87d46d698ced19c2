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

use std::path::PathBuf;
use tokio;
use anyhow::Result;
use clap::{Parser,Subcommand};
use chrono::{DateTime,Utc};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use odin_opensky::{
    load_config_path, start_and_end_of_day, AirportRequestType, BoundingBox, FlightsByAircraftRequest,
    FlightsByAirportRequest, FlightsWithinIntervalRequest, OpenSkyClient, OpenSkyConfig, OwnStateVectorsRequest,
    StateVectorRequest
};

#[derive(Parser, Debug)]
#[command(version, about = "OpenSky Network query tool")]
struct Args {
    /// optional RON config file (default is anonymous access)
    #[arg(short,long)]
    config: Option<PathBuf>,

    /// OpenSky user (overrides config)
    #[arg(short,long, requires = "password")]
    user: Option<String>,

    /// OpenSky password (overrides config)
    #[arg(short,long)]
    password: Option<String>,

    /// produce formatted JSON output
    #[arg(long)]
    pretty: bool,

    /// print one line per record instead of JSON
    #[arg(short,long)]
    summary: bool,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// all state vectors
    States {
        /// lat_min lat_max lon_min lon_max (degrees)
        #[arg(long, num_args = 4, allow_negative_numbers = true)]
        bbox: Option<Vec<f64>>,
        #[arg(long)]
        icao24: Option<String>,
        /// RFC 3339 time (default is now)
        #[arg(long)]
        time: Option<DateTime<Utc>>,
        /// include aircraft category
        #[arg(long)]
        extended: bool,
    },
    /// state vectors of own sensors (requires credentials)
    Own {
        #[arg(long, num_args = 1..)]
        sensors: Vec<i32>,
        #[arg(long)]
        icao24: Option<String>,
        #[arg(long)]
        time: Option<DateTime<Utc>>,
    },
    /// all flights within a (max 2h) interval
    Flights {
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// departures (or arrivals) of an airport. Without `end` the whole day of `begin` is used
    Airport {
        airport: String,
        begin: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        #[arg(long)]
        arrivals: bool,
    },
    /// flights of an aircraft. Without `end` the whole day of `begin` is used
    Aircraft {
        icao24: String,
        begin: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    },
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_path( path)?,
        None => OpenSkyConfig::default()
    };
    if let (Some(usr),Some(pw)) = (&args.user, &args.password) {
        config = config.with_credentials( usr, pw);
    }
    let client = OpenSkyClient::new( config)?;

    match &args.query {
        Query::States { bbox, icao24, time, extended } => {
            let mut req = StateVectorRequest::new();
            if let Some(bb) = bbox { req = req.with_bounding_box( &BoundingBox::new( bb[0], bb[1], bb[2], bb[3])); }
            if let Some(icao24) = icao24 { req = req.with_icao24( icao24); }
            if let Some(time) = time { req = req.at_time( *time); }
            if *extended { req = req.include_category(); }

            let response = client.get_state_vectors( &req).await?;
            if args.summary {
                println!("time: {}, {} state vectors", response.time_stamp(), response.len());
                for sv in &response.states { println!("{sv}"); }
            } else {
                print_json( &response, args.pretty)?;
            }
        }
        Query::Own { sensors, icao24, time } => {
            let mut req = OwnStateVectorsRequest::new().with_sensors( sensors);
            if let Some(icao24) = icao24 { req = req.with_icao24( icao24); }
            if let Some(time) = time { req = req.at_time( *time); }

            let response = client.get_own_state_vectors( &req).await?;
            if args.summary {
                for sv in &response.states { println!("{sv}"); }
            } else {
                print_json( &response, args.pretty)?;
            }
        }
        Query::Flights { begin, end } => {
            let req = FlightsWithinIntervalRequest::new( *begin, *end)?;
            print_flights( &client.get_flights_within_interval( &req).await?, &args)?;
        }
        Query::Airport { airport, begin, end, arrivals } => {
            let (begin,end) = interval( *begin, *end);
            let request_type = if *arrivals { AirportRequestType::Arrival } else { AirportRequestType::Departure };
            let req = FlightsByAirportRequest::new( airport, begin, end, request_type)?;
            print_flights( &client.get_flights_by_airport( &req).await?, &args)?;
        }
        Query::Aircraft { icao24, begin, end } => {
            let (begin,end) = interval( *begin, *end);
            let req = FlightsByAircraftRequest::new( icao24, begin, end)?;
            print_flights( &client.get_flights_by_aircraft( &req).await?, &args)?;
        }
    }

    Ok(())
}

fn interval (begin: DateTime<Utc>, end: Option<DateTime<Utc>>)->(DateTime<Utc>,DateTime<Utc>) {
    match end {
        Some(end) => (begin, end),
        None => start_and_end_of_day( begin)
    }
}

fn print_flights (flights: &odin_opensky::FlightsResponse, args: &Args)->Result<()> {
    if args.summary {
        for flight in flights { println!("{flight}"); }
        Ok(())
    } else {
        print_json( flights, args.pretty)
    }
}

fn print_json<T> (data: &T, pretty: bool)->Result<()> where T: Serialize + ?Sized {
    let s = if pretty { serde_json::to_string_pretty( data)? } else { serde_json::to_string( data)? };
    println!("{s}");
    Ok(())
}
