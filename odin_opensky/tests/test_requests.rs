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

use chrono::{DateTime, TimeDelta, Utc};
use odin_opensky::{
    check_interval, load_config_path, start_and_end_of_day, requests, AirportRequestType, BoundingBox,
    FlightsByAircraftRequest, FlightsByAirportRequest, FlightsWithinIntervalRequest, OdinOpenSkyError,
    OpenSkyRequest, OwnStateVectorsRequest, StateVectorRequest
};

fn date (secs: i64)->DateTime<Utc> { DateTime::from_timestamp( secs, 0).unwrap() }

fn pairs (params: &[(String,String)])->Vec<(&str,&str)> {
    params.iter().map( |(k,v)| (k.as_str(), v.as_str())).collect()
}

fn is_invalid<T: std::fmt::Debug> (res: odin_opensky::Result<T>)->bool {
    matches!( res, Err(OdinOpenSkyError::InvalidRequest(_)))
}

#[test]
fn test_state_vector_request () {
    let bbox = BoundingBox::new( 45.8389, 47.8229, 5.9962, 10.5226);
    let req = StateVectorRequest::new()
        .with_bounding_box( &bbox)
        .with_icao24( "3C6444")
        .at_time( date(1700000000))
        .include_category();

    assert_eq!( req.endpoint(), requests::ALL_STATES);
    assert_eq!( pairs( req.params()), vec![
        ("lamin","45.83890"), ("lomin","5.99620"), ("lamax","47.82290"), ("lomax","10.52260"),
        ("icao24","3c6444"), ("time","1700000000"), ("extended","1")
    ]);
}

#[test]
fn test_non_conforming_icao24_is_kept () {
    let req = StateVectorRequest::new().with_icao24( "abc");
    assert_eq!( pairs( req.params()), vec![("icao24","abc")]);
}

#[test]
fn test_own_state_vectors_request () {
    let req = OwnStateVectorsRequest::new().with_sensors( &[12, 34]).at_time( date(42));
    assert_eq!( OpenSkyRequest::endpoint( &req), requests::OWN_STATES);
    assert_eq!( pairs( req.params()), vec![("serials","12"), ("serials","34"), ("time","42")]);
}

#[test]
fn test_flights_within_interval () {
    let begin = date(1700000000);
    let req = FlightsWithinIntervalRequest::new( begin, begin + TimeDelta::hours(2)).unwrap();
    assert_eq!( req.endpoint(), requests::FLIGHTS_WITHIN_INTERVAL);
    assert_eq!( pairs( req.params()), vec![("begin","1700000000"), ("end","1700007200")]);

    assert!( is_invalid( FlightsWithinIntervalRequest::new( begin, begin + TimeDelta::hours(2) + TimeDelta::seconds(1))));
    assert!( is_invalid( FlightsWithinIntervalRequest::new( begin, begin - TimeDelta::seconds(1))));
}

#[test]
fn test_flights_by_airport () {
    let (begin,end) = start_and_end_of_day( date(1700000000));

    let req = FlightsByAirportRequest::new( "eddf", begin, end, AirportRequestType::Arrival).unwrap();
    assert_eq!( req.endpoint(), requests::ARRIVALS_BY_AIRPORT);
    assert_eq!( req.params()[0], ("airport".to_string(), "EDDF".to_string()));

    let req = FlightsByAirportRequest::new( "EDDF", begin, end, AirportRequestType::Departure).unwrap();
    assert_eq!( req.endpoint(), requests::DEPARTURES_BY_AIRPORT);
    assert_eq!( req.request_type(), AirportRequestType::Departure);

    assert!( is_invalid( FlightsByAirportRequest::new( "EDF", begin, end, AirportRequestType::Arrival)));
    assert!( is_invalid( FlightsByAirportRequest::new( "EDDF", begin, begin + TimeDelta::days(8), AirportRequestType::Arrival)));
    assert!( FlightsByAirportRequest::new( "EDDF", begin, begin + TimeDelta::days(7), AirportRequestType::Arrival).is_ok());
}

#[test]
fn test_flights_by_aircraft () {
    let begin = date(1700000000);
    let req = FlightsByAircraftRequest::new( "3c6444", begin, begin + TimeDelta::days(30)).unwrap();
    assert_eq!( req.endpoint(), requests::FLIGHTS_BY_AIRCRAFT);
    assert_eq!( pairs( req.params()), vec![("icao24","3c6444"), ("begin","1700000000"), ("end","1702592000")]);

    assert!( is_invalid( FlightsByAircraftRequest::new( "3c644", begin, begin + TimeDelta::days(1))));
    assert!( is_invalid( FlightsByAircraftRequest::new( "3c6444", begin, begin + TimeDelta::days(31))));
}

#[test]
fn test_check_interval () {
    let begin = date(1000);
    assert!( check_interval( &begin, &begin, TimeDelta::hours(1)).is_ok());
    assert!( check_interval( &begin, &date(4600), TimeDelta::hours(1)).is_ok());
    assert!( is_invalid( check_interval( &begin, &date(4601), TimeDelta::hours(1))));
    assert!( is_invalid( check_interval( &begin, &date(999), TimeDelta::hours(1))));
}

#[test]
fn test_start_and_end_of_day () {
    let (begin,end) = start_and_end_of_day( date(1700000000)); // 2023-11-14T22:13:20Z
    assert_eq!( begin, date(1699920000));
    assert_eq!( end - begin, TimeDelta::days(1));
}

#[test]
fn test_default_config () {
    let config = load_config_path( "configs/opensky.ron").unwrap();
    assert_eq!( config.base_url, "https://opensky-network.org/api");
    assert_eq!( config.timeout, std::time::Duration::from_secs(10));
    assert!( !config.has_credentials());
}
