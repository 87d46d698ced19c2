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

use std::time::Duration;
use serde_json::{json, Value};
use odin_opensky::{Altitude, Angle, Category, PositionSource, Speed, Timestamp};

const EPS: f64 = 1e-6;

#[test]
fn test_altitude_conversion () {
    let alt = Altitude::from_json( &json!(100));
    assert!( alt.is_set());
    assert!( (alt.convert_to_feet() - 328.084).abs() < EPS);

    // the sentinel propagates through conversion
    let alt = Altitude::from_json( &Value::Null);
    assert_eq!( alt.raw(), -1.0);
    assert!( alt.value().is_none());
    assert!( (alt.convert_to_feet() - (-3.28084)).abs() < EPS);
}

#[test]
fn test_speed_conversion () {
    let spd = Speed::from_json( &json!(10.0));
    assert!( (spd.convert_to_knots() - 19.4384).abs() < EPS);
    assert!( (spd.convert_to_ft_per_min() - 1968.5).abs() < EPS);

    let spd = Speed::from_json( &json!("10"));
    assert_eq!( spd.raw(), -1.0);
    assert!( (spd.convert_to_knots() - (-1.94384)).abs() < EPS);
}

#[test]
fn test_sentinel_for_non_numbers () {
    for v in [json!(null), json!("42"), json!(true), json!([42]), json!({"v": 42})] {
        assert_eq!( Angle::from_json(&v), Angle::ABSENT, "{v}");
        assert_eq!( Altitude::from_json(&v).raw(), -1.0, "{v}");
        assert_eq!( Speed::from_json(&v).raw(), -1.0, "{v}");
    }

    assert_eq!( Angle::from_json( &json!(-12.5)).value(), Some(-12.5));
}

#[test]
fn test_wrapper_serde () {
    let angles: Vec<Angle> = serde_json::from_str( "[1.5, null, \"x\"]").unwrap();
    assert_eq!( angles, vec![ Angle::new(1.5), Angle::ABSENT, Angle::ABSENT ]);
    assert_eq!( serde_json::to_string( &angles).unwrap(), "[1.5,null,null]");
}

#[test]
fn test_timestamp_difference () {
    let t1 = Timestamp::from_epoch_secs( 10);
    let t2 = Timestamp::from_epoch_secs( 3);

    assert_eq!( t1.difference( &t2), Duration::from_secs(7));
    assert_eq!( t2.difference( &t1), Duration::from_secs(7));
    assert_eq!( t1.difference( &t1), Duration::ZERO);
}

#[test]
fn test_timestamp_decode () {
    let ts = Timestamp::from_json( &json!(1700000000));
    assert!( ts.is_set());
    assert_eq!( ts.epoch_secs(), Some(1700000000));
    assert_eq!( ts.to_string(), "2023-11-14T22:13:20Z");

    let ts = Timestamp::from_json( &Value::Null);
    assert_eq!( ts, Timestamp::UNSET);
    assert!( ts.date_time().is_none());
    assert_eq!( ts.to_string(), "unset");
}

#[test]
fn test_position_source_labels () {
    let expected = ["ADS-B", "ASTERIX", "MLAT", "FLARM"];
    for (code,label) in expected.iter().enumerate() {
        let ps = PositionSource::from( code as i64);
        assert!( ps.is_valid());
        assert_eq!( ps.to_string(), *label);
    }

    assert_eq!( PositionSource::from(2).to_string(), "MLAT");
    assert_eq!( PositionSource::from(4).to_string(), "Not a valid Position Source");
    assert_eq!( PositionSource::from(99).to_string(), "Not a valid Position Source");
    assert!( !PositionSource::from(99).is_valid());
}

#[test]
fn test_category_labels () {
    assert_eq!( Category::from(0).to_string(), "N/A");
    assert_eq!( Category::from(8).to_string(), "Rotorcraft");
    assert_eq!( Category::from(14).to_string(), "Unmanned Aerial Vehicle");
    assert_eq!( Category::from(20).to_string(), "Line Obstacle");

    for code in 21..=255 {
        assert_eq!( Category::from(code).to_string(), "Not a valid category");
    }

    // labels of valid categories are all distinct from the invalid one
    for code in 0..=20 {
        let c = Category::from(code);
        assert!( c.is_valid());
        assert_ne!( c.to_string(), "Not a valid category");
    }
}
