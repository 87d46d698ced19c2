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

use std::{fmt, hash::{Hash,Hasher}};
use serde::{Serialize,Serializer};

/// origin of a state vector's position
/// codes not defined by OpenSky are kept as `Unknown` so that decoding never fails on them.
/// Equality is by code, i.e. `Unknown(2)` is the same as `Mlat`
#[derive(Debug,Clone,Copy)]
pub enum PositionSource {
    AdsB,
    Asterix,
    Mlat,
    Flarm,
    Unknown(i64)
}

impl PositionSource {
    pub fn code (&self)->i64 {
        match self {
            PositionSource::AdsB => 0,
            PositionSource::Asterix => 1,
            PositionSource::Mlat => 2,
            PositionSource::Flarm => 3,
            PositionSource::Unknown(code) => *code,
        }
    }

    pub fn is_valid (&self)->bool { !matches!( self.normalized(), PositionSource::Unknown(_)) }

    pub fn label (&self)->&'static str {
        match self.normalized() {
            PositionSource::AdsB => "ADS-B",
            PositionSource::Asterix => "ASTERIX",
            PositionSource::Mlat => "MLAT",
            PositionSource::Flarm => "FLARM",
            PositionSource::Unknown(_) => "Not a valid Position Source",
        }
    }

    fn normalized (&self)->Self {
        match self {
            PositionSource::Unknown(code) => PositionSource::from( *code),
            known => *known
        }
    }
}

impl From<i64> for PositionSource {
    fn from (code: i64)->Self {
        match code {
            0 => PositionSource::AdsB,
            1 => PositionSource::Asterix,
            2 => PositionSource::Mlat,
            3 => PositionSource::Flarm,
            other => PositionSource::Unknown(other),
        }
    }
}

impl PartialEq for PositionSource {
    fn eq (&self, other: &Self)->bool { self.code() == other.code() }
}
impl Eq for PositionSource {}

impl Hash for PositionSource {
    fn hash<H: Hasher> (&self, state: &mut H) { self.code().hash( state) }
}

impl fmt::Display for PositionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}", self.label())
    }
}

impl Serialize for PositionSource {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_i64( self.code())
    }
}

/// ICAO emitter category as reported by OpenSky (only present in extended state vector responses)
/// like [`PositionSource`] this compares by code
#[derive(Debug,Clone,Copy)]
pub enum Category {
    NotAvailable,
    NoCategoryInfo,
    Light,
    Small,
    Large,
    HighVortexLarge,
    Heavy,
    HighPerformance,
    Rotorcraft,
    Glider,
    LighterThanAir,
    Parachutist,
    Ultralight,
    Reserved,
    Uav,
    Space,
    EmergencyVehicle,
    ServiceVehicle,
    PointObstacle,
    ClusterObstacle,
    LineObstacle,
    Unknown(i64)
}

// the code order of these has to match OpenSky's category numbers 0..=20
const CATEGORIES: [Category;21] = [
    Category::NotAvailable,
    Category::NoCategoryInfo,
    Category::Light,
    Category::Small,
    Category::Large,
    Category::HighVortexLarge,
    Category::Heavy,
    Category::HighPerformance,
    Category::Rotorcraft,
    Category::Glider,
    Category::LighterThanAir,
    Category::Parachutist,
    Category::Ultralight,
    Category::Reserved,
    Category::Uav,
    Category::Space,
    Category::EmergencyVehicle,
    Category::ServiceVehicle,
    Category::PointObstacle,
    Category::ClusterObstacle,
    Category::LineObstacle,
];

impl Category {
    pub fn code (&self)->i64 {
        match self {
            Category::Unknown(code) => *code,
            known => CATEGORIES.iter()
                .position( |c| std::mem::discriminant(c) == std::mem::discriminant(known))
                .map_or( -1, |i| i as i64)
        }
    }

    pub fn is_valid (&self)->bool { !matches!( self.normalized(), Category::Unknown(_)) }

    pub fn label (&self)->&'static str {
        match self.normalized() {
            Category::NotAvailable => "N/A",
            Category::NoCategoryInfo => "No ADS-B Emitter Category Information",
            Category::Light => "Light (< 15500 lbs)",
            Category::Small => "Small (15500 to 75000 lbs)",
            Category::Large => "Large (75000 to 300000 lbs)",
            Category::HighVortexLarge => "High Vortex Large (aircraft such as B-757)",
            Category::Heavy => "Heavy (> 300000 lbs)",
            Category::HighPerformance => "High Performance (> 5g acceleration and 400 kts)",
            Category::Rotorcraft => "Rotorcraft",
            Category::Glider => "Glider / sailplane",
            Category::LighterThanAir => "Lighter-than-air",
            Category::Parachutist => "Parachutist / Skydiver",
            Category::Ultralight => "Ultralight / hang-glider / paraglider",
            Category::Reserved => "Reserved",
            Category::Uav => "Unmanned Aerial Vehicle",
            Category::Space => "Space / Trans-atmospheric vehicle",
            Category::EmergencyVehicle => "Surface Vehicle - Emergency Vehicle",
            Category::ServiceVehicle => "Surface Vehicle - Service Vehicle",
            Category::PointObstacle => "Point Obstacle (includes tethered balloons)",
            Category::ClusterObstacle => "Cluster Obstacle",
            Category::LineObstacle => "Line Obstacle",
            Category::Unknown(_) => "Not a valid category",
        }
    }

    fn normalized (&self)->Self {
        match self {
            Category::Unknown(code) => Category::from( *code),
            known => *known
        }
    }
}

impl From<i64> for Category {
    fn from (code: i64)->Self {
        usize::try_from( code).ok()
            .and_then( |i| CATEGORIES.get(i).copied())
            .unwrap_or( Category::Unknown(code))
    }
}

impl PartialEq for Category {
    fn eq (&self, other: &Self)->bool { self.code() == other.code() }
}
impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher> (&self, state: &mut H) { self.code().hash( state) }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_i64( self.code())
    }
}
