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

use std::{path::Path, time::Duration};
use serde::{Serialize,Deserialize};
use reqwest::{Client,StatusCode,header::{ACCEPT,HeaderValue}};

use crate::{
    errors::{op_failed,OdinOpenSkyError,Result},
    requests::{
        OpenSkyRequest, StateVectorRequest, OwnStateVectorsRequest, FlightsWithinIntervalRequest,
        FlightsByAirportRequest, FlightsByAircraftRequest
    },
    state_vector::StateVectorResponse,
    flight::FlightsResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://opensky-network.org/api";

/// OpenSky access configuration, normally loaded from a RON file
/// anonymous access (no username/password) is subject to OpenSky's reduced rate limits and time resolution
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OpenSkyConfig {
    pub base_url: String,
    pub timeout: Duration,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub(crate) password: Option<String>,
}

impl OpenSkyConfig {
    pub fn with_credentials (mut self, username: impl ToString, password: impl ToString)->Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn has_credentials (&self)->bool {
        self.credentials().is_some()
    }

    fn credentials (&self)->Option<(&str,&str)> {
        match (&self.username, &self.password) {
            (Some(usr), Some(pw)) if !usr.is_empty() && !pw.is_empty() => Some( (usr.as_str(), pw.as_str())),
            _ => None
        }
    }
}

impl Default for OpenSkyConfig {
    fn default()->Self {
        OpenSkyConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            username: None,
            password: None,
        }
    }
}

pub fn load_config_path<P> (path: P)->Result<OpenSkyConfig> where P: AsRef<Path> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// the HTTP transport for OpenSky queries
/// each query is a single GET whose complete response body is handed to the request type's decoder
pub struct OpenSkyClient {
    client: Client,
    config: OpenSkyConfig,
}

impl OpenSkyClient {
    pub fn new (config: OpenSkyConfig)->Result<Self> {
        let client = Client::builder()
            .timeout( config.timeout)
            .build()?;

        Ok( OpenSkyClient { client, config } )
    }

    pub fn anonymous ()->Result<Self> {
        Self::new( OpenSkyConfig::default())
    }

    pub fn config (&self)->&OpenSkyConfig { &self.config }

    pub fn url (&self, endpoint: &str)->String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    pub async fn query<R> (&self, request: &R)->Result<R::Response> where R: OpenSkyRequest {
        let bytes = self.get_body( request.endpoint(), request.params()).await?;
        R::decode( bytes.as_slice())
    }

    pub async fn get_state_vectors (&self, request: &StateVectorRequest)->Result<StateVectorResponse> {
        self.query( request).await
    }

    pub async fn get_own_state_vectors (&self, request: &OwnStateVectorsRequest)->Result<StateVectorResponse> {
        if !self.config.has_credentials() {
            warn!("own state vectors requested without credentials");
        }
        self.query( request).await
    }

    pub async fn get_flights_within_interval (&self, request: &FlightsWithinIntervalRequest)->Result<FlightsResponse> {
        self.query( request).await
    }

    pub async fn get_flights_by_airport (&self, request: &FlightsByAirportRequest)->Result<FlightsResponse> {
        self.query( request).await
    }

    pub async fn get_flights_by_aircraft (&self, request: &FlightsByAircraftRequest)->Result<FlightsResponse> {
        self.query( request).await
    }

    async fn get_body (&self, endpoint: &str, params: &[(String,String)])->Result<Vec<u8>> {
        let url = self.url( endpoint);

        let mut req = self.client.get( &url)
            .header( ACCEPT, HeaderValue::from_static("application/json"))
            .query( params);
        if let Some((usr,pw)) = self.config.credentials() {
            req = req.basic_auth( usr, Some(pw));
        }

        debug!("requesting {} {:?}", url, params);
        let response = req.send().await?;
        let status = response.status();
        debug!("response received with status {}", status);

        match status {
            StatusCode::OK => Ok( response.bytes().await?.to_vec() ),
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => Err( OdinOpenSkyError::NotAuthorized),
            StatusCode::NOT_FOUND => Err( OdinOpenSkyError::NotFound( url)),
            other => Err( op_failed!("response status {:?} for {}", other, url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url () {
        let mut config = OpenSkyConfig::default();
        config.base_url = "http://localhost:8080/api/".to_string();
        let client = OpenSkyClient::new( config).unwrap();
        assert_eq!( client.url( crate::requests::ALL_STATES), "http://localhost:8080/api/states/all");
    }

    #[test]
    fn test_credentials () {
        let config = OpenSkyConfig::default();
        assert!( !config.has_credentials());

        let config = config.with_credentials( "someone", "");
        assert!( !config.has_credentials());

        let config = config.with_credentials( "someone", "secret");
        assert_eq!( config.credentials(), Some(("someone","secret")));
    }

    #[test]
    fn test_ron_config () {
        let ron = r#"(
            base_url: "https://opensky-network.org/api",
            timeout: (secs: 20, nanos: 0),
            username: Some("someone"),
        )"#;
        let config: OpenSkyConfig = ron::from_str( ron).unwrap();
        assert_eq!( config.timeout, Duration::from_secs(20));
        assert_eq!( config.username.as_deref(), Some("someone"));
        assert!( config.password.is_none());
        assert!( !config.has_credentials());
    }
}
