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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinOpenSkyError>;

#[derive(Error,Debug)]
pub enum OdinOpenSkyError {

    /// structural problem with a response (wrong slot count, failed type assertion on a mandatory slot)
    #[error("decode error {0}")]
    DecodeError(String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("invalid request {0}")]
    InvalidRequest(String),

    #[error("not allowed to make this request without username and password")]
    NotAuthorized,

    #[error("not found {0}")]
    NotFound(String),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("operation failed {0}")]
    OpFailed(String)
}

macro_rules! decode_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinOpenSkyError::DecodeError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use decode_error;

macro_rules! invalid_request {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinOpenSkyError::InvalidRequest( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_request;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::OdinOpenSkyError::OpFailed( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
