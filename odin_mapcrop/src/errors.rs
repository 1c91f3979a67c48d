/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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
use odin_common::map_to_opaque_error;

pub type Result<T> = std::result::Result<T, OdinMapCropError>;

#[derive(Error,Debug,Clone)]
pub enum OdinMapCropError {
    #[error("config error: {0}")]
    ConfigError(String),

    #[error("unsupported map provider: {0} (supported are 1..=4)")]
    UnsupportedProvider(i64),

    // only used internally, clipboard failures fall back to the configured center
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("projection error: {0}")]
    ProjectionError(String),

    #[error("export error: {0}")]
    ExportError(String),

    #[error("timeout error: {0}")]
    TimeoutError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

map_to_opaque_error!{ std::io::Error => OdinMapCropError::IOError }
map_to_opaque_error!{ ini::ParseError => OdinMapCropError::ConfigError }

pub fn config_error (msg: impl ToString)->OdinMapCropError {
    OdinMapCropError::ConfigError(msg.to_string())
}

pub fn clipboard_error (msg: impl ToString)->OdinMapCropError {
    OdinMapCropError::ClipboardError(msg.to_string())
}

pub fn projection_error (msg: impl ToString)->OdinMapCropError {
    OdinMapCropError::ProjectionError(msg.to_string())
}

pub fn export_error (msg: impl ToString)->OdinMapCropError {
    OdinMapCropError::ExportError(msg.to_string())
}

pub fn timeout_error (msg: impl ToString)->OdinMapCropError {
    OdinMapCropError::TimeoutError(msg.to_string())
}
