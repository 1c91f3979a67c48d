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

use std::{path::PathBuf, time::Duration};
use async_trait::async_trait;
use tokio::process::Command;
use odin_common::process::{locate_cmd, run_cmd, stderr_text, stdout_text, ProcessError};

use crate::errors::{projection_error, timeout_error, OdinMapCropError, Result};

pub const GEO_SRS: &str = "EPSG:4326";
pub const WEB_MERCATOR_SRS: &str = "EPSG:3857";
pub const DEFAULT_TRANSFORM_CMD: &str = "gdaltransform";

/// something that converts geographic (lon,lat) degrees into Web Mercator (x,y) meters
#[async_trait]
pub trait Projector: Send + Sync {
    async fn to_web_mercator (&self, lon: f64, lat: f64) -> Result<(f64,f64)>;
}

/// a [`Projector`] that uses the external `gdaltransform` tool, feeding it "<lon> <lat>" lines on stdin
pub struct GdalTransformProjector {
    cmd: PathBuf,
    timeout: Duration,
}

impl GdalTransformProjector {
    /// this fails if `cmd` cannot be located
    pub fn new (cmd: &str, timeout: Duration) -> Result<Self> {
        let cmd = locate_cmd(cmd).map_err(projection_error)?;
        Ok( GdalTransformProjector { cmd, timeout } )
    }
}

#[async_trait]
impl Projector for GdalTransformProjector {
    async fn to_web_mercator (&self, lon: f64, lat: f64) -> Result<(f64,f64)> {
        let mut cmd = Command::new( &self.cmd);
        cmd.arg("-s_srs").arg(GEO_SRS)
           .arg("-t_srs").arg(WEB_MERCATOR_SRS);

        let input = format!("{lon} {lat}\n");
        let output = run_cmd( &mut cmd, Some(&input), self.timeout).await.map_err(map_process_error)?;

        if !output.status.success() {
            return Err( projection_error( format!("gdaltransform failed with {}: {}", output.status, stderr_text(&output))))
        }

        parse_transform_output( &stdout_text(&output))
    }
}

fn map_process_error (e: ProcessError) -> OdinMapCropError {
    match e {
        ProcessError::Timeout(..) => timeout_error(e),
        _ => projection_error(e)
    }
}

/// parse the first two whitespace separated tokens of `gdaltransform` output as (x,y). Any other tokens
/// (such as the z value) are ignored
pub fn parse_transform_output (output: &str) -> Result<(f64,f64)> {
    let mut tokens = output.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(xs), Some(ys)) => {
            let x = xs.parse::<f64>().map_err(|_| projection_error( format!("invalid x coordinate '{xs}'")))?;
            let y = ys.parse::<f64>().map_err(|_| projection_error( format!("invalid y coordinate '{ys}'")))?;
            Ok( (x,y) )
        }
        _ => Err( projection_error( format!("unexpected transform output '{}'", output.trim())))
    }
}
