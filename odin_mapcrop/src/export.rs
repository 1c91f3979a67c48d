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

use std::{ffi::OsString, path::{Path,PathBuf}, time::Duration};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;
use odin_common::{BoundingBox, fs::existing_non_empty_file_from_path};
use odin_common::process::{locate_cmd, run_cmd, stderr_text, stdout_text, ProcessError};

use crate::errors::{export_error, timeout_error, OdinMapCropError, Result};
use crate::geometry::projwin;
use crate::projector::WEB_MERCATOR_SRS;

pub const DEFAULT_TRANSLATE_CMD: &str = "gdal_translate";
pub const OUTPUT_FORMAT: &str = "GTiff";

/// something that crops the raster described by a descriptor file into an output image
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export (&self, bbox: &BoundingBox<f64>, vrt_path: &Path, output_path: &Path) -> Result<()>;
}

/// an [`Exporter`] that runs the external `gdal_translate` tool
pub struct GdalTranslateExporter {
    cmd: PathBuf,
    timeout: Duration,
}

impl GdalTranslateExporter {
    /// this fails if `cmd` cannot be located
    pub fn new (cmd: &str, timeout: Duration) -> Result<Self> {
        let cmd = locate_cmd(cmd).map_err(export_error)?;
        Ok( GdalTranslateExporter { cmd, timeout } )
    }
}

#[async_trait]
impl Exporter for GdalTranslateExporter {
    async fn export (&self, bbox: &BoundingBox<f64>, vrt_path: &Path, output_path: &Path) -> Result<()> {
        let mut cmd = Command::new( &self.cmd);
        cmd.args( translate_args( bbox, vrt_path, output_path));

        let output = run_cmd( &mut cmd, None, self.timeout).await.map_err(map_process_error)?;
        debug!("gdal_translate output: {}", stdout_text(&output).trim());

        if !output.status.success() {
            return Err( export_error( format!("gdal_translate failed with {}: {}", output.status, stderr_text(&output))))
        }

        existing_non_empty_file_from_path( output_path)
            .map_err(|e| export_error( format!("no output file {output_path:?}: {e}")))?;

        Ok(())
    }
}

fn map_process_error (e: ProcessError) -> OdinMapCropError {
    match e {
        ProcessError::Timeout(..) => timeout_error(e),
        _ => export_error(e)
    }
}

/// the `gdal_translate` arguments to crop `bbox` (in Web Mercator meters) from `vrt_path` into a GeoTIFF
/// at `output_path`. We do not ask for a world file (TFW) since GeoTIFFs carry their own georeference
pub fn translate_args (bbox: &BoundingBox<f64>, vrt_path: &Path, output_path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![ "-projwin".into() ];
    for v in projwin(bbox) {
        args.push( format_coord(v).into());
    }

    args.push( "-a_srs".into());
    args.push( WEB_MERCATOR_SRS.into());
    args.push( "-of".into());
    args.push( OUTPUT_FORMAT.into());
    args.push( vrt_path.as_os_str().to_os_string());
    args.push( output_path.as_os_str().to_os_string());

    args
}

/// Debug formatting keeps a trailing ".0" for integral values
fn format_coord (v: f64) -> String {
    format!("{v:?}")
}
