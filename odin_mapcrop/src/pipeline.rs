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

use std::path::{Path,PathBuf};
use serde::Serialize;
use tracing::info;
use odin_common::BoundingBox;

use crate::clipboard::{resolve_center, ClipboardSource, ResolvedCenter};
use crate::config::Settings;
use crate::errors::Result;
use crate::export::Exporter;
use crate::geometry::{bbox_around, half_extent_meters};
use crate::projector::Projector;
use crate::provider::MapProvider;
use crate::vrt::write_tms_descriptor;

/// what a successful map crop did
#[derive(Debug,Clone,Serialize)]
pub struct CropResult {
    pub provider: MapProvider,
    pub center: ResolvedCenter,
    pub half_width: f64,  // meters
    pub half_height: f64, // meters
    pub projected_center: (f64,f64),
    pub bbox: BoundingBox<f64>, // Web Mercator meters
    pub vrt_path: PathBuf,
    pub output_path: PathBuf,
}

/// run the whole crop: resolve provider and center, compute the projected print area, write the
/// tile server descriptor to `vrt_path` and export the cropped GeoTIFF to `settings.output_file`.
/// Files that were already written are not removed if a later step fails
pub async fn crop_map (settings: &Settings,
                       clipboard: Option<&mut dyn ClipboardSource>,
                       projector: &dyn Projector,
                       exporter: &dyn Exporter,
                       vrt_path: &Path) -> Result<CropResult>
{
    let provider = MapProvider::from_id( settings.map_type)?;
    let center = resolve_center( settings, clipboard);

    let (half_width, half_height) = half_extent_meters( settings.paper_width_mm, settings.paper_height_mm, settings.scale)?;

    let (x, y) = projector.to_web_mercator( center.lon, center.lat).await?;
    let bbox = bbox_around( x, y, half_width, half_height);
    info!("projected center: x={x}, y={y}");
    info!("crop window (EPSG:3857): x=[{}, {}] y=[{}, {}]", bbox.west, bbox.east, bbox.south, bbox.north);

    write_tms_descriptor( vrt_path, provider, settings.zoom_level)?;

    let output_path = PathBuf::from( &settings.output_file);
    info!("creating GeoTIFF {output_path:?} (zoom level {}) ...", settings.zoom_level);
    exporter.export( &bbox, vrt_path, &output_path).await?;
    info!("GeoTIFF created: {output_path:?} (no .tfw world file)");

    Ok( CropResult {
        provider, center, half_width, half_height,
        projected_center: (x,y),
        bbox,
        vrt_path: vrt_path.to_path_buf(),
        output_path
    })
}
