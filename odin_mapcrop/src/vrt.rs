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

//! the GDAL WMS (TMS mini-driver) descriptor that presents a tile server as one seamless
//! global Web Mercator raster. See <https://gdal.org/drivers/raster/wms.html>

use std::path::Path;
use tracing::info;
use odin_common::fs::set_filepath_contents;

use crate::provider::MapProvider;
use crate::errors::Result;

pub const DEFAULT_VRT_FILE: &str = "map_source.vrt";

/// half the circumference of the Web Mercator world square in meters
pub const WEB_MERCATOR_EXTENT: f64 = 20037508.34;

pub const TILE_SIZE: u32 = 256;
pub const BANDS_COUNT: u32 = 3;

/// the descriptor text for `provider` with `zoom_level` as max tile level.
/// Missing tiles (HTTP 404) are treated as empty blocks
pub fn tms_descriptor (provider: MapProvider, zoom_level: u32) -> String {
    let server_url = provider.url_template();
    let ext = WEB_MERCATOR_EXTENT;

    format!(r#"<GDAL_WMS>
    <Service name="TMS">
       <ServerUrl>{server_url}</ServerUrl>
    </Service>
    <DataWindow>
        <UpperLeftX>-{ext}</UpperLeftX>
        <UpperLeftY>{ext}</UpperLeftY>
        <LowerRightX>{ext}</LowerRightX>
        <LowerRightY>-{ext}</LowerRightY>
        <TileLevel>{zoom_level}</TileLevel>
        <YOrigin>top</YOrigin>
    </DataWindow>
    <Projection>EPSG:3857</Projection>
    <BlockSizeX>{TILE_SIZE}</BlockSizeX>
    <BlockSizeY>{TILE_SIZE}</BlockSizeY>
    <BandsCount>{BANDS_COUNT}</BandsCount>
    <DataType>Byte</DataType>
    <ZeroBlockHttpCodes>404</ZeroBlockHttpCodes>
</GDAL_WMS>
"#)
}

/// write the descriptor for `provider` and `zoom_level` to `path` (replacing any existing file)
pub fn write_tms_descriptor (path: impl AsRef<Path>, provider: MapProvider, zoom_level: u32) -> Result<()> {
    let path = path.as_ref();
    set_filepath_contents( path, tms_descriptor( provider, zoom_level).as_bytes())?;
    info!("created GDAL WMS descriptor {path:?} for {provider}");
    Ok(())
}
