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

use std::path::Path;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use odin_common::{check_cli, define_cli};
use odin_mapcrop::*;
use odin_mapcrop::{config::DEFAULT_CONFIG_FILE, export::DEFAULT_TRANSLATE_CMD, projector::DEFAULT_TRANSFORM_CMD, vrt::DEFAULT_VRT_FILE};

define_cli! { ARGS [about="crop_map - create a GeoTIFF print map around a center point from a tile server"] =
    no_clipboard: bool [help="do not use clipboard coordinates, always use the configured center", long],
    json: bool [help="print a JSON summary of the crop result", long],
    timeout: Option<u64> [help="max seconds to wait for each GDAL command (overrides GDAL.timeout_secs)", long],
    vrt_file: String [help="path of the GDAL WMS descriptor to create", long, default_value=DEFAULT_VRT_FILE],
    transform_cmd: String [help="gdaltransform executable", long, default_value=DEFAULT_TRANSFORM_CMD],
    translate_cmd: String [help="gdal_translate executable", long, default_value=DEFAULT_TRANSLATE_CMD],

    config: String [help="pathname of the INI config file", default_value=DEFAULT_CONFIG_FILE]
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    check_cli!(ARGS);

    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))  // use RUST_LOG to set max level
        .with_target(false)
        .init();

    let settings = load_settings( &ARGS.config)?;
    let timeout = ARGS.timeout.map( std::time::Duration::from_secs).unwrap_or_else(|| settings.timeout());

    let projector = GdalTransformProjector::new( &ARGS.transform_cmd, timeout)?;
    let exporter = GdalTranslateExporter::new( &ARGS.translate_cmd, timeout)?;

    let mut system_clipboard = SystemClipboard;
    let clipboard: Option<&mut dyn ClipboardSource> = if ARGS.no_clipboard { None } else { Some(&mut system_clipboard) };

    let res = crop_map( &settings, clipboard, &projector, &exporter, Path::new(&ARGS.vrt_file)).await?;

    if ARGS.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
    } else {
        println!("map created: {} ({} at 1:{}, {}x{}mm)",
                 res.output_path.display(), res.provider, settings.scale, settings.paper_width_mm, settings.paper_height_mm);
    }
    Ok(())
}
