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
use std::{ffi::OsString, path::Path, sync::Mutex};
use async_trait::async_trait;
use odin_common::BoundingBox;
use odin_mapcrop::*;
use odin_mapcrop::errors::{export_error, projection_error};
use odin_mapcrop::export::translate_args;

const SCENARIO_INI: &str = "
[CENTER]
lat = 35.0
lon = 135.0

[OUTPUT]
scale = 25000
paper_width_mm = 210
paper_height_mm = 297
file_name = kyoto.tif

[GDAL]
zoom_level = 18

[MAP]
map_type = 4
";

/// returns a fixed projected center and records what it was asked to project
struct StubProjector {
    xy: (f64,f64),
    requests: Mutex<Vec<(f64,f64)>>,
}

impl StubProjector {
    fn new (x: f64, y: f64) -> Self { StubProjector { xy: (x,y), requests: Mutex::new(Vec::new()) } }
}

#[async_trait]
impl Projector for StubProjector {
    async fn to_web_mercator (&self, lon: f64, lat: f64) -> Result<(f64,f64)> {
        self.requests.lock().unwrap().push( (lon,lat));
        Ok(self.xy)
    }
}

struct FailingProjector;

#[async_trait]
impl Projector for FailingProjector {
    async fn to_web_mercator (&self, _lon: f64, _lat: f64) -> Result<(f64,f64)> {
        Err( projection_error("gdaltransform failed with exit status: 1"))
    }
}

/// records the gdal_translate arguments it would have used
struct StubExporter {
    fail: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl StubExporter {
    fn new (fail: bool) -> Self { StubExporter { fail, calls: Mutex::new(Vec::new()) } }
}

#[async_trait]
impl Exporter for StubExporter {
    async fn export (&self, bbox: &BoundingBox<f64>, vrt_path: &Path, output_path: &Path) -> Result<()> {
        let args: Vec<String> = translate_args( bbox, vrt_path, output_path).iter().map(|a: &OsString| a.to_string_lossy().to_string()).collect();
        self.calls.lock().unwrap().push( args);

        if self.fail { Err( export_error("gdal_translate failed with exit status: 1")) } else { Ok(()) }
    }
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let settings = Settings::from_ini_str( SCENARIO_INI).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");

    let projector = StubProjector::new( 15028131.0, 4163881.0);
    let exporter = StubExporter::new(false);

    let res = crop_map( &settings, None, &projector, &exporter, &vrt_path).await.expect("crop failed");
    println!("{res:?}");

    assert_eq!( res.provider, MapProvider::Osm);
    assert_eq!( res.center.source, CenterSource::ConfigFile);
    assert_eq!( *projector.requests.lock().unwrap(), vec![(135.0, 35.0)]); // lon first

    assert!( (res.half_width - 2625.0).abs() < 1e-9);
    assert!( (res.half_height - 3712.5).abs() < 1e-9);
    assert_eq!( res.bbox, BoundingBox::new( 15025506.0, 4160168.5, 15030756.0, 4167593.5));

    let vrt = std::fs::read_to_string( &vrt_path).expect("no descriptor written");
    assert!( vrt.contains("<ServerUrl>https://tile.openstreetmap.org/${z}/${x}/${y}.png</ServerUrl>"));
    assert!( vrt.contains("<TileLevel>18</TileLevel>"));

    let calls = exporter.calls.lock().unwrap();
    assert_eq!( calls.len(), 1);
    assert_eq!( &calls[0][0..5], &["-projwin", "15025506.0", "4167593.5", "15030756.0", "4160168.5"]);
    assert_eq!( calls[0].last().map(|s| s.as_str()), Some("kyoto.tif"));
    assert_eq!( res.output_path, Path::new("kyoto.tif"));
}

#[tokio::test]
async fn test_result_as_json() {
    let settings = Settings::from_ini_str( SCENARIO_INI).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");

    let res = crop_map( &settings, None, &StubProjector::new( 15028131.0, 4163881.0), &StubExporter::new(false), &vrt_path)
        .await.expect("crop failed");
    let json = serde_json::to_value( &res).expect("failed to serialize result");
    println!("{json:#}");

    assert_eq!( json["provider"], "Osm");
    assert_eq!( json["center"]["source"], "ConfigFile");
    assert_eq!( json["center"]["lat"], 35.0);
    assert_eq!( json["half_width"], 2625.0);
    assert_eq!( json["projected_center"][0], 15028131.0);
    assert_eq!( json["bbox"]["west"], 15025506.0);
    assert_eq!( json["bbox"]["north"], 4167593.5);
    assert_eq!( json["output_path"], "kyoto.tif");
}

#[tokio::test]
async fn test_clipboard_override() {
    let settings = Settings::from_ini_str( SCENARIO_INI).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");

    let projector = StubProjector::new( 0.0, 0.0);
    let exporter = StubExporter::new(false);
    let mut clipboard = "35.681, 139.767".to_string();

    let res = crop_map( &settings, Some(&mut clipboard), &projector, &exporter, &vrt_path).await.expect("crop failed");

    assert_eq!( res.center, ResolvedCenter { lat: 35.681, lon: 139.767, source: CenterSource::Clipboard });
    assert_eq!( *projector.requests.lock().unwrap(), vec![(139.767, 35.681)]);

    // projected origin gives a box symmetric around (0,0)
    assert_eq!( (res.bbox.west, res.bbox.east, res.bbox.south, res.bbox.north),
                (-res.half_width, res.half_width, -res.half_height, res.half_height));
}

#[tokio::test]
async fn test_invalid_clipboard_falls_back() {
    let settings = Settings::from_ini_str( SCENARIO_INI).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");

    let projector = StubProjector::new( 0.0, 0.0);
    let exporter = StubExporter::new(false);
    let mut clipboard = "not coords".to_string();

    let res = crop_map( &settings, Some(&mut clipboard), &projector, &exporter, &vrt_path).await.expect("crop failed");
    assert_eq!( res.center.source, CenterSource::ConfigFile);
    assert_eq!( *projector.requests.lock().unwrap(), vec![(135.0, 35.0)]);
}

#[tokio::test]
async fn test_unsupported_provider_stops_early() {
    let settings = Settings::from_ini_str( &SCENARIO_INI.replace("map_type = 4", "map_type = 5")).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");

    let projector = StubProjector::new( 0.0, 0.0);
    let exporter = StubExporter::new(false);

    let res = crop_map( &settings, None, &projector, &exporter, &vrt_path).await;
    assert!( matches!( res, Err(OdinMapCropError::UnsupportedProvider(5))));
    assert!( projector.requests.lock().unwrap().is_empty());
    assert!( exporter.calls.lock().unwrap().is_empty());
    assert!( !vrt_path.exists());
}

#[tokio::test]
async fn test_projection_failure() {
    let settings = Settings::from_ini_str( SCENARIO_INI).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");
    let exporter = StubExporter::new(false);

    let res = crop_map( &settings, None, &FailingProjector, &exporter, &vrt_path).await;
    assert!( matches!( res, Err(OdinMapCropError::ProjectionError(_))));
    assert!( !vrt_path.exists());
    assert!( exporter.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_export_failure_keeps_descriptor() {
    let settings = Settings::from_ini_str( SCENARIO_INI).expect("failed to parse config");
    let dir = tempfile::tempdir().expect("no temp dir");
    let vrt_path = dir.path().join("map_source.vrt");

    let projector = StubProjector::new( 15028131.0, 4163881.0);
    let exporter = StubExporter::new(true);

    let res = crop_map( &settings, None, &projector, &exporter, &vrt_path).await;
    assert!( matches!( res, Err(OdinMapCropError::ExportError(_))));
    assert!( vrt_path.is_file()); // no cleanup of partial results
    assert_eq!( exporter.calls.lock().unwrap().len(), 1);
}
