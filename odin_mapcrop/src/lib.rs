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

//! odin_mapcrop creates georeferenced print maps: it computes the Web Mercator area covered by a
//! given paper size at a given print scale around a center point, describes a tile server as a
//! GDAL WMS raster and uses the GDAL command line tools to crop that area into a GeoTIFF.
//!
//! The processing steps are strictly sequential:
//!   1. load [`config::Settings`] from an INI file
//!   2. resolve the [`provider::MapProvider`]
//!   3. get the map center, optionally from the clipboard ([`clipboard`])
//!   4. compute the ground extent of the paper ([`geometry`])
//!   5. project the center to EPSG:3857 with `gdaltransform` ([`projector`]) and derive the crop window
//!   6. write the tile server descriptor ([`vrt`])
//!   7. crop the GeoTIFF with `gdal_translate` ([`export`])
//!
//! Steps 2-7 are combined in [`pipeline::crop_map`]

pub mod errors;
pub mod config;
pub mod provider;
pub mod clipboard;
pub mod geometry;
pub mod projector;
pub mod vrt;
pub mod export;
pub mod pipeline;

pub use errors::{OdinMapCropError, Result};
pub use config::{load_settings, Settings};
pub use provider::MapProvider;
pub use clipboard::{CenterSource, ClipboardSource, ResolvedCenter, SystemClipboard};
pub use projector::{GdalTransformProjector, Projector};
pub use export::{Exporter, GdalTranslateExporter};
pub use pipeline::{crop_map, CropResult};
