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

use std::fmt;
use serde::Serialize;

use crate::errors::{OdinMapCropError, Result};

/// the tile servers we can crop maps from. URL templates use the GDAL TMS `${z}/${x}/${y}` placeholders
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum MapProvider {
    GsiStd,
    GsiPhoto,
    ArcGisImagery,
    Osm,
}

impl MapProvider {
    pub const ALL: [MapProvider;4] = [MapProvider::GsiStd, MapProvider::GsiPhoto, MapProvider::ArcGisImagery, MapProvider::Osm];

    /// map the `MAP.map_type` selector of the config file
    pub fn from_id (id: i64) -> Result<MapProvider> {
        match id {
            1 => Ok(MapProvider::GsiStd),
            2 => Ok(MapProvider::GsiPhoto),
            3 => Ok(MapProvider::ArcGisImagery),
            4 => Ok(MapProvider::Osm),
            _ => Err(OdinMapCropError::UnsupportedProvider(id))
        }
    }

    pub fn id (&self) -> i64 {
        match *self {
            MapProvider::GsiStd => 1,
            MapProvider::GsiPhoto => 2,
            MapProvider::ArcGisImagery => 3,
            MapProvider::Osm => 4,
        }
    }

    pub fn url_template (&self) -> &'static str {
        match *self {
            MapProvider::GsiStd => "https://cyberjapandata.gsi.go.jp/xyz/std/${z}/${x}/${y}.png",
            MapProvider::GsiPhoto => "https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/${z}/${x}/${y}.jpg",
            // note ArcGIS REST tiles are row (y) before column (x)
            MapProvider::ArcGisImagery => "https://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/${z}/${y}/${x}",
            MapProvider::Osm => "https://tile.openstreetmap.org/${z}/${x}/${y}.png",
        }
    }

    pub fn name (&self) -> &'static str {
        match *self {
            MapProvider::GsiStd => "GSI standard map",
            MapProvider::GsiPhoto => "GSI seamless aerial photo",
            MapProvider::ArcGisImagery => "ArcGIS World Imagery",
            MapProvider::Osm => "OpenStreetMap",
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
