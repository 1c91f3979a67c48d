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

//! the INI based user input for a map crop, e.g.
//! ```text
//! [CENTER]
//! lat = 35.681
//! lon = 139.767
//!
//! [OUTPUT]
//! scale = 25000
//! paper_width_mm = 210
//! paper_height_mm = 297
//! file_name = tokyo.tif
//!
//! [GDAL]
//! zoom_level = 18
//!
//! [MAP]
//! map_type = 1
//! ```

use std::{path::Path, str::FromStr, time::Duration};
use ini::{Ini, ParseOption, Properties};
use odin_common::fs::filepath_contents_as_string;

use crate::errors::{config_error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "user_input.ini";
pub const DEFAULT_ZOOM_LEVEL: u32 = 18;
pub const DEFAULT_MAP_TYPE: i64 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

const UTF8_BOM: char = '\u{feff}';

/// the settings for a single map crop run. Created once from the config file and immutable thereafter
#[derive(Debug,Clone,PartialEq)]
pub struct Settings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub scale: u32, // print scale denominator (1:scale)
    pub paper_width_mm: u32,
    pub paper_height_mm: u32,
    pub output_file: String,
    pub zoom_level: u32,
    pub map_type: i64, // resolved into a MapProvider later so that we can report unsupported values
    pub timeout_secs: u64, // per external GDAL command
}

impl Settings {
    pub fn from_ini_str (src: &str) -> Result<Settings> {
        // plain values - no backslash escapes (Windows paths) or quote processing
        let opts = ParseOption { enabled_quote: false, enabled_escape: false, ..Default::default() };
        let ini = Ini::load_from_str_opt( src.trim_start_matches(UTF8_BOM), opts)?;
        Self::from_ini( &ini)
    }

    pub fn from_ini (ini: &Ini) -> Result<Settings> {
        let center = required_section( ini, "CENTER")?;
        let output = required_section( ini, "OUTPUT")?;
        let gdal = ini.section( Some("GDAL"));
        let map = ini.section( Some("MAP"));

        let center_lat: f64 = required_value( center, "CENTER", "lat")?;
        let center_lon: f64 = required_value( center, "CENTER", "lon")?;

        let scale = positive( required_value( output, "OUTPUT", "scale")?, "OUTPUT", "scale")?;
        let paper_width_mm = positive( required_value( output, "OUTPUT", "paper_width_mm")?, "OUTPUT", "paper_width_mm")?;
        let paper_height_mm = positive( required_value( output, "OUTPUT", "paper_height_mm")?, "OUTPUT", "paper_height_mm")?;

        let output_file: String = required_value( output, "OUTPUT", "file_name")?;
        if output_file.is_empty() {
            return Err( config_error("OUTPUT.file_name must not be empty"))
        }

        let zoom_level = optional_value( gdal, "GDAL", "zoom_level")?.unwrap_or( DEFAULT_ZOOM_LEVEL);
        let timeout_secs = optional_value( gdal, "GDAL", "timeout_secs")?.unwrap_or( DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err( config_error("GDAL.timeout_secs must be > 0"))
        }

        let map_type = optional_value( map, "MAP", "map_type")?.unwrap_or( DEFAULT_MAP_TYPE);

        Ok( Settings { center_lat, center_lon, scale, paper_width_mm, paper_height_mm, output_file, zoom_level, map_type, timeout_secs } )
    }

    pub fn timeout (&self) -> Duration {
        Duration::from_secs( self.timeout_secs)
    }
}

/// read and parse the INI file at `path`
pub fn load_settings (path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let src = filepath_contents_as_string( &path)
        .map_err(|e| config_error( format!("cannot read config file {path:?}: {e}")))?;
    Settings::from_ini_str( &src)
}

fn required_section<'a> (ini: &'a Ini, section: &str) -> Result<&'a Properties> {
    ini.section( Some(section)).ok_or_else(|| config_error( format!("missing section [{section}]")))
}

/// option names are case-insensitive (`LAT = ..` is the same as `lat = ..`), section names are not
fn get_value<'a> (props: &'a Properties, key: &str) -> Option<&'a str> {
    props.iter().find(|(k,_)| k.eq_ignore_ascii_case(key)).map(|(_,v)| v)
}

fn required_value<T: FromStr> (props: &Properties, section: &str, key: &str) -> Result<T> {
    let v = get_value( props, key).ok_or_else(|| config_error( format!("missing key {section}.{key}")))?;
    parse_value( v, section, key)
}

fn optional_value<T: FromStr> (props: Option<&Properties>, section: &str, key: &str) -> Result<Option<T>> {
    match props.and_then(|p| get_value( p, key)) {
        Some(v) => Ok( Some( parse_value( v, section, key)?)),
        None => Ok(None)
    }
}

fn parse_value<T: FromStr> (v: &str, section: &str, key: &str) -> Result<T> {
    v.trim().parse::<T>().map_err(|_| config_error( format!("invalid value for {section}.{key}: '{v}'")))
}

fn positive (v: i64, section: &str, key: &str) -> Result<u32> {
    if v > 0 {
        u32::try_from(v).map_err(|_| config_error( format!("value out of range for {section}.{key}: {v}")))
    } else {
        Err( config_error( format!("{section}.{key} has to be positive: {v}")))
    }
}
