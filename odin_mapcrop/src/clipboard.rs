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

//! optional map center override from the system clipboard. The clipboard is expected to hold
//! a "<lat>, <lon>" pair as copied from common web map applications. Any failure to obtain or
//! parse it is reported and then ignored, i.e. we fall back to the configured center

use std::fmt;
use serde::Serialize;
use tracing::{info,warn};

use crate::config::Settings;
use crate::errors::{clipboard_error, Result};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum CenterSource {
    Clipboard,
    ConfigFile,
}

impl fmt::Display for CenterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CenterSource::Clipboard => write!(f, "clipboard"),
            CenterSource::ConfigFile => write!(f, "config file"),
        }
    }
}

/// the geographic map center (in degrees) that is used for all downstream geometry
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct ResolvedCenter {
    pub lat: f64,
    pub lon: f64,
    pub source: CenterSource,
}

impl ResolvedCenter {
    pub fn from_settings (settings: &Settings) -> Self {
        ResolvedCenter { lat: settings.center_lat, lon: settings.center_lon, source: CenterSource::ConfigFile }
    }
}

/// abstraction of where clipboard text comes from
pub trait ClipboardSource {
    fn read_text (&mut self) -> Result<String>;
}

/// the OS clipboard
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text (&mut self) -> Result<String> {
        let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
        clipboard.get_text().map_err(clipboard_error)
    }
}

/// fixed clipboard text
impl ClipboardSource for String {
    fn read_text (&mut self) -> Result<String> {
        Ok(self.clone())
    }
}

/// parse a "<lat>, <lon>" pair. There has to be exactly one comma and both parts have to be numbers
pub fn parse_lat_lon (text: &str) -> Result<(f64,f64)> {
    let parts: Vec<&str> = text.trim().split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return Err( clipboard_error( format!("expected '<lat>, <lon>' but got '{}'", text.trim())))
    }

    let lat = parts[0].parse::<f64>().map_err(|e| clipboard_error( format!("invalid latitude '{}': {e}", parts[0])))?;
    let lon = parts[1].parse::<f64>().map_err(|e| clipboard_error( format!("invalid longitude '{}': {e}", parts[1])))?;
    Ok( (lat,lon) )
}

/// try to get a map center from `clipboard`. This never fails - if there is no usable clipboard content
/// we return `None`. Text without a comma is not considered to be coordinates and is skipped silently
pub fn clipboard_center (clipboard: &mut dyn ClipboardSource) -> Option<ResolvedCenter> {
    let text = match clipboard.read_text() {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to parse clipboard: {e}");
            return None
        }
    };

    if !text.contains(',') {
        return None
    }

    match parse_lat_lon( &text) {
        Ok((lat,lon)) => Some( ResolvedCenter { lat, lon, source: CenterSource::Clipboard }),
        Err(e) => {
            warn!("failed to parse clipboard: {e}");
            None
        }
    }
}

/// get the map center either from the clipboard (if any) or the settings
pub fn resolve_center (settings: &Settings, clipboard: Option<&mut dyn ClipboardSource>) -> ResolvedCenter {
    let center = clipboard
        .and_then( clipboard_center)
        .unwrap_or_else(|| ResolvedCenter::from_settings(settings));

    info!("using {} coordinates: lat={}, lon={}", center.source, center.lat, center.lon);
    center
}
