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

use odin_common::BoundingBox;

use crate::errors::{config_error, Result};

/// ground distance (in meters) of half the paper width and height at the given print scale (1:`scale`)
pub fn half_extent_meters (paper_width_mm: u32, paper_height_mm: u32, scale: u32) -> Result<(f64,f64)> {
    if paper_width_mm == 0 || paper_height_mm == 0 || scale == 0 {
        return Err( config_error( format!("paper size and scale have to be positive: {paper_width_mm}x{paper_height_mm}mm at 1:{scale}")))
    }

    let scale = scale as f64;
    let half_width = (paper_width_mm as f64 / 1000.0) * scale / 2.0;
    let half_height = (paper_height_mm as f64 / 1000.0) * scale / 2.0;

    Ok( (half_width, half_height) )
}

/// the projected bounding box centered on (`x`,`y`)
pub fn bbox_around (x: f64, y: f64, half_width: f64, half_height: f64) -> BoundingBox<f64> {
    BoundingBox::from_center( x, y, half_width, half_height)
}

/// the `gdal_translate -projwin` window for `bbox`: upper left x, upper left y, lower right x, lower right y.
/// Note the upper left y is the max y value
pub fn projwin (bbox: &BoundingBox<f64>) -> [f64;4] {
    bbox.to_ullr_array()
}
