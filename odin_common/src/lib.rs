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

//! common utilities shared by ODIN map tools: a generic bounding box, CLI and error
//! definition macros, file helpers and external process execution

use serde::Serialize;
use num::Num;

pub mod macros;
pub mod fs;
pub mod process;

/// a generic bounding box without semantics for the coordinate type
/// (for projected coordinate systems `west`/`east` are min/max x and `south`/`north` min/max y)
#[derive(Debug,Copy,Clone,Serialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    /// create a box that extends `half_width` and `half_height` from (`x`,`y`) in each direction
    pub fn from_center (x: T, y: T, half_width: T, half_height: T) -> Self {
        BoundingBox {
            west: x - half_width,
            south: y - half_height,
            east: x + half_width,
            north: y + half_height
        }
    }

    /// the upper left / lower right corner order used by GDAL window options: [west, north, east, south]
    pub fn to_ullr_array (&self) -> [T;4] {
        [self.west,self.north,self.east,self.south]
    }

    pub fn width (&self) -> T { self.east - self.west }

    pub fn height (&self) -> T { self.north - self.south }

    /// true if the box has a positive extent in both dimensions
    pub fn is_proper (&self) -> bool {
        self.west < self.east && self.south < self.north
    }
}

impl BoundingBox<f64> {
    pub fn center (&self) -> (f64,f64) {
        ( (self.west + self.east) / 2.0, (self.south + self.north) / 2.0 )
    }
}
