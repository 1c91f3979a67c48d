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
use std::ffi::OsString;
use std::path::Path;
use odin_common::BoundingBox;
use odin_mapcrop::export::translate_args;

fn args_to_strings (args: Vec<OsString>) -> Vec<String> {
    args.into_iter().map(|a| a.to_string_lossy().to_string()).collect()
}

#[test]
fn test_translate_args() {
    let bbox = BoundingBox::new( 15025506.0, 4160168.5, 15030756.0, 4167593.5);
    let args = args_to_strings( translate_args( &bbox, Path::new("map_source.vrt"), Path::new("out.tif")));
    println!("gdal_translate {}", args.join(" "));

    assert_eq!( args, vec![
        "-projwin", "15025506.0", "4167593.5", "15030756.0", "4160168.5",
        "-a_srs", "EPSG:3857",
        "-of", "GTiff",
        "map_source.vrt",
        "out.tif"
    ]);
}

#[test]
fn test_no_world_file_option() {
    let bbox = BoundingBox::new( -2625.0, -3712.5, 2625.0, 3712.5);
    let args = args_to_strings( translate_args( &bbox, Path::new("map_source.vrt"), Path::new("maps/out.tif")));

    assert!( !args.iter().any(|a| a.contains("TFW")));
    assert_eq!( &args[1..5], &["-2625.0", "3712.5", "2625.0", "-3712.5"]);
}
