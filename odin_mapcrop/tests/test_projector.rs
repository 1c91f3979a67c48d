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
use odin_mapcrop::projector::parse_transform_output;
use odin_mapcrop::OdinMapCropError;

#[test]
fn test_parse_transform_output() {
    assert_eq!( parse_transform_output("15028131.2587459 4163881.14406505 0\n").ok(), Some((15028131.2587459, 4163881.14406505)));
    assert_eq!( parse_transform_output("  0 0").ok(), Some((0.0, 0.0)));
    assert_eq!( parse_transform_output("-13580977.8 4439106.7 0 extra tokens").ok(), Some((-13580977.8, 4439106.7)));
}

#[test]
fn test_invalid_transform_output() {
    for s in ["", "\n", "15028131.2", "ERROR 1: PROJ: proj_create", "inf_x 12"] {
        let res = parse_transform_output(s);
        println!("'{s}' -> {res:?}");
        assert!( matches!( res, Err(OdinMapCropError::ProjectionError(_))));
    }
}
