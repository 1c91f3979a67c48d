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

use std::fs::{self,File};
use std::io::{self,Read,Write,ErrorKind};
use std::path::Path;

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

/// create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir (path: impl AsRef<Path>)->io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn file_contents_as_string (file: &mut File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(io_error!(ErrorKind::NotFound, "not a regular file {:?}", path))
    }
    let mut file = File::open(path)?;
    file_contents_as_string( &mut file)
}

pub fn existing_non_empty_file_from_path <P: AsRef<Path>> (path: P)-> Result<File> {
    let file = File::open(path.as_ref())?;
    let len = file.metadata()?.len();
    if len > 0 {
        Ok(file)
    } else { Err(io_error!(ErrorKind::Other, "file empty: {:?}", path.as_ref())) }
}

/// (over)write the file at `path` with `new_contents`, creating parent dirs as needed
pub fn set_filepath_contents (path: impl AsRef<Path>, new_contents: &[u8]) -> Result<()>  {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let mut file = File::create(path)?;
    file.write_all(new_contents)?;
    file.flush()
}
