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

//! execution of external command line tools with piped i/o and a bounded run time

use std::{io::ErrorKind, path::PathBuf, process::{Output,Stdio}, time::Duration};
use thiserror::Error;
use tokio::{io::AsyncWriteExt, process::{ChildStdin,Command}, time::timeout};
use tracing::debug;

pub type Result<T> = std::result::Result<T, ProcessError>;

#[derive(Error,Debug)]
pub enum ProcessError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("failed to spawn {0}: {1}")]
    SpawnError(String,String),

    #[error("process IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("{0} did not complete within {1:?}")]
    Timeout(String,Duration),
}

/// look up an executable either as explicit path or on `PATH`
pub fn locate_cmd (cmd: &str) -> Result<PathBuf> {
    which::which(cmd).map_err(|e| ProcessError::NotFound(format!("{cmd} ({e})")))
}

/// the program name of a command (for diagnostics)
pub fn program_name (cmd: &Command) -> String {
    cmd.as_std().get_program().to_string_lossy().to_string()
}

/// the full command line of `cmd` as a single (lossy) string
pub fn cmd_line (cmd: &Command) -> String {
    let std_cmd = cmd.as_std();
    let mut line = std_cmd.get_program().to_string_lossy().to_string();
    for arg in std_cmd.get_args() {
        line.push(' ');
        line.push_str( &arg.to_string_lossy());
    }
    line
}

/// run `cmd` to completion, optionally feeding `input` to its stdin, and return its captured output.
/// The child process is killed if it does not terminate within `max_duration`.
/// Note this does not check the exit status - that is up to the caller
pub async fn run_cmd (cmd: &mut Command, input: Option<&str>, max_duration: Duration) -> Result<Output> {
    let program = program_name(cmd);
    debug!("executing {}", cmd_line(cmd));

    cmd
        .stdin( if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout( Stdio::piped())
        .stderr( Stdio::piped())
        .kill_on_drop(true);

    let prog = program.clone();
    let mut child = cmd.spawn().map_err(|e| ProcessError::SpawnError( program.clone(), e.to_string()))?;

    let exec = async move {
        if let (Some(input), Some(mut stdin)) = (input, child.stdin.take()) {
            // a child that exits before reading all its input closes the pipe, its exit status and stderr are reported below
            if let Err(e) = write_input( &mut stdin, input).await {
                if e.kind() != ErrorKind::BrokenPipe { return Err(e) }
                debug!("{} closed its input: {}", prog, e);
            }
        } // stdin is dropped here so that the child sees EOF
        child.wait_with_output().await
    };

    match timeout( max_duration, exec).await {
        Ok(res) => {
            let output = res?;
            debug!("{} completed with status {}", program, output.status);
            Ok(output)
        }
        Err(_) => Err( ProcessError::Timeout( program, max_duration))
    }
}

async fn write_input (stdin: &mut ChildStdin, input: &str) -> std::io::Result<()> {
    stdin.write_all( input.as_bytes()).await?;
    stdin.shutdown().await
}

/// the trimmed stderr of a process output, for error reporting
pub fn stderr_text (output: &Output) -> String {
    String::from_utf8_lossy( &output.stderr).trim().to_string()
}

/// the stdout of a process output
pub fn stdout_text (output: &Output) -> String {
    String::from_utf8_lossy( &output.stdout).to_string()
}
