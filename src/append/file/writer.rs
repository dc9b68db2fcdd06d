// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;

/// A writer for one opened log file.
#[derive(Debug)]
pub(super) struct FileWriter {
    path: PathBuf,
    writer: fs::File,
}

impl FileWriter {
    pub(super) fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// A builder for configuring [`FileWriter`].
#[derive(Debug)]
pub(super) struct FileWriterBuilder {
    // required
    filepath: PathBuf,

    // optional
    append: bool,
}

impl FileWriterBuilder {
    #[must_use]
    pub(super) fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            append: true,
        }
    }

    /// Append to an existing file instead of truncating it. Default to `true`.
    #[must_use]
    pub(super) fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub(super) fn build(self) -> Result<FileWriter, Error> {
        let FileWriterBuilder { filepath, append } = self;
        if filepath.as_os_str().is_empty() {
            return Err(Error::new("log file path is empty"));
        }

        if let Some(dir) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_path(dir)
                    .with_source(err)
            })?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let writer = options.open(&filepath).map_err(|err| {
            Error::new("failed to open log file")
                .with_path(&filepath)
                .with_source(err)
        })?;

        Ok(FileWriter {
            path: filepath,
            writer,
        })
    }
}
