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

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::append::FileAppend;
use crate::append::file::writer::FileWriter;
use crate::append::file::writer::FileWriterBuilder;
use crate::layout::TextLayout;

/// An appender that writes log records to a single file.
///
/// No file is opened on construction. Point the appender at a file with
/// [`FileAppend::set_file`]; records appended before that fail with an error.
///
/// Writes are serialized by an internal mutex, so the appender can be shared by concurrent
/// loggers. The file is closed, with the layout footer written, when the appender is dropped.
#[derive(Debug)]
pub struct File {
    layout: Box<dyn Layout>,
    writer: Mutex<Option<FileWriter>>,
}

impl Default for File {
    fn default() -> Self {
        Self::new()
    }
}

impl File {
    /// Create a new file appender with no file opened.
    pub fn new() -> Self {
        Self {
            layout: Box::new(TextLayout::default()),
            writer: Mutex::new(None),
        }
    }

    /// Set the layout for the logs.
    ///
    /// Default to [`TextLayout`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logforth_daily_file::append::File;
    /// use logforth_daily_file::layout::TextLayout;
    ///
    /// let file = File::new().layout(TextLayout::default().timezone(TimeZone::UTC));
    /// ```
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Return the path of the currently opened file, if any.
    pub fn path(&self) -> Option<PathBuf> {
        self.writer().as_ref().map(|w| w.path().to_path_buf())
    }

    fn writer(&self) -> MutexGuard<'_, Option<FileWriter>> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn finish(layout: &dyn Layout, mut writer: FileWriter) -> Result<(), Error> {
    if let Some(footer) = layout.footer() {
        writer
            .write_all(&footer)
            .map_err(|err| Error::from_io_error(err).with_path(writer.path()))?;
    }
    writer
        .flush()
        .map_err(|err| Error::from_io_error(err).with_path(writer.path()))
}

impl Append for File {
    fn append(&self, record: &log::Record) -> Result<(), Error> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');
        let mut writer = self.writer();
        let writer = writer
            .as_mut()
            .ok_or_else(|| Error::new("log file is not set"))?;
        writer
            .write_all(&bytes)
            .map_err(|err| Error::from_io_error(err).with_path(writer.path()))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        if let Some(writer) = self.writer().as_mut() {
            writer
                .flush()
                .map_err(|err| Error::from_io_error(err).with_path(writer.path()))?;
        }
        Ok(())
    }
}

impl FileAppend for File {
    fn set_file(&self, path: &Path, append: Option<bool>) -> Result<(), Error> {
        let mut current = self.writer();
        // reopening the same file must not interleave with the old handle
        if current.as_ref().is_some_and(|w| w.path() == path) {
            if let Some(previous) = current.take() {
                finish(self.layout.as_ref(), previous)?;
            }
        }

        // the previous file stays in use until the new one is ready
        let mut writer = FileWriterBuilder::new(path)
            .append(append.unwrap_or(true))
            .build()?;
        if let Some(header) = self.layout.header() {
            writer
                .write_all(&header)
                .map_err(|err| Error::from_io_error(err).with_path(path))?;
        }

        if let Some(previous) = current.replace(writer) {
            let previous_path = previous.path().to_path_buf();
            if let Err(err) = finish(self.layout.as_ref(), previous) {
                eprintln!(
                    "failed to close log file {}: {err}",
                    previous_path.display()
                );
            }
        }
        Ok(())
    }

    fn close(&self) -> Result<(), Error> {
        match self.writer().take() {
            Some(writer) => finish(self.layout.as_ref(), writer),
            None => Ok(()),
        }
    }
}

impl Drop for File {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(writer) = writer.take() {
            let path = writer.path().to_path_buf();
            if let Err(err) = finish(self.layout.as_ref(), writer) {
                eprintln!("failed to close log file {}: {err}", path.display());
            }
        }
    }
}
