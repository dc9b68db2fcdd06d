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

//! Dispatch log records to files.

use std::fmt;
use std::path::Path;

use crate::Error;

pub mod daily_file;
pub mod file;

pub use self::daily_file::DailyFile;
pub use self::daily_file::DailyFileBuilder;
pub use self::file::File;

/// An appender that can process log records.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Dispatch a log record to the append target.
    fn append(&self, record: &log::Record) -> Result<(), Error>;

    /// Flush any buffered records.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// An appender that writes to one file at a time and can be pointed at a new file.
///
/// This is the capability [`DailyFile`] delegates to once it has resolved a date-stamped
/// filename. [`File`] is the default implementation.
pub trait FileAppend: Append {
    /// Open `path` as the current log file, releasing the previous one if any.
    ///
    /// `append` selects between appending to an existing file (`Some(true)`) and truncating it
    /// (`Some(false)`). `None` leaves the choice to the implementation.
    ///
    /// If `path` cannot be opened, an error is returned and records keep going to the previous
    /// file.
    fn set_file(&self, path: &Path, append: Option<bool>) -> Result<(), Error>;

    /// Release the current log file. Closing an appender with no open file is a no-op.
    fn close(&self) -> Result<(), Error>;
}
