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

//! Appender for writing log records to a file named after the current date.
//!
//! The filename is a template with a `%s` slot, filled with today's date rendered by a
//! [`DatePattern`]. The name is resolved once, when the appender is built (or when
//! [`DailyFile::set_file`] is called again), and the file is then written by a base
//! [`FileAppend`](crate::append::FileAppend) appender. The appender does not switch files when
//! the date changes while the process runs.
//!
//! # Example
//!
//!```
//! use logforth_daily_file::append::DailyFileBuilder;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let daily = DailyFileBuilder::new(dir.path().join("daily_%s.log").display().to_string())
//!     .date_pattern("Y-m-d")
//!     .append(true)
//!     .build()
//!     .unwrap();
//!
//! logforth_daily_file::builder()
//!     .dispatch(|d| d.filter(log::LevelFilter::Trace).append(daily))
//!     .apply();
//!
//! log::info!("This log will be written to a date-stamped file.");
//! ```

pub use self::append::DailyFile;
pub use self::append::DailyFileBuilder;
pub use self::pattern::DatePattern;
pub use self::template::FilenameTemplate;

mod append;
mod clock;
mod pattern;
mod template;
