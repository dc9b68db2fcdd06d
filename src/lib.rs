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

//! A date-stamped file appender for the [`log`] crate, built in the manner of Logforth.
//!
//! # Overview
//!
//! [`DailyFile`](append::DailyFile) writes log records to a file whose name is a template with the
//! current date substituted in, such as `logs/daily_20090908.log`. The date is rendered with a
//! [`DatePattern`](append::daily_file::DatePattern) (default `Ymd`) and the filename is resolved
//! once, when the appender is built. All file I/O is delegated to a base
//! [`FileAppend`](append::FileAppend) appender, [`File`](append::File) by default.
//!
//! # Examples
//!
//! ```
//! use log::LevelFilter;
//! use logforth_daily_file::append::DailyFileBuilder;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let template = dir.path().join("daily_%s.log").display().to_string();
//! let daily = DailyFileBuilder::new(template)
//!     .date_pattern("Y-m-d")
//!     .build()
//!     .unwrap();
//!
//! logforth_daily_file::builder()
//!     .dispatch(|d| d.filter(LevelFilter::Info).append(daily))
//!     .apply();
//!
//! log::info!("This is an info message.");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod config;
pub mod layout;

pub use append::Append;
pub use layout::Layout;

mod error;
pub use error::Error;

mod logger;
pub use logger::*;
