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

//! Appender for writing log records to a single file.
//!
//! # Example
//!
//!```
//! use logforth_daily_file::append::FileAppend;
//! use logforth_daily_file::append::file::File;
//! use logforth_daily_file::layout::TextLayout;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let file = File::new().layout(TextLayout::default());
//! file.set_file(&dir.path().join("app.log"), Some(true)).unwrap();
//!
//! logforth_daily_file::builder()
//!     .dispatch(|d| d.filter(log::LevelFilter::Trace).append(file))
//!     .apply();
//!
//! log::info!("This log will be written to a file.");
//! ```

pub use append::File;

mod append;
mod writer;
