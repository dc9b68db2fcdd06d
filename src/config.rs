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

//! Configuration surface for the daily file appender.
//!
//! Settings are collected into a [`DailyFileConfig`] before anything is resolved, so the order
//! in which `datePattern` and `file` appear in a configuration source does not matter.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr;
//!
//! use logforth_daily_file::config::DailyFileConfig;
//!
//! let config = DailyFileConfig::from_str(
//!     r#"
//!     ; rotate by calendar day
//!     file = logs/daily_%s.log
//!     datePattern = Y-m-d
//!     append = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.file, "logs/daily_%s.log");
//! assert_eq!(config.date_pattern.as_deref(), Some("Y-m-d"));
//! assert_eq!(config.append, Some(true));
//! ```

use std::str::FromStr;

use crate::Error;
use crate::append::DailyFile;
use crate::append::DailyFileBuilder;

const DATE_PATTERN: &str = "datePattern";
const FILE: &str = "file";
const APPEND: &str = "append";

/// The settings of a [`DailyFile`] appender.
///
/// With the `serde` feature, the config can be deserialized from any serde format using the
/// keys `datePattern`, `file` and `append`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct DailyFileConfig {
    /// The date pattern, see [`DatePattern`](crate::append::daily_file::DatePattern).
    pub date_pattern: Option<String>,
    /// The filename template with one `%s` slot.
    pub file: String,
    /// Append to (`true`) or truncate (`false`) an existing file.
    pub append: Option<bool>,
}

impl DailyFileConfig {
    /// Create a config with only the filename template set.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            date_pattern: None,
            file: file.into(),
            append: None,
        }
    }

    /// Collect a config from `key`/`value` settings.
    ///
    /// Recognized keys are `datePattern`, `file` and `append`. When a key repeats, the last value
    /// wins. `append` accepts `true`, `false`, `1`, `0`, `yes`, `no`, `on` and `off`, in any case.
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * A key is not recognized.
    /// * The `append` value is not a boolean.
    /// * The `file` key is missing.
    pub fn from_properties<'a, I>(properties: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut date_pattern = None;
        let mut file = None;
        let mut append = None;

        for (key, value) in properties {
            match key.trim() {
                DATE_PATTERN => date_pattern = Some(value.to_string()),
                FILE => file = Some(value.to_string()),
                APPEND => append = Some(parse_bool(APPEND, value)?),
                other => {
                    return Err(Error::new("unknown daily file appender property")
                        .with_context("key", other));
                }
            }
        }

        let file = file.ok_or_else(|| {
            Error::new("missing daily file appender property").with_context("key", FILE)
        })?;
        Ok(Self {
            date_pattern,
            file,
            append,
        })
    }

    /// Create a [`DailyFileBuilder`] carrying these settings.
    pub fn builder(&self) -> DailyFileBuilder {
        let mut builder = DailyFileBuilder::new(self.file.clone());
        if let Some(pattern) = &self.date_pattern {
            builder = builder.date_pattern(pattern.as_str());
        }
        if let Some(append) = self.append {
            builder = builder.append(append);
        }
        builder
    }

    /// Build the [`DailyFile`] appender described by these settings.
    ///
    /// # Errors
    ///
    /// See [`DailyFileBuilder::build`].
    pub fn build(&self) -> Result<DailyFile, Error> {
        self.builder().build()
    }
}

impl FromStr for DailyFileConfig {
    type Err = Error;

    /// Parse `key = value` lines. Blank lines and lines starting with `#` or `;` are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut properties = vec![];
        for (n, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                Error::new("malformed daily file appender property")
                    .with_context("line", n + 1)
                    .with_context("text", line)
            })?;
            properties.push((key.trim(), value.trim()));
        }
        Self::from_properties(properties)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::new("invalid boolean property value")
            .with_context("key", key)
            .with_context("value", value)),
    }
}
