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

use std::fmt::Write;

use jiff::Zoned;
use jiff::tz::TimeZone;
use log::kv::Key;
use log::kv::Value;
use log::kv::VisitSource;

use crate::Error;
use crate::layout::Layout;

/// A layout that formats log record as plain text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 ERROR daily: src/main.rs:51 Hello error!
/// 2024-08-11T22:44:57.172219+08:00  WARN daily: src/main.rs:52 Hello warn!
/// 2024-08-11T22:44:57.172276+08:00  INFO daily: src/main.rs:53 Hello info! user=tison
/// ```
///
/// You can customize the timezone of the timestamp with [`timezone`](TextLayout::timezone).
/// Otherwise, the system timezone is used.
///
/// # Examples
///
/// ```
/// use logforth_daily_file::layout::TextLayout;
///
/// let layout = TextLayout::default().with_header("=== service started ===");
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    timezone: TimeZone,
    header: Option<String>,
    footer: Option<String>,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            timezone: TimeZone::system(),
            header: None,
            footer: None,
        }
    }
}

impl TextLayout {
    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logforth_daily_file::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set a line written at the top of every opened file.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set a line written at the bottom of every file before it is closed.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

struct KvWriter<'a> {
    text: &'a mut String,
}

impl<'kvs> VisitSource<'kvs> for KvWriter<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), log::kv::Error> {
        write!(self.text, " {key}={value}")
            .map_err(|_| log::kv::Error::msg("failed to write key-value pair"))
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &log::Record) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        let time = Zoned::now().with_time_zone(self.timezone.clone());
        let level = record.level();
        let module = record.module_path().unwrap_or_default();
        let file = record.file().unwrap_or_default();
        let line = record.line().unwrap_or_default();
        let message = record.args();
        write!(
            &mut text,
            "{time} {level:>5} {module}: {file}:{line} {message}",
            time = time.strftime("%Y-%m-%dT%H:%M:%S.%6f%:z"),
        )
        .map_err(Error::from_fmt_error)?;

        let mut visitor = KvWriter { text: &mut text };
        record.key_values().visit(&mut visitor).map_err(|err| {
            Error::new("failed to format key-values").with_source(anyhow::anyhow!("{err}"))
        })?;

        Ok(text.into_bytes())
    }

    fn header(&self) -> Option<Vec<u8>> {
        self.header.as_ref().map(|h| format!("{h}\n").into_bytes())
    }

    fn footer(&self) -> Option<Vec<u8>> {
        self.footer.as_ref().map(|f| format!("{f}\n").into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn test_format_text_line() {
        let layout = TextLayout::default().timezone(TimeZone::UTC);
        let kvs = vec![("user", "tison")];
        let record = log::Record::builder()
            .args(format_args!("hello daily file"))
            .level(Level::Warn)
            .module_path(Some("daily"))
            .file(Some("src/main.rs"))
            .line(Some(42))
            .key_values(&kvs)
            .build();

        let text = String::from_utf8(layout.format(&record).unwrap()).unwrap();
        assert!(
            text.ends_with("  WARN daily: src/main.rs:42 hello daily file user=tison"),
            "{text}"
        );
        assert!(text.contains("+00:00"), "{text}");
    }

    #[test]
    fn test_header_and_footer() {
        let layout = TextLayout::default();
        assert!(layout.header().is_none());
        assert!(layout.footer().is_none());

        let layout = layout.with_header("begin").with_footer("end");
        assert_eq!(layout.header().unwrap(), b"begin\n");
        assert_eq!(layout.footer().unwrap(), b"end\n");
    }
}
