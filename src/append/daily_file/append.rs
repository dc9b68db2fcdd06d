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

use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::append::File;
use crate::append::FileAppend;
use crate::append::daily_file::clock::Clock;
use crate::append::daily_file::pattern::DatePattern;
use crate::append::daily_file::template::FilenameTemplate;

/// A builder to configure and create a [`DailyFile`] appender.
///
/// The builder collects the whole configuration first, so the order in which the date pattern
/// and the filename template are given does not matter. The filename is resolved exactly once,
/// in [`build`](DailyFileBuilder::build).
#[derive(Debug)]
pub struct DailyFileBuilder {
    template: String,
    date_pattern: DatePattern,
    append: Option<bool>,
    timezone: Option<TimeZone>,
    layout: Option<Box<dyn Layout>>,
    clock: Clock,
}

impl DailyFileBuilder {
    /// Create a new builder for the given filename template, such as `"logs/daily_%s.log"`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            date_pattern: DatePattern::default(),
            append: None,
            timezone: None,
            layout: None,
            clock: Clock::default(),
        }
    }

    /// Set the date pattern substituted into the filename.
    ///
    /// Default to [`DatePattern::DEFAULT`] (`Ymd`).
    pub fn date_pattern(mut self, pattern: impl Into<DatePattern>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    /// Return the configured date pattern.
    pub fn get_date_pattern(&self) -> &DatePattern {
        &self.date_pattern
    }

    /// Append to an existing file (`true`) or truncate it (`false`).
    ///
    /// If not set, the base appender decides; [`File`] appends.
    pub fn append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }

    /// Set the time zone in which "today" is determined.
    ///
    /// Defaults to the system time zone if not set.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Set the layout of the default [`File`] base appender.
    ///
    /// Ignored by [`build_with`](DailyFileBuilder::build_with), where the given base appender
    /// carries its own layout.
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build the [`DailyFile`] appender on top of a [`File`] appender.
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The filename template is empty or has more than one `%s` slot.
    /// * The log directory cannot be created or the log file cannot be opened.
    pub fn build(mut self) -> Result<DailyFile, Error> {
        let file = match self.layout.take() {
            Some(layout) => File::new().layout(layout),
            None => File::new(),
        };
        self.build_with(file)
    }

    /// Build the [`DailyFile`] appender on top of the given base appender.
    ///
    /// The resolved filename and the append flag are passed to
    /// [`FileAppend::set_file`]; any error it returns is propagated unchanged.
    pub fn build_with<F: FileAppend>(self, base: F) -> Result<DailyFile<F>, Error> {
        let DailyFileBuilder {
            template,
            date_pattern,
            append,
            timezone,
            layout: _,
            clock,
        } = self;

        let template = FilenameTemplate::parse(template)?;
        let now = today(&clock, timezone.as_ref());
        let filename = resolve(&template, &date_pattern, &now)?;
        base.set_file(&filename, append)?;
        Ok(DailyFile {
            date_pattern,
            timezone,
            clock,
            filename,
            inner: base,
        })
    }
}

/// An appender that writes log records to a file named after the current date.
///
/// Writing, flushing and closing are delegated to the base appender `F`. The base appender is
/// closed when the [`DailyFile`] is dropped.
///
/// # Examples
///
/// ```
/// use logforth_daily_file::append::DailyFileBuilder;
///
/// let dir = tempfile::tempdir().unwrap();
/// let template = dir.path().join("app_%s.log").display().to_string();
/// let daily = DailyFileBuilder::new(template).build().unwrap();
/// assert_eq!(daily.date_pattern().as_str(), "Ymd");
/// assert!(daily.filename().starts_with(dir.path()));
/// ```
#[derive(Debug)]
pub struct DailyFile<F: FileAppend = File> {
    date_pattern: DatePattern,
    timezone: Option<TimeZone>,
    clock: Clock,
    filename: PathBuf,
    inner: F,
}

impl<F: FileAppend> DailyFile<F> {
    /// Return the date pattern used by the next [`set_file`](DailyFile::set_file) call.
    pub fn date_pattern(&self) -> &DatePattern {
        &self.date_pattern
    }

    /// Replace the date pattern.
    ///
    /// The currently resolved filename is not changed; the new pattern takes effect on the next
    /// [`set_file`](DailyFile::set_file) call.
    pub fn set_date_pattern(&mut self, pattern: impl Into<DatePattern>) {
        self.date_pattern = pattern.into();
    }

    /// Return the filename resolved from the template and the date.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Return the base appender.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Resolve `template` against the current date and the current date pattern, then point the
    /// base appender at the resulting file.
    ///
    /// On error the previously resolved filename is kept, and so is the file the base appender
    /// writes to.
    pub fn set_file(&mut self, template: &str, append: Option<bool>) -> Result<(), Error> {
        let template = FilenameTemplate::parse(template)?;
        let now = today(&self.clock, self.timezone.as_ref());
        let filename = resolve(&template, &self.date_pattern, &now)?;
        self.inner.set_file(&filename, append)?;
        self.filename = filename;
        Ok(())
    }

    #[cfg(test)]
    fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

fn today(clock: &Clock, timezone: Option<&TimeZone>) -> Zoned {
    let now = clock.now();
    match timezone {
        Some(tz) => now.with_time_zone(tz.clone()),
        None => now,
    }
}

fn resolve(
    template: &FilenameTemplate,
    pattern: &DatePattern,
    now: &Zoned,
) -> Result<PathBuf, Error> {
    let date = pattern.format(now)?;
    Ok(template.render(&date))
}

impl<F: FileAppend> Append for DailyFile<F> {
    fn append(&self, record: &log::Record) -> Result<(), Error> {
        self.inner.append(record)
    }

    fn flush(&self) -> Result<(), Error> {
        self.inner.flush()
    }
}

impl<F: FileAppend> Drop for DailyFile<F> {
    fn drop(&mut self) {
        if let Err(err) = self.inner.close() {
            eprintln!(
                "failed to close daily log file {}: {err}",
                self.filename.display()
            );
        }
    }
}
