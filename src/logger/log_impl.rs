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

use log::LevelFilter;
use log::Metadata;
use log::Record;

use crate::Append;
use crate::Error;

/// A logger facade that dispatches log records to one or more dispatches.
///
/// This struct implements [`log::Log`] to bridge the appenders of this crate with the [`log`]
/// crate.
#[derive(Debug)]
pub struct Logger {
    dispatches: Vec<Dispatch>,
}

impl Logger {
    pub(super) fn new(dispatches: Vec<Dispatch>) -> Self {
        Self { dispatches }
    }

    pub(super) fn max_level(&self) -> LevelFilter {
        self.dispatches
            .iter()
            .map(|dispatch| dispatch.level)
            .max()
            .unwrap_or(LevelFilter::Off)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.dispatches
            .iter()
            .any(|dispatch| dispatch.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        for dispatch in &self.dispatches {
            if let Err(err) = dispatch.log(record) {
                handle_log_error(record, err);
            }
        }
    }

    fn flush(&self) {
        for dispatch in &self.dispatches {
            if let Err(err) = dispatch.flush() {
                handle_flush_error(err);
            }
        }
    }
}

/// A level filter and the appenders records passing it are sent to.
#[derive(Debug)]
pub(super) struct Dispatch {
    level: LevelFilter,
    appends: Vec<Box<dyn Append>>,
}

impl Dispatch {
    pub(super) fn new(level: LevelFilter, appends: Vec<Box<dyn Append>>) -> Self {
        debug_assert!(
            !appends.is_empty(),
            "A Dispatch must have at least one append"
        );

        Self { level, appends }
    }

    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) -> Result<(), Error> {
        if !self.enabled(record.metadata()) {
            return Ok(());
        }

        for append in &self.appends {
            append.append(record)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        for append in &self.appends {
            append.flush()?;
        }
        Ok(())
    }
}

fn handle_log_error(record: &Record, error: Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error perform logging.
    Attempted to log: {args}
    Record: {record:?}
    Error: {error:?}
"###,
        args = record.args(),
        record = record,
        error = error,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular logging.
    Attempted to log: {args}
    Record: {record:?}
    Error: {error:?}
    Fallback error: {fallback_error}
"###,
        args = record.args(),
        record = record,
        error = error,
        fallback_error = fallback_error,
    );
}

fn handle_flush_error(error: Error) {
    let Err(fallback_error) = write!(
        std::io::stderr(),
        r###"
Error perform flush.
    Error: {error:?}
"###,
    ) else {
        return;
    };

    panic!(
        r###"
Error performing stderr logging after error occurred during regular flush.
    Error: {error:?}
    Fallback error: {fallback_error}
"###,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use log::Level;
    use log::Log;

    use super::*;
    use crate::logger::builder;

    #[derive(Debug, Default, Clone)]
    struct Collect {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl Append for Collect {
        fn append(&self, record: &Record) -> Result<(), Error> {
            self.messages.lock().unwrap().push(record.args().to_string());
            Ok(())
        }
    }

    fn log_at(logger: &Logger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .build(),
        );
    }

    #[test]
    fn test_dispatch_level_filter() {
        let errors = Collect::default();
        let everything = Collect::default();
        let logger = builder()
            .dispatch(|d| d.filter(LevelFilter::Error).append(errors.clone()))
            .dispatch(|d| d.append(everything.clone()))
            .build();

        log_at(&logger, Level::Error, "boom");
        log_at(&logger, Level::Debug, "details");
        logger.flush();

        assert_eq!(*errors.messages.lock().unwrap(), vec!["boom"]);
        assert_eq!(*everything.messages.lock().unwrap(), vec!["boom", "details"]);
        assert_eq!(logger.max_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_enabled_and_max_level() {
        let logger = builder()
            .dispatch(|d| d.filter(LevelFilter::Warn).append(Collect::default()))
            .dispatch(|d| d.filter(LevelFilter::Info).append(Collect::default()))
            .build();

        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
        assert_eq!(logger.max_level(), LevelFilter::Info);

        assert_eq!(builder().build().max_level(), LevelFilter::Off);
    }
}
