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

use std::fmt;
use std::path::PathBuf;

use crate::Error;

/// A filename with one `%s` slot for the formatted date, such as `logs/daily_%s.log`.
///
/// `%%` stands for a literal `%`. Any other `%` sequence is kept as written. A template without a
/// slot is used as the filename unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    template: String,
    // text around the slot, with `%%` already unescaped; one segment when there is no slot
    segments: Vec<String>,
}

impl FilenameTemplate {
    /// Parse a filename template.
    ///
    /// # Errors
    ///
    /// Return an error if the template is empty or has more than one `%s` slot.
    pub fn parse(template: impl Into<String>) -> Result<Self, Error> {
        let template = template.into();
        if template.is_empty() {
            return Err(Error::new("log file template is empty"));
        }

        let mut segments = vec![];
        let mut current = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                ('%', Some('s')) => {
                    chars.next();
                    segments.push(std::mem::take(&mut current));
                }
                ('%', Some('%')) => {
                    chars.next();
                    current.push('%');
                }
                (c, _) => current.push(c),
            }
        }
        segments.push(current);

        if segments.len() > 2 {
            return Err(Error::new("log file template has more than one date placeholder")
                .with_context("template", &template)
                .with_context("placeholders", segments.len() - 1));
        }

        Ok(Self { template, segments })
    }

    /// Return the template as written.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Return whether the template has a date slot.
    pub fn has_placeholder(&self) -> bool {
        self.segments.len() == 2
    }

    /// Fill the slot with `date`.
    pub fn render(&self, date: &str) -> PathBuf {
        PathBuf::from(self.segments.join(date))
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_render_placeholder() {
        let template = FilenameTemplate::parse("logs/app_%s.txt").unwrap();
        assert!(template.has_placeholder());
        assert_eq!(template.as_str(), "logs/app_%s.txt");
        assert_eq!(
            template.render("2024-03-05"),
            Path::new("logs/app_2024-03-05.txt")
        );
    }

    #[test]
    fn test_render_escapes() {
        let template = FilenameTemplate::parse("100%%_%s_%d.log").unwrap();
        assert_eq!(template.render("20090908"), Path::new("100%_20090908_%d.log"));

        let template = FilenameTemplate::parse("trailing_%s%").unwrap();
        assert_eq!(template.render("x"), Path::new("trailing_x%"));
    }

    #[test]
    fn test_template_without_placeholder() {
        let template = FilenameTemplate::parse("static.log").unwrap();
        assert!(!template.has_placeholder());
        assert_eq!(template.render("20090908"), Path::new("static.log"));
    }

    #[test]
    fn test_invalid_templates() {
        let err = FilenameTemplate::parse("").unwrap_err();
        assert_eq!(err.message(), "log file template is empty");

        let err = FilenameTemplate::parse("%s/daily_%s.log").unwrap_err();
        assert_eq!(
            err.message(),
            "log file template has more than one date placeholder"
        );
        assert_eq!(err.context("placeholders"), Some("2"));
    }
}
