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
use std::fmt::Write;

use jiff::Zoned;
use jiff::fmt::strtime;

use crate::Error;

/// A pattern rendering a date into the log filename.
///
/// The pattern uses the single-letter tokens of PHP's `date()` function, the convention the
/// `datePattern` setting of daily file appenders has always been written in:
///
/// | Token | Output | Example |
/// | --- | --- | --- |
/// | `d` | day of month, two digits | `05` |
/// | `j` | day of month, no padding | `5` |
/// | `D` / `l` | weekday, short / full | `Tue` / `Tuesday` |
/// | `N` / `w` | ISO weekday 1-7 / weekday 0-6 from Sunday | `2` / `2` |
/// | `S` | English ordinal suffix of the day | `th` |
/// | `z` | day of year from 0 | `64` |
/// | `W` / `o` | ISO week number / ISO week-numbering year | `10` / `2024` |
/// | `F` / `M` | month name, full / short | `March` / `Mar` |
/// | `m` / `n` | month, two digits / no padding | `03` / `3` |
/// | `t` | days in the month | `31` |
/// | `L` | `1` in a leap year, `0` otherwise | `1` |
/// | `Y` / `y` | year, four / two digits | `2024` / `24` |
/// | `a` / `A` | `am`/`pm`, `AM`/`PM` | `pm` |
/// | `g` / `h` | 12-hour clock, no padding / two digits | `1` / `01` |
/// | `G` / `H` | 24-hour clock, no padding / two digits | `13` / `13` |
/// | `i` / `s` | minutes / seconds, two digits | `04` / `05` |
/// | `u` / `v` | microseconds / milliseconds | `000000` / `000` |
/// | `e` / `T` | time zone identifier / abbreviation | `UTC` / `UTC` |
/// | `O` / `P` / `p` | offset `+0000` / `+00:00` / `Z` for UTC | `+0000` |
/// | `Z` | offset in seconds | `0` |
/// | `c` / `r` | ISO 8601 / RFC 2822 date | `2024-03-05T13:04:05+00:00` |
/// | `U` | seconds since the Unix epoch | `1709643845` |
///
/// A backslash outputs the next character literally. Any other character, including letters
/// that are not tokens, is copied to the output unchanged. Patterns are never validated.
///
/// The default pattern is `Ymd`, rendering `20090908` for the 8th of September 2009.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use jiff::Zoned;
/// use logforth_daily_file::append::daily_file::DatePattern;
///
/// let now = Zoned::from_str("2024-03-05T13:04:05+00[UTC]").unwrap();
/// let pattern = DatePattern::new("Y-m-d");
/// assert_eq!(pattern.format(&now).unwrap(), "2024-03-05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatePattern {
    pattern: String,
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl DatePattern {
    /// The default pattern: four-digit year, two-digit month, two-digit day.
    pub const DEFAULT: &'static str = "Ymd";

    /// Create a date pattern. The pattern is stored verbatim.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Return the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Render `now` according to this pattern.
    ///
    /// # Errors
    ///
    /// Return an error if the underlying time formatter fails, which happens only for dates it
    /// cannot represent.
    pub fn format(&self, now: &Zoned) -> Result<String, Error> {
        let format = self.to_strftime(now);
        strtime::format(format.as_bytes(), now).map_err(|err| {
            Error::new("failed to format date pattern")
                .with_context("pattern", &self.pattern)
                .with_source(err)
        })
    }

    /// Translate the pattern into a `strftime` format. Tokens that `strftime` lacks are
    /// computed from `now` and embedded as literals.
    fn to_strftime(&self, now: &Zoned) -> String {
        let mut out = String::with_capacity(self.pattern.len() * 2);
        let mut chars = self.pattern.chars();
        while let Some(c) = chars.next() {
            let directive = match c {
                'd' => "%d",
                'D' => "%a",
                'j' => "%-d",
                'l' => "%A",
                'N' => "%u",
                'w' => "%w",
                'W' => "%V",
                'F' => "%B",
                'm' => "%m",
                'M' => "%b",
                'n' => "%-m",
                'o' => "%G",
                'Y' => "%Y",
                'y' => "%y",
                'a' => "%P",
                'A' => "%p",
                'g' => "%-I",
                'G' => "%-H",
                'h' => "%I",
                'H' => "%H",
                'i' => "%M",
                's' => "%S",
                'u' => "%6f",
                'v' => "%3f",
                // zones without an IANA name render as `+08:00`
                'e' => "%:Q",
                'O' => "%z",
                'P' => "%:z",
                'T' => "%Z",
                'c' => "%Y-%m-%dT%H:%M:%S%:z",
                'r' => "%a, %d %b %Y %H:%M:%S %z",
                'U' => "%s",
                'p' if now.offset().seconds() == 0 => "Z",
                'p' => "%:z",
                'S' => ordinal_suffix(now.day()),
                'z' => {
                    push_literal(&mut out, now.day_of_year() - 1);
                    continue;
                }
                't' => {
                    push_literal(&mut out, now.days_in_month());
                    continue;
                }
                'L' => {
                    push_literal(&mut out, u8::from(now.in_leap_year()));
                    continue;
                }
                'Z' => {
                    push_literal(&mut out, now.offset().seconds());
                    continue;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        push_char(&mut out, next);
                    }
                    continue;
                }
                other => {
                    push_char(&mut out, other);
                    continue;
                }
            };
            out.push_str(directive);
        }
        out
    }
}

fn ordinal_suffix(day: i8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn push_char(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

// numbers never contain '%', so no escaping
fn push_literal(out: &mut String, value: impl fmt::Display) {
    let _ = write!(out, "{value}");
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<&str> for DatePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DatePattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn zoned(s: &str) -> Zoned {
        Zoned::from_str(s).unwrap()
    }

    fn render(pattern: &str, now: &str) -> String {
        DatePattern::new(pattern).format(&zoned(now)).unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let pattern = DatePattern::default();
        assert_eq!(pattern.as_str(), "Ymd");
        assert_eq!(
            pattern.format(&zoned("2009-09-08T17:12:52+08[+08]")).unwrap(),
            "20090908"
        );
    }

    #[test]
    fn test_date_tokens() {
        let now = "2024-03-05T13:04:05+00[UTC]";
        assert_eq!(render("Y-m-d", now), "2024-03-05");
        assert_eq!(render("y/n/j", now), "24/3/5");
        assert_eq!(render("D l N w", now), "Tue Tuesday 2 2");
        assert_eq!(render("M F", now), "Mar March");
        assert_eq!(render("z t L", now), "64 31 1");
        assert_eq!(render("W o", now), "10 2024");
        assert_eq!(render("W o", "2021-01-01T00:00:00+00[UTC]"), "53 2020");
    }

    #[test]
    fn test_time_tokens() {
        let now = "2024-03-05T13:04:05.123456+00[UTC]";
        assert_eq!(render("H:i:s", now), "13:04:05");
        assert_eq!(render("G g h a A", now), "13 1 01 pm PM");
        assert_eq!(render("u v", now), "123456 123");
        assert_eq!(render("U", "2024-03-05T00:00:00+00[UTC]"), "1709596800");
    }

    #[test]
    fn test_zone_tokens() {
        let utc = "2024-03-05T13:04:05+00[UTC]";
        assert_eq!(render("O P p Z", utc), "+0000 +00:00 Z 0");
        assert_eq!(render("c", utc), "2024-03-05T13:04:05+00:00");
        assert_eq!(render("r", utc), "Tue, 05 Mar 2024 13:04:05 +0000");

        let shanghai = "2024-03-05T13:04:05+08[+08]";
        assert_eq!(render("O P p Z", shanghai), "+0800 +08:00 +08:00 28800");
    }

    #[test]
    fn test_zone_identifier() {
        assert_eq!(render("e", "2024-03-05T13:04:05+00[UTC]"), "UTC");
        assert_eq!(render("e", "2024-03-05T13:04:05+08[+08]"), "+08:00");
        assert_eq!(render("e", "2024-03-05T13:04:05-05:30[-05:30]"), "-05:30");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(render("jS", "2024-03-01T00:00:00+00[UTC]"), "1st");
        assert_eq!(render("jS", "2024-03-02T00:00:00+00[UTC]"), "2nd");
        assert_eq!(render("jS", "2024-03-03T00:00:00+00[UTC]"), "3rd");
        assert_eq!(render("jS", "2024-03-11T00:00:00+00[UTC]"), "11th");
        assert_eq!(render("jS", "2024-03-12T00:00:00+00[UTC]"), "12th");
        assert_eq!(render("jS", "2024-03-22T00:00:00+00[UTC]"), "22nd");
        assert_eq!(render("jS", "2024-03-31T00:00:00+00[UTC]"), "31st");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let now = "2024-03-05T13:04:05+00[UTC]";
        assert_eq!(render("Q_Y", now), "Q_2024");
        assert_eq!(render("Ymd-#1", now), "20240305-#1");
        assert_eq!(render("100%", now), "100%");
        assert_eq!(render("%Y", now), "%2024");
        assert_eq!(render("", now), "");
    }

    #[test]
    fn test_backslash_escapes() {
        let now = "2024-03-05T13:04:05+00[UTC]";
        assert_eq!(render(r"\Y\m\d", now), "Ymd");
        assert_eq!(render(r"Y\-m", now), "2024-03");
        assert_eq!(render(r"\\Y", now), r"\2024");
        assert_eq!(render(r"Y\", now), "2024");
    }
}
