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

use jiff::Zoned;

/// Where "today" comes from when a filename is resolved.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    #[default]
    System,
    /// A frozen instant that tests move by hand.
    #[cfg(test)]
    Fixed(Zoned),
}

impl Clock {
    pub fn now(&self) -> Zoned {
        match self {
            Clock::System => Zoned::now(),
            #[cfg(test)]
            Clock::Fixed(now) => now.clone(),
        }
    }

    #[cfg(test)]
    pub fn fixed(now: &str) -> Clock {
        Clock::Fixed(now.parse().unwrap())
    }

    #[cfg(test)]
    pub fn advance_to(&mut self, now: &str) {
        *self = Clock::fixed(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let mut clock = Clock::fixed("2009-09-08T17:12:52+08[+08]");
        assert_eq!(clock.now().date(), jiff::civil::date(2009, 9, 8));

        clock.advance_to("2024-03-05T12:00:00+00[UTC]");
        assert_eq!(clock.now().date(), jiff::civil::date(2024, 3, 5));
        assert_eq!(clock.now().hour(), 12);
    }

    #[test]
    fn test_system_clock_is_default() {
        assert!(matches!(Clock::default(), Clock::System));
    }
}
