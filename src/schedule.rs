use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Zero padded 24 hour wall clock, the only accepted input shape.
const HH_MM: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Local time
    Daily(time::Time),
}

#[derive(Debug, thiserror::Error)]
#[error("not a 24 hour HH:MM clock time: `{input}`")]
pub struct InvalidTime {
    input: String,
    #[source]
    source: time::error::Parse,
}

impl Schedule {
    /// Parse a strict `HH:MM` wall clock time into a daily schedule.
    pub fn daily_at(input: &str) -> Result<Self, InvalidTime> {
        let time = time::Time::parse(input, HH_MM).map_err(|source| InvalidTime {
            input: input.to_owned(),
            source,
        })?;
        Ok(Self::Daily(time))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parsed(input: &str) -> time::Time {
        let Schedule::Daily(time) = Schedule::daily_at(input).unwrap();
        time
    }

    #[test]
    fn round_trips() {
        for (input, hour, minute) in [
            ("00:00", 0, 0),
            ("09:05", 9, 5),
            ("22:30", 22, 30),
            ("23:59", 23, 59),
        ] {
            let time = parsed(input);
            assert_eq!(time.hour(), hour);
            assert_eq!(time.minute(), minute);
        }
    }

    #[test]
    fn out_of_range_hour() {
        assert!(Schedule::daily_at("25:00").is_err());
        assert!(Schedule::daily_at("24:00").is_err());
    }

    #[test]
    fn out_of_range_minute() {
        assert!(Schedule::daily_at("12:60").is_err());
    }

    #[test]
    fn unpadded() {
        assert!(Schedule::daily_at("9:5").is_err());
        assert!(Schedule::daily_at("9:30").is_err());
    }

    #[test]
    fn garbage() {
        assert!(Schedule::daily_at("abc").is_err());
        assert!(Schedule::daily_at("").is_err());
        assert!(Schedule::daily_at("22:30:00").is_err());
        assert!(Schedule::daily_at("22-30").is_err());
    }

    #[test]
    fn error_names_the_input() {
        let err = Schedule::daily_at("8 pm").unwrap_err();
        assert!(err.to_string().contains("8 pm"));
    }
}
