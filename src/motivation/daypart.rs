use std::fmt;

/// Coarse time-of-day bucket derived from an hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Classify an hour of day
    ///
    /// `[5,12)` is morning, `[12,16)` afternoon, `[16,21)` evening and
    /// everything else, including out-of-range values, is night.
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=15 => Self::Afternoon,
            16..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hour_of_day() {
        for hour in 0..24 {
            let expected = if (5..12).contains(&hour) {
                TimeOfDay::Morning
            } else if (12..16).contains(&hour) {
                TimeOfDay::Afternoon
            } else if (16..21).contains(&hour) {
                TimeOfDay::Evening
            } else {
                TimeOfDay::Night
            };
            assert_eq!(TimeOfDay::from_hour(hour), expected, "hour {hour}");
        }
    }

    #[test]
    fn test_boundary_hours() {
        let cases = [
            (4, TimeOfDay::Night),
            (5, TimeOfDay::Morning),
            (11, TimeOfDay::Morning),
            (12, TimeOfDay::Afternoon),
            (15, TimeOfDay::Afternoon),
            (16, TimeOfDay::Evening),
            (20, TimeOfDay::Evening),
            (21, TimeOfDay::Night),
        ];
        for (hour, bucket) in cases {
            assert_eq!(TimeOfDay::from_hour(hour), bucket, "hour {hour}");
        }
    }

    #[test]
    fn test_out_of_range_is_night() {
        assert_eq!(TimeOfDay::from_hour(24), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(u32::MAX), TimeOfDay::Night);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeOfDay::Afternoon.to_string(), "afternoon");
    }
}
