//! Motion tokens: animation intensity, durations, and amplitudes

use serde::{Deserialize, Serialize};

/// Animation intensity level
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionLevel {
    None,
    Subtle,
    Regular,
    Loud,
}

impl MotionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Regular => "regular",
            Self::Loud => "loud",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "subtle" => Some(Self::Subtle),
            "regular" => Some(Self::Regular),
            "loud" => Some(Self::Loud),
            _ => None,
        }
    }
}

/// Named animation duration keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
    Slower,
}

/// CSS duration strings per named duration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationTokens {
    pub fast: String,
    pub normal: String,
    pub slow: String,
    pub slower: String,
}

impl DurationTokens {
    fn new(fast: &str, normal: &str, slow: &str, slower: &str) -> Self {
        Self {
            fast: fast.to_string(),
            normal: normal.to_string(),
            slow: slow.to_string(),
            slower: slower.to_string(),
        }
    }

    /// Get a duration string by token key
    pub fn get(&self, token: DurationToken) -> &str {
        match token {
            DurationToken::Fast => &self.fast,
            DurationToken::Normal => &self.normal,
            DurationToken::Slow => &self.slow,
            DurationToken::Slower => &self.slower,
        }
    }
}

/// Named animation amplitude keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AmplitudeToken {
    ScaleCard,
    LedBreathe,
}

/// Animation amplitudes per named effect
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeTokens {
    pub scale_card: f32,
    pub led_breathe: f32,
}

impl AmplitudeTokens {
    /// Get an amplitude value by token key
    pub fn get(&self, token: AmplitudeToken) -> f32 {
        match token {
            AmplitudeToken::ScaleCard => self.scale_card,
            AmplitudeToken::LedBreathe => self.led_breathe,
        }
    }
}

/// Animation configuration for one intensity level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionTokens {
    pub level: MotionLevel,
    pub durations: DurationTokens,
    pub amplitudes: AmplitudeTokens,
}

impl MotionTokens {
    /// Full duration and amplitude table for `level`.
    ///
    /// `None` zeroes every duration while keeping regular amplitudes; `Loud`
    /// has the shortest durations and the highest amplitudes.
    pub fn for_level(level: MotionLevel) -> Self {
        let (durations, amplitudes) = match level {
            MotionLevel::None => (
                DurationTokens::new("0s", "0s", "0s", "0s"),
                AmplitudeTokens {
                    scale_card: 0.03,
                    led_breathe: 0.06,
                },
            ),
            MotionLevel::Subtle => (
                DurationTokens::new("1.0s", "2.4s", "4.0s", "6.4s"),
                AmplitudeTokens {
                    scale_card: 0.02,
                    led_breathe: 0.04,
                },
            ),
            MotionLevel::Regular => (
                DurationTokens::new("0.7s", "1.6s", "2.8s", "4.4s"),
                AmplitudeTokens {
                    scale_card: 0.03,
                    led_breathe: 0.06,
                },
            ),
            MotionLevel::Loud => (
                DurationTokens::new("0.5s", "1.2s", "2.0s", "3.2s"),
                AmplitudeTokens {
                    scale_card: 0.05,
                    led_breathe: 0.10,
                },
            ),
        };

        Self {
            level,
            durations,
            amplitudes,
        }
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self::for_level(MotionLevel::Subtle)
    }
}
