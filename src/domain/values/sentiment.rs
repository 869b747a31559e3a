//! Market-wide sentiment from the share of rising and falling crops.

use crate::domain::entities::crop::Crop;
use crate::domain::values::trend::Trend;
use serde::Serialize;

/// Share of crops that must move one way before the market is called.
/// Compared with a strict `>`.
pub const SENTIMENT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentStatus {
    Bullish,
    Bearish,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSentiment {
    pub status: SentimentStatus,
    pub rising_count: usize,
    pub falling_count: usize,
    pub stable_count: usize,
}

impl MarketSentiment {
    pub fn assess<I>(directions: I) -> Self
    where
        I: IntoIterator<Item = Trend>,
    {
        let (mut rising_count, mut falling_count, mut stable_count) = (0, 0, 0);
        for direction in directions {
            match direction {
                Trend::Rising => rising_count += 1,
                Trend::Falling => falling_count += 1,
                Trend::Stable => stable_count += 1,
            }
        }

        let total = rising_count + falling_count + stable_count;
        let status = if total == 0 {
            SentimentStatus::Mixed
        } else if rising_count as f64 / total as f64 > SENTIMENT_THRESHOLD {
            SentimentStatus::Bullish
        } else if falling_count as f64 / total as f64 > SENTIMENT_THRESHOLD {
            SentimentStatus::Bearish
        } else {
            SentimentStatus::Mixed
        };

        Self {
            status,
            rising_count,
            falling_count,
            stable_count,
        }
    }

    pub fn from_crops(crops: &[Crop]) -> Self {
        Self::assess(crops.iter().map(Crop::direction))
    }

    pub fn total(&self) -> usize {
        self.rising_count + self.falling_count + self.stable_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::trend::Trend::*;

    #[test]
    fn test_empty_is_mixed() {
        let s = MarketSentiment::assess(Vec::<Trend>::new());
        assert_eq!(s.status, SentimentStatus::Mixed);
        assert_eq!(s.total(), 0);
    }

    #[test]
    fn test_two_of_three_rising_is_bullish() {
        let s = MarketSentiment::assess(vec![Rising, Rising, Falling]);
        assert_eq!(s.status, SentimentStatus::Bullish);
        assert_eq!((s.rising_count, s.falling_count, s.stable_count), (2, 1, 0));
    }

    #[test]
    fn test_exactly_sixty_percent_is_mixed() {
        let s = MarketSentiment::assess(vec![Falling, Falling, Falling, Stable, Rising]);
        assert_eq!(s.status, SentimentStatus::Mixed);

        let s = MarketSentiment::assess(vec![Rising, Rising, Rising, Stable, Stable]);
        assert_eq!(s.status, SentimentStatus::Mixed);
    }

    #[test]
    fn test_bearish() {
        let s = MarketSentiment::assess(vec![Falling, Falling, Falling, Rising]);
        assert_eq!(s.status, SentimentStatus::Bearish);
    }

    #[test]
    fn test_partition_covers_every_crop() {
        let mixes = [
            vec![Rising],
            vec![Stable, Stable],
            vec![Rising, Falling, Stable, Stable, Falling, Rising, Rising],
        ];
        for mix in mixes {
            let n = mix.len();
            assert_eq!(MarketSentiment::assess(mix).total(), n);
        }
    }

    #[test]
    fn test_status_serializes_capitalized() {
        let json = serde_json::to_string(&SentimentStatus::Bullish).unwrap();
        assert_eq!(json, "\"Bullish\"");
    }
}
