//! Ranked leaderboard entries and their single-line wire format.
//!
//! A record is persisted as `username rank score time`, separated by single spaces, with
//! the time written in seconds to two decimals (`Ann 1 5 10.00`).

use std::{cmp::Ordering, fmt};

use crate::error::RecordError;

/// Name recorded for a player who never entered one.
pub const DEFAULT_USERNAME: &str = "No One";

const FIELD_SEPARATOR: char = ' ';
const FIELD_COUNT: usize = 4;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Display name, never containing whitespace.
    pub username: String,
    /// Position assigned by the last merge, `0` when unranked.
    pub rank: u8,
    /// Final score.
    pub score: u32,
    /// Seconds taken, kept at centisecond precision.
    pub time: f64,
    /// Whether this entry belongs to the player of the running session. Never persisted.
    pub is_current_player: bool,
}

impl UserRecord {
    /// Build an unranked record from raw gameplay results.
    ///
    /// The username is sanitized and the time is rounded to hundredths of a second, which
    /// is the precision of the wire format.
    pub fn new(username: &str, score: u32, time: f64) -> Self {
        Self {
            username: sanitize_username(username),
            rank: 0,
            score,
            time: quantize_time(time),
            is_current_player: false,
        }
    }

    /// Record of the player running the current session.
    pub fn current_player(username: &str, score: u32, time: f64) -> Self {
        Self {
            is_current_player: true,
            ..Self::new(username, score, time)
        }
    }

    /// Placeholder for a slot that has never been written.
    pub fn empty_slot() -> Self {
        Self {
            username: String::new(),
            rank: 0,
            score: 0,
            time: 0.0,
            is_current_player: false,
        }
    }

    /// `true` for the empty-slot placeholder and any record the leaderboard never placed.
    pub fn is_unranked(&self) -> bool {
        self.rank == 0
    }

    /// Decode a persisted record.
    ///
    /// Blank text yields [`UserRecord::empty_slot`]; anything else must hold exactly four
    /// whitespace separated tokens with a non-negative integer rank and score and a finite,
    /// non-negative time.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(Self::empty_slot());
        }
        let [username, rank, score, time] = tokens.as_slice() else {
            return Err(RecordError::malformed(
                text,
                format!("expected {FIELD_COUNT} fields, found {}", tokens.len()),
            ));
        };

        let rank = rank
            .parse::<u8>()
            .map_err(|_| RecordError::malformed(text, format!("invalid rank `{rank}`")))?;
        let score = score
            .parse::<u32>()
            .map_err(|_| RecordError::malformed(text, format!("invalid score `{score}`")))?;
        let time = time
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite() && *t >= 0.0)
            .ok_or_else(|| RecordError::malformed(text, format!("invalid time `{time}`")))?;

        Ok(Self {
            username: username.to_string(),
            rank,
            score,
            time: quantize_time(time),
            is_current_player: false,
        })
    }

    /// Encode the record in its persisted form.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Time formatted the way it is displayed and persisted.
    pub fn time_text(&self) -> String {
        format_seconds(self.time)
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        Self::empty_slot()
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{:.2}",
            self.username,
            self.rank,
            self.score,
            self.time,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Compare two records by standing.
///
/// Returns [`Ordering::Greater`] when `a` ranks above `b`: a higher score wins, and on equal
/// scores the faster time wins. Records with equal score and time compare equal, so callers
/// must sort stably to keep results deterministic.
pub fn compare(a: &UserRecord, b: &UserRecord) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| b.time.total_cmp(&a.time))
}

/// Replace every whitespace run with `_` so the name survives the wire format.
///
/// A name with no visible characters falls back to [`DEFAULT_USERNAME`].
pub fn sanitize_username(raw: &str) -> String {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join("_");
    if cleaned.is_empty() {
        DEFAULT_USERNAME.split_whitespace().collect::<Vec<_>>().join("_")
    } else {
        cleaned
    }
}

/// Format seconds with two decimals (`10.00`).
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2}")
}

/// Beyond this many seconds times are kept to whole seconds; scaling them to hundredths
/// would lose precision or overflow.
const WHOLE_SECONDS_ABOVE: f64 = (1u64 << 40) as f64;

fn quantize_time(time: f64) -> f64 {
    if !time.is_finite() || time <= 0.0 {
        return 0.0;
    }
    if time >= WHOLE_SECONDS_ABOVE {
        return time.round();
    }
    (time * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ranked(username: &str, rank: u8, score: u32, time: f64) -> UserRecord {
        UserRecord {
            rank,
            ..UserRecord::new(username, score, time)
        }
    }

    #[test]
    fn parses_persisted_record() {
        let record = UserRecord::parse("Bo 1 10 5.00").unwrap();
        assert_eq!(record, ranked("Bo", 1, 10, 5.0));
        assert!(!record.is_current_player);
    }

    #[test]
    fn blank_text_is_empty_slot() {
        for text in ["", "   ", "\n"] {
            let record = UserRecord::parse(text).unwrap();
            assert_eq!(record, UserRecord::empty_slot());
            assert!(record.is_unranked());
        }
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for text in ["Bo 1 10", "Bo 1 10 5.00 extra", "No One 1 10 5.00"] {
            let err = UserRecord::parse(text).unwrap_err();
            assert!(matches!(err, RecordError::Malformed { ref input, .. } if input == text));
        }
    }

    #[test]
    fn invalid_numbers_are_malformed() {
        for text in [
            "Bo x 10 5.00",
            "Bo 1 -3 5.00",
            "Bo 1 10 fast",
            "Bo 1 10 -1.00",
            "Bo 1 10 NaN",
            "Bo 1 10 inf",
        ] {
            assert!(UserRecord::parse(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn serializes_with_two_decimal_time() {
        assert_eq!(ranked("Ann", 1, 5, 10.0).serialize(), "Ann 1 5 10.00");
        assert_eq!(ranked("Cy", 2, 8, 6.0).serialize(), "Cy 2 8 6.00");
        assert_eq!(UserRecord::new("Di", 3, 4.256).serialize(), "Di 0 3 4.26");
    }

    #[test]
    fn huge_times_stay_finite_through_storage() {
        let built = UserRecord::new("Ann", 5, 1.0e307);
        assert!(built.time.is_finite());
        assert_eq!(UserRecord::parse(&built.serialize()).unwrap(), built);

        let stored = UserRecord::parse("Ann 1 5 1e307").unwrap();
        assert_eq!(stored.time, 1.0e307);
        let line = stored.serialize();
        assert!(line.ends_with(".00"), "{line}");
        assert_eq!(UserRecord::parse(&line).unwrap(), stored);

        let max = UserRecord::parse(&format!("Max 1 5 {}", f64::MAX)).unwrap();
        assert_eq!(UserRecord::parse(&max.serialize()).unwrap(), max);
    }

    #[test]
    fn usernames_with_spaces_are_sanitized() {
        let record = UserRecord::new("Mary Jane\tW", 3, 1.0);
        assert_eq!(record.username, "Mary_Jane_W");
        assert_eq!(UserRecord::new("   ", 0, 0.0).username, "No_One");
        assert_eq!(
            UserRecord::parse(&record.serialize()).unwrap().username,
            "Mary_Jane_W"
        );
    }

    #[test]
    fn higher_score_ranks_above() {
        let a = UserRecord::new("a", 10, 9.0);
        let b = UserRecord::new("b", 8, 1.0);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn faster_time_breaks_score_tie() {
        let fast = UserRecord::new("fast", 5, 3.0);
        let slow = UserRecord::new("slow", 5, 4.5);
        assert_eq!(compare(&fast, &slow), Ordering::Greater);
        assert_eq!(compare(&slow, &fast), Ordering::Less);
    }

    #[test]
    fn identical_standing_compares_equal() {
        let a = UserRecord::new("a", 5, 3.0);
        let b = UserRecord::new("b", 5, 3.0);
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    fn arb_time() -> impl Strategy<Value = f64> {
        prop_oneof![
            (0u32..1_000_000).prop_map(|centis| f64::from(centis) / 100.0),
            (0i32..308, 0.0f64..10.0).prop_map(|(exp, mantissa)| mantissa * 10f64.powi(exp)),
        ]
    }

    fn arb_record() -> impl Strategy<Value = UserRecord> {
        ("[A-Za-z0-9_]{1,12}", 0u8..=4, 0u32..100_000, arb_time()).prop_map(
            |(username, rank, score, time)| UserRecord {
                rank,
                ..UserRecord::new(&username, score, time)
            },
        )
    }

    proptest! {
        #[test]
        fn serialize_then_parse_round_trips(record in arb_record()) {
            let parsed = UserRecord::parse(&record.serialize()).unwrap();
            prop_assert_eq!(parsed, record);
        }

        #[test]
        fn distinct_standings_are_strictly_ordered(a in arb_record(), b in arb_record()) {
            prop_assume!(a.score != b.score || a.time != b.time);
            let forward = compare(&a, &b);
            prop_assert_ne!(forward, Ordering::Equal);
            prop_assert_eq!(forward, compare(&b, &a).reverse());
        }
    }
}
