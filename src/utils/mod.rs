pub mod matchers;

use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds between the unix epoch and the discord epoch (2015-01-01T00:00:00Z).
pub const DISCORD_EPOCH: i64 = 1_420_070_400_000;

pub fn snowflake_timestamp(snowflake: u64) -> DateTime<Utc> {
    Utc.timestamp_millis((snowflake >> 22) as i64 + DISCORD_EPOCH)
}

/// The lowest snowflake a discord object created at `time` can have. Anything
/// with a smaller id is older than `time`.
pub fn snowflake_for(time: DateTime<Utc>) -> u64 {
    let millis = time.timestamp_millis() - DISCORD_EPOCH;
    if millis <= 0 {
        return 0;
    }
    (millis as u64) << 22
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn snowflake_round_trips() {
        let time = Utc.ymd(2020, 6, 15).and_hms(12, 30, 45);
        assert_eq!(snowflake_timestamp(snowflake_for(time)), time);
    }

    #[test]
    fn snowflake_orders_by_age() {
        let now = Utc::now();
        let cutoff = snowflake_for(now - Duration::days(14));

        let older = snowflake_for(now - Duration::days(15));
        let newer = snowflake_for(now - Duration::days(13));

        assert!(older < cutoff);
        assert!(newer > cutoff);
    }

    #[test]
    fn pre_epoch_times_clamp_to_zero() {
        let time = Utc.ymd(2014, 1, 1).and_hms(0, 0, 0);
        assert_eq!(snowflake_for(time), 0);
    }
}
