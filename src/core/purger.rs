use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use futures_util::future;
use twilight_model::id::{ChannelId, MessageId};

use crate::core::{BotContext, PurgeSchedule};
use crate::error::CommandError;
use crate::utils;
use crate::{cogbot_error, cogbot_info};

pub const WAIT_PERIOD_MINUTES: u64 = 5;
/// Messages younger than this survive a purge.
const MAX_AGE_DAYS: i64 = 14;

/// Spawns the background task that runs the purge pass once a day.
pub fn start(ctx: Arc<BotContext>, schedule: PurgeSchedule) {
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            let trigger = next_trigger(now, schedule.hour, schedule.minute);
            let wait = (trigger - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            let channels = match ctx.get_all_purge_channels().await {
                Ok(channels) => channels,
                Err(e) => {
                    cogbot_error!("Unable to load the purge schedule: {}", e);
                    continue;
                }
            };
            if channels.is_empty() {
                continue;
            }

            cogbot_info!("Starting the daily purge of {} channels", channels.len());
            purge_channels(&ctx, channels).await;
        }
    });
}

/// Next wall clock occurrence of hour:minute strictly after ``now``.
pub fn next_trigger(now: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    let mut trigger = now.date().and_hms(hour, minute, 0);
    if trigger <= now {
        trigger = trigger + Duration::days(1);
    }
    trigger
}

fn purge_cutoff(now: DateTime<Utc>) -> MessageId {
    MessageId(utils::snowflake_for(now - Duration::days(MAX_AGE_DAYS)))
}

/// Warns every channel, gives readers a few minutes, then cleans them all.
pub async fn purge_channels(ctx: &Arc<BotContext>, channels: Vec<ChannelId>) {
    let tasks: Vec<_> = channels.iter().map(|channel| warn_and_clean(ctx, *channel)).collect();

    for (channel, result) in channels.iter().zip(future::join_all(tasks).await) {
        match result {
            Ok(removed) => cogbot_info!("Purged {} messages from channel {}", removed, channel),
            Err(e) => cogbot_error!("Failed to purge channel {}: {}", channel, e),
        }
    }
}

pub async fn warn_and_clean(ctx: &Arc<BotContext>, channel_id: ChannelId) -> Result<usize, CommandError> {
    ctx.send_message(
        channel_id,
        format!("This channel will be purged in {} minutes.", WAIT_PERIOD_MINUTES),
    )
    .await?;
    tokio::time::sleep(StdDuration::from_secs(WAIT_PERIOD_MINUTES * 60)).await;
    clean_channel(ctx, channel_id).await
}

/// Deletes every message older than the age limit, one by one. Bulk deletion
/// refuses messages that old, so there is no faster path.
pub async fn clean_channel(ctx: &BotContext, channel_id: ChannelId) -> Result<usize, CommandError> {
    let cutoff = purge_cutoff(Utc::now());
    let mut removed = 0;

    loop {
        let messages = ctx
            .http
            .channel_messages(channel_id)
            .before(cutoff)
            .limit(100)?
            .await?;
        if messages.is_empty() {
            return Ok(removed);
        }

        for message in messages {
            ctx.http.delete_message(channel_id, message.id).await?;
            removed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trigger_later_the_same_day() {
        let now = Utc.ymd(2021, 3, 1).and_hms(10, 0, 0);
        assert_eq!(next_trigger(now, 23, 30), Utc.ymd(2021, 3, 1).and_hms(23, 30, 0));
    }

    #[test]
    fn trigger_wraps_to_tomorrow() {
        let now = Utc.ymd(2021, 3, 1).and_hms(23, 45, 0);
        assert_eq!(next_trigger(now, 23, 30), Utc.ymd(2021, 3, 2).and_hms(23, 30, 0));
    }

    #[test]
    fn trigger_on_the_dot_waits_a_full_day() {
        let now = Utc.ymd(2021, 3, 1).and_hms(23, 30, 0);
        assert_eq!(next_trigger(now, 23, 30), Utc.ymd(2021, 3, 2).and_hms(23, 30, 0));
    }

    #[test]
    fn cutoff_separates_old_from_recent() {
        let now = Utc.ymd(2021, 3, 20).and_hms(12, 0, 0);
        let cutoff = purge_cutoff(now);

        let recent = utils::snowflake_for(now - Duration::days(1));
        let ancient = utils::snowflake_for(now - Duration::days(15));

        assert!(recent > cutoff.0);
        assert!(ancient < cutoff.0);
    }
}
