use tokio::sync::oneshot;
use twilight_model::id::{ChannelId, UserId};

use crate::core::BotContext;
use crate::error::CommandError;

impl BotContext {
    /// Parks the caller until someone routes a reply to this channel and user.
    /// Registering a new waiter for the same pair cancels the old one.
    pub(super) async fn await_reply(&self, channel_id: ChannelId, user_id: UserId) -> Result<String, CommandError> {
        let (sender, receiver) = oneshot::channel();
        // dropping the displaced sender wakes its waiter with an error
        self.replies.insert((channel_id, user_id), sender);
        receiver.await.map_err(|_| CommandError::SessionReplaced)
    }

    /// Hands a message to a suspended prompt if one is waiting for it.
    /// Returns whether the message was consumed.
    pub fn route_reply(&self, channel_id: ChannelId, user_id: UserId, content: String) -> bool {
        match self.replies.remove(&(channel_id, user_id)) {
            Some((_, sender)) => sender.send(content).is_ok(),
            None => false,
        }
    }
}
