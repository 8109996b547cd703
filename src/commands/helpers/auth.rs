use teloxide::prelude::*;
use teloxide::types::{ChatId, UserId};

use crate::config::Config;

pub(crate) fn is_authorized(msg: &Message, config: &Config) -> bool {
    let Some(from) = msg.from() else {
        return false;
    };

    is_authorized_sender(from.id, msg.chat.id, config)
}

/// The owner may command the bot from their DM or from an allow-listed chat.
fn is_authorized_sender(user_id: UserId, chat_id: ChatId, config: &Config) -> bool {
    let owner_user_id = match config.owner_user_id() {
        Ok(owner_user_id) => owner_user_id,
        Err(_) => return false,
    };

    let owner_chat_id = match config.owner_chat_id() {
        Ok(owner_chat_id) => owner_chat_id,
        Err(_) => return false,
    };

    if user_id != owner_user_id {
        return false;
    }

    chat_id == owner_chat_id || config.allowed_chat_ids.contains(&chat_id.0)
}
