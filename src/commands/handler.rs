use teloxide::prelude::*;

use super::helpers::{is_authorized, truncate_for_telegram};
use super::parser::parse_command;
use super::router::route_intent;
use crate::app_context::AppContext;

pub async fn answer(bot: Bot, msg: Message, app_context: &AppContext) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let Some(intent) = parse_command(text) else {
        log::debug!("message_ignored chat_id={} reason=no_command_match", msg.chat.id.0);
        return Ok(());
    };

    let config = &app_context.config;
    if !is_authorized(&msg, config) {
        let user_id = msg
            .from()
            .map(|user| user.id.0.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        log::warn!(
            "SECURITY: Unauthorized access attempt. expected_user_id={} user_id={} chat_id={} command_text={:?}",
            config.owner_id,
            user_id,
            msg.chat.id.0,
            text
        );
        return Ok(());
    }

    log::info!("command_received chat_id={} intent={:?}", msg.chat.id.0, intent);
    let replies = route_intent(&intent, app_context).await;

    for reply in replies.iter().filter(|reply| !reply.trim().is_empty()) {
        bot.send_message(msg.chat.id, truncate_for_telegram(reply))
            .await?;
    }

    Ok(())
}
