//! One player's conversation with the runtime.

use std::sync::Arc;

use hunt_core::PlayerId;
use hunt_runtime::{HuntRuntime, Result};

use crate::commands::{Command, HELP};
use crate::render;

/// What to do after a line has been handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Routes chat lines from one player to the runtime.
#[derive(Clone, Debug)]
pub struct ChatSession {
    runtime: Arc<HuntRuntime>,
    player: PlayerId,
}

impl ChatSession {
    pub fn new(runtime: Arc<HuntRuntime>, player: PlayerId) -> Self {
        Self { runtime, player }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub async fn handle_line(&self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(Command::Quit) => Reply::Quit,
            Ok(command) => {
                tracing::debug!(player = %self.player, ?command, "handling command");
                let text = self
                    .dispatch(command)
                    .await
                    .unwrap_or_else(|err| render::error(&err));
                Reply::Text(text)
            }
            Err(err) => Reply::Text(err.to_string()),
        }
    }

    async fn dispatch(&self, command: Command) -> Result<String> {
        let runtime = &self.runtime;
        let player = self.player;

        Ok(match command {
            Command::Explore => render::explore(&runtime.explore(player).await?),
            Command::Battle(token) => {
                render::battle(&runtime.battle_action(player, &token).await?)
            }
            Command::Rest(duration) => {
                render::rest_start(&runtime.start_rest(player, &duration).await?)
            }
            Command::Status => render::rest_status(&runtime.rest_status(player).await?),
            Command::Follow => render::tracks(&runtime.follow_track(player).await?),
            Command::Quests => render::quests(&runtime.list_quests(player).await?),
            Command::Accept(id) => {
                let quest = runtime.accept_quest(player, id).await?;
                format!("📜 Quest accepted: {}", quest.title)
            }
            Command::Profile => render::profile(&runtime.profile(player).await?),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        })
    }
}
