//! Chat replies for runtime outcomes.

use std::fmt::Write;

use hunt_core::{
    BattleAction, BattleStatus, GameError, PlayerRecord, RoundReport, SessionError,
};
use hunt_runtime::{
    BattleOutcome, ExploreOutcome, QuestListing, RestStart, RestStatus, RuntimeError,
    TrackResolution,
};

pub fn explore(outcome: &ExploreOutcome) -> String {
    let result = match outcome {
        ExploreOutcome::AlreadyInBattle(status) => return battle_status(status),
        ExploreOutcome::Explored(result) => result,
    };

    let mut text = String::from("🔍 You explore the territory...\n");
    if !result.found_resources.is_empty() {
        text.push_str("\n📦 Found:\n");
        for found in &result.found_resources {
            let _ = writeln!(text, "• {} {}", found.amount, found.name);
        }
    }
    if let (Some(enemy), Some(status)) = (&result.enemy, &result.battle) {
        let _ = write!(
            text,
            "\n⚠️ You run into a {}!\n❤️ Your HP: {}\n❤️ Enemy HP: {}\n⚔️ Enemy attack: {}\n🛡 Enemy defense: {}\n\nattack | defend | flee",
            enemy.name, status.player_hp, status.enemy_hp, enemy.attack, enemy.defense
        );
    } else if !result.tracks.is_empty() {
        text.push_str("\n👣 You notice:\n");
        for track in &result.tracks {
            let _ = writeln!(text, "• {}", track.description());
        }
        text.push_str("/follow to track them down");
    } else if result.is_all_clear() {
        text.push_str("\nNothing around. All quiet.");
    }
    text.trim_end().to_string()
}

pub fn battle_status(status: &BattleStatus) -> String {
    format!(
        "⚔️ You are already fighting a {}!\n⏳ {} minutes left\n❤️ Your HP: {}\n❤️ Enemy HP: {}",
        status.enemy_name, status.remaining_minutes, status.player_hp, status.enemy_hp
    )
}

fn round(report: &RoundReport) -> String {
    let mut text = String::new();
    match report.action {
        BattleAction::Attack => {
            if let Some(dealt) = report.damage_dealt {
                let _ = writeln!(text, "🗡 You hit for {dealt}.");
            }
        }
        BattleAction::Defend => text.push_str("🛡 You raise your guard.\n"),
        BattleAction::Flee => {
            if report.damage_taken.is_some() {
                text.push_str("🏃 You fail to get away.\n");
            }
        }
    }
    if let Some(taken) = report.damage_taken {
        let _ = writeln!(text, "💥 The enemy hits you for {taken}.");
    }
    let _ = write!(
        text,
        "❤️ Your HP: {} | Enemy HP: {}",
        report.hp.player.max(0),
        report.hp.enemy.max(0)
    );
    text
}

pub fn battle(outcome: &BattleOutcome) -> String {
    match outcome {
        BattleOutcome::InBattle(report) => round(report),
        BattleOutcome::Won { report, reward } => format!(
            "{}\n🏆 Victory! +{} gold, +{} exp",
            round(report),
            reward.gold,
            reward.exp
        ),
        BattleOutcome::Lost(report) => {
            format!("{}\n💀 You were defeated. Rest before exploring again.", round(report))
        }
        BattleOutcome::Fled(_) => "🏃 You got away.".to_string(),
        BattleOutcome::TimedOut { enemy_name } => {
            format!("⌛ The {enemy_name} lost interest and left. The battle is over.")
        }
    }
}

pub fn rest_start(start: &RestStart) -> String {
    match start {
        RestStart::Started { duration, ends_at } => format!(
            "😴 You rest for {duration}. Back on your feet at {}.",
            ends_at.format("%H:%M UTC")
        ),
        RestStart::AlreadyResting { remaining_minutes } => {
            format!("😴 You are already resting ({remaining_minutes} minutes left).")
        }
    }
}

pub fn rest_status(status: &RestStatus) -> String {
    match status {
        RestStatus::NotResting => "You are not resting.".to_string(),
        RestStatus::Resting { remaining_minutes } => {
            format!("😴 Resting, {remaining_minutes} minutes left.")
        }
        RestStatus::Completed(done) => format!(
            "✨ Rest complete ({}).\n❤️ HP: {} → {}\n🔮 MP: {} → {}",
            done.duration, done.hp_before, done.hp_after, done.mp_before, done.mp_after
        ),
    }
}

pub fn tracks(resolution: &TrackResolution) -> String {
    match resolution {
        TrackResolution::BattleStarted(status) => format!(
            "👣 The tracks lead you to a {}!\n❤️ Your HP: {}\n❤️ Enemy HP: {}\n\nattack | defend | flee",
            status.enemy_name, status.player_hp, status.enemy_hp
        ),
        TrackResolution::PlayerSpotted(sighting) => format!(
            "👣 You follow the tracks and spot {} in the distance (seen {}).",
            sighting.name,
            sighting.seen_at.format("%H:%M UTC")
        ),
        TrackResolution::AlreadyInBattle(status) => battle_status(status),
    }
}

pub fn quests(board: &[QuestListing]) -> String {
    if board.is_empty() {
        return "📜 The quest board is empty.".to_string();
    }
    let mut text = String::from("📜 Quests:");
    for listing in board {
        let quest = &listing.quest;
        let mark = if listing.accepted {
            "✅"
        } else if listing.available {
            "•"
        } else {
            "🔒"
        };
        let _ = write!(
            text,
            "\n{mark} #{} {} (level {}+, {}): {} [{} gold, {} exp]",
            quest.id,
            quest.title,
            quest.min_level,
            quest.kind,
            quest.description,
            quest.reward.gold,
            quest.reward.exp
        );
    }
    text
}

pub fn profile(record: &PlayerRecord) -> String {
    format!(
        "👤 {} (level {})\n❤️ HP: {}/{}\n🔮 MP: {}/{}\n⚔️ Attack: {}\n🛡 Defense: {}\n💰 Gold: {}\n⭐ Exp: {}",
        record.name,
        record.level,
        record.hp,
        record.max_hp,
        record.mp,
        record.max_mp,
        record.attack,
        record.defense,
        record.gold,
        record.exp
    )
}

/// Player-facing text for a failed operation. Internal failures are logged
/// and replaced by a generic apology.
pub fn error(err: &RuntimeError) -> String {
    match err {
        RuntimeError::Session(SessionError::InBattle(status)) => battle_status(status),
        err if err.is_player_facing() => format!("⚠️ {err}"),
        err => {
            tracing::error!(code = err.error_code(), "request failed: {err}");
            "Something went wrong, try again later.".to_string()
        }
    }
}
