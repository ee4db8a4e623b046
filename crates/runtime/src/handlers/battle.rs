use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use hunt_core::{
    BattleAction, BattleStatus, PlayerId, RoundOutcome, RoundReport, SessionError, resolve_round,
};

use crate::api::{BattleOutcome, Result};
use crate::events::{BattleResult, HuntEvent};
use crate::runtime::HuntRuntime;
use crate::session::{BattleSession, Lookup, PlayerSessions};

impl HuntRuntime {
    /// Apply a raw action token such as `attack` or `FLEE`.
    ///
    /// Unknown tokens are rejected before the session is touched.
    pub async fn battle_action(&self, player_id: PlayerId, token: &str) -> Result<BattleOutcome> {
        let action = BattleAction::parse(token)?;
        self.apply_battle_action(player_id, action).await
    }

    /// Resolve one round of the player's battle.
    ///
    /// A battle past its deadline is removed and reported as
    /// [`BattleOutcome::TimedOut`] without applying `action`. A terminal round
    /// removes the session and writes the result back to the player record.
    pub async fn apply_battle_action(
        &self,
        player_id: PlayerId,
        action: BattleAction,
    ) -> Result<BattleOutcome> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock(player_id).await;

        let report = match sessions.battle(now) {
            Lookup::Absent => return Err(SessionError::NoActiveBattle.into()),
            Lookup::Expired(battle) => {
                self.abandon_battle(&battle);
                return Ok(BattleOutcome::TimedOut {
                    enemy_name: battle.enemy.name,
                });
            }
            Lookup::Active(battle) => {
                let config = self.config();
                self.with_rng(|rng| {
                    resolve_round(
                        &battle.player,
                        &battle.enemy,
                        &mut battle.hp,
                        action,
                        config,
                        rng,
                    )
                })
            }
        };

        debug!(
            player = %player_id,
            action = %action,
            player_hp = report.hp.player,
            enemy_hp = report.hp.enemy,
            "round resolved"
        );

        let result = match report.outcome {
            RoundOutcome::Ongoing => return Ok(BattleOutcome::InBattle(report)),
            RoundOutcome::Won(reward) => BattleResult::Won(reward),
            RoundOutcome::Lost => BattleResult::Lost,
            RoundOutcome::Fled => BattleResult::Fled,
        };
        let Some(battle) = sessions.end_battle() else {
            return Err(SessionError::NoActiveBattle.into());
        };

        self.settle_battle(&battle, &report).await?;
        info!(player = %player_id, enemy = %battle.enemy.name, ?result, "battle ended");
        self.events.publish(HuntEvent::BattleEnded {
            player: player_id,
            enemy: battle.enemy.name.clone(),
            result,
        });

        Ok(match result {
            BattleResult::Won(reward) => BattleOutcome::Won { report, reward },
            BattleResult::Lost => BattleOutcome::Lost(report),
            BattleResult::Fled => BattleOutcome::Fled(report),
            BattleResult::TimedOut => BattleOutcome::TimedOut {
                enemy_name: battle.enemy.name,
            },
        })
    }

    /// Status of the player's live battle, abandoning an expired one.
    pub(crate) fn live_battle(
        &self,
        sessions: &mut PlayerSessions,
        now: DateTime<Utc>,
    ) -> Option<BattleStatus> {
        match sessions.battle(now) {
            Lookup::Active(battle) => Some(battle.status(now)),
            Lookup::Expired(battle) => {
                self.abandon_battle(&battle);
                None
            }
            Lookup::Absent => None,
        }
    }

    /// Drop an expired battle. Nothing is written back.
    pub(crate) fn abandon_battle(&self, battle: &BattleSession) {
        warn!(
            player = %battle.player_id,
            enemy = %battle.enemy.name,
            expired_at = %battle.expires_at,
            "battle timed out"
        );
        self.events.publish(HuntEvent::BattleEnded {
            player: battle.player_id,
            enemy: battle.enemy.name.clone(),
            result: BattleResult::TimedOut,
        });
    }

    /// Persist the consequences of a finished battle.
    async fn settle_battle(&self, battle: &BattleSession, report: &RoundReport) -> Result<()> {
        let mut record = self.players.require(battle.player_id).await?;
        record.settle_hp(report.hp.player);
        if let RoundOutcome::Won(reward) = report.outcome {
            record.grant(reward);
        }
        self.players.save(&record).await?;

        info!(
            player = %battle.player_id,
            hp = record.hp,
            gold = record.gold,
            exp = record.exp,
            "battle result saved"
        );
        Ok(())
    }
}
