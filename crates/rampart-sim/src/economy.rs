//! Player economy: money, lives, score and the wave counter.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use rampart_core::config::GameConfig;
use rampart_core::state::HudView;

#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    pub money: i64,
    /// May reach zero or below; see `GameConfig::end_on_defeat`.
    pub lives: i64,
    pub score: i64,
    /// Number of the next wave to start (or the one running).
    pub wave: u32,
}

impl Economy {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            money: config.starting_money,
            lives: config.starting_lives,
            score: 0,
            wave: 1,
        }
    }

    pub fn can_afford(&self, cost: i64) -> bool {
        self.money >= cost
    }

    /// Deduct `cost` if affordable. Returns whether the purchase went through.
    pub fn spend(&mut self, cost: i64) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.money -= cost;
        true
    }

    /// Pay out a kill: the reward counts toward both money and score.
    pub fn award_kill(&mut self, reward: i64) {
        self.money += reward;
        self.score += reward;
    }

    pub fn lose_life(&mut self) {
        self.lives -= 1;
    }

    pub fn hud(&self, wave_in_progress: bool) -> HudView {
        HudView {
            money: self.money,
            lives: self.lives,
            wave: self.wave,
            score: self.score,
            wave_in_progress,
        }
    }
}
