//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per animation frame.
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Play field ---

/// Default play field width (canvas units).
pub const FIELD_WIDTH: f64 = 800.0;

/// Default play field height (canvas units).
pub const FIELD_HEIGHT: f64 = 600.0;

/// Distance past the field edge a projectile may travel before it is discarded.
pub const OUT_OF_BOUNDS_MARGIN: f64 = 100.0;

// --- Economy ---

/// Money at the start of a session.
pub const STARTING_MONEY: i64 = 100;

/// Lives at the start of a session.
pub const STARTING_LIVES: i64 = 20;

/// Default cost of a basic tower.
pub const BASIC_TOWER_COST: i64 = 50;

/// Default cost of a sniper tower.
pub const SNIPER_TOWER_COST: i64 = 100;

/// Default cost of a splash tower.
pub const SPLASH_TOWER_COST: i64 = 75;

// --- Waves ---

/// Enemies spawned per wave number (wave N spawns N times this).
pub const ENEMIES_PER_WAVE: u32 = 5;

/// Default interval between spawns within a wave (ms).
pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

/// Enemy health at wave 0; each wave adds `ENEMY_HEALTH_PER_WAVE`.
pub const ENEMY_BASE_HEALTH: f64 = 30.0;

pub const ENEMY_HEALTH_PER_WAVE: f64 = 15.0;

/// Enemy kill reward at wave 0; each wave adds `ENEMY_REWARD_PER_WAVE`.
pub const ENEMY_BASE_REWARD: i64 = 15;

pub const ENEMY_REWARD_PER_WAVE: i64 = 3;

// --- Enemies ---

/// Enemy movement speed (units per tick).
pub const ENEMY_SPEED: f64 = 2.0;

/// Enemy collision radius.
pub const ENEMY_SIZE: f64 = 15.0;

/// How long an enemy shows its hit flash (ms).
pub const ENEMY_HIT_FLASH_MS: f64 = 100.0;

pub const ENEMY_COLOR: &str = "#e74c3c";

pub const ENEMY_FLASH_COLOR: &str = "#ff0000";

// --- Towers ---

/// Drawn radius of a tower base.
pub const TOWER_BASE_RADIUS: f64 = 20.0;

/// Fraction of the remaining angle a tower turns toward its target each tick.
pub const TOWER_ROTATION_SMOOTHING: f64 = 0.3;

/// Level shown on every tower. There is no upgrade path.
pub const TOWER_DEFAULT_LEVEL: u32 = 1;

// --- Projectiles ---

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 12.0;
