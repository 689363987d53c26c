/// Game configuration constants and tunable parameters.
///
/// Fixed gameplay rules (the gating probabilities, tick rhythms) are not
/// configurable; everything here is balance that drivers may load from data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Radius around the player within which third-party status and death messages are shown.
    pub visibility_radius: u32,

    /// Thirst at which the player starts suffering dehydration.
    pub thirst_threshold: u32,
    /// Hunger at which the player starts suffering starvation.
    pub hunger_threshold: u32,

    /// Rings searched around a death cell when it cannot hold a corpse.
    pub corpse_search_radius: u32,
    /// Chance (percent) that a slain actor drops loot.
    pub loot_drop_percent: u32,

    /// Own turns without damage before an injured actor recovers 1 hp.
    pub recovery_interval: u32,

    /// Random cells tried before a teleport gives up.
    pub teleport_attempts: u32,
    /// Random neighbouring cells tried before a spawn gives up.
    pub spawn_attempts: u32,

    /// Base chance (percent) to dig through rock.
    pub dig_base_percent: u32,
    /// Extra dig chance (percent) per point of strength.
    pub dig_strength_percent: u32,

    /// Duration of burn applied by standing in fire.
    pub hazard_burn_duration: u32,
    /// Duration of poison applied by standing in gas.
    pub hazard_poison_duration: u32,
    /// Damage range (inclusive) for falling into a chasm.
    pub fall_damage_min: i32,
    pub fall_damage_max: i32,

    /// Chance (percent) that a magnetic cell deflects a passing projectile.
    pub magnetism_pull_percent: u32,
    /// Distance at which magnetic cells influence projectiles.
    pub magnetism_radius: u32,
    /// Whether magnetism may pull a projectile onto a blocked cell.
    pub magnetism_allow_blocked: bool,
    /// Cells a projectile may travel before it drops.
    pub projectile_max_travel: u32,

    /// Items an actor can carry.
    pub inventory_capacity: usize,
    /// Hunger removed by eating a corpse.
    pub corpse_nutrition: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Upper bound on neighbour candidates examined per search ring.
    pub const MAX_RING_CELLS: usize = 8 * Self::MAX_CORPSE_SEARCH_RADIUS as usize;
    /// Deepest corpse search ring honoured regardless of configuration.
    pub const MAX_CORPSE_SEARCH_RADIUS: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_VISIBILITY_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            visibility_radius: Self::DEFAULT_VISIBILITY_RADIUS,
            thirst_threshold: 300,
            hunger_threshold: 500,
            corpse_search_radius: 1,
            loot_drop_percent: 25,
            recovery_interval: 10,
            teleport_attempts: 50,
            spawn_attempts: 16,
            dig_base_percent: 30,
            dig_strength_percent: 5,
            hazard_burn_duration: 8,
            hazard_poison_duration: 6,
            fall_damage_min: 3,
            fall_damage_max: 6,
            magnetism_pull_percent: 50,
            magnetism_radius: 2,
            magnetism_allow_blocked: false,
            projectile_max_travel: 64,
            inventory_capacity: 8,
            corpse_nutrition: 150,
        }
    }

    pub fn with_visibility_radius(mut self, visibility_radius: u32) -> Self {
        self.visibility_radius = visibility_radius;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
