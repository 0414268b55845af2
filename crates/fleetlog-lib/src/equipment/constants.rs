//! Game-internal tables shared across the air power and detection calculators.

/// Constant proficiency bonus for fighters (carrier, seaplane, night and land-based),
/// indexed by proficiency tier `alv`.
pub const FIGHTER_PROFICIENCY_BONUS: [i32; 8] = [0, 0, 2, 5, 9, 14, 14, 22];

/// Constant proficiency bonus for bombers, attackers and reconnaissance aircraft.
pub const BOMBER_PROFICIENCY_BONUS: [i32; 8] = [0; 8];

/// Constant proficiency bonus for seaplane bombers.
pub const SEAPLANE_BOMBER_PROFICIENCY_BONUS: [i32; 8] = [0, 0, 1, 1, 1, 3, 3, 6];

/// Lower bounds of the hidden proficiency value for each tier. Tier `alv`
/// covers `[INTERNAL_PROFICIENCY[alv], INTERNAL_PROFICIENCY[alv + 1] - 1]`.
pub const INTERNAL_PROFICIENCY: [i32; 9] = [0, 10, 25, 40, 55, 70, 85, 100, 121];

/// Highest proficiency tier.
pub const MAX_ALV: u8 = 7;

/// Master ids of the rocket interceptors counted by the high-altitude
/// interception multiplier.
pub const ROCKET_FIGHTER_IDS: [u32; 3] = [350, 351, 352];

/// Ship classes (ctype) that receive the US radar synergy.
pub const US_SHIP_CLASSES: [u32; 6] = [65, 69, 83, 84, 87, 91];

/// Ship classes (ctype) that receive the UK radar synergy.
pub const UK_SHIP_CLASSES: [u32; 4] = [67, 78, 82, 88];

/// SG radar (initial model).
pub const SG_RADAR_INITIAL: u32 = 278;
/// SK radar.
pub const SK_RADAR: u32 = 279;
/// SG radar (late model). Its bonus stacks per equipped copy.
pub const SG_RADAR_LATE: u32 = 315;
