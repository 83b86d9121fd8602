// ── Fixed-point scales ──────────────────────────────────────────────────────

/// Fixed-point scaling factor for the reward accumulator and rates.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// 100% expressed in `SCALE` units (`100 * SCALE`).
pub const ONE_HUNDRED_PERCENT: i128 = 100 * SCALE;

// ── Initialization bounds ───────────────────────────────────────────────────

/// Highest accepted annual rate: 1000%.
pub const MAX_RATE: i128 = 10 * ONE_HUNDRED_PERCENT;

/// Largest reward budget accepted by `initialize`, in token base units.
///
/// `MAX_REWARD_CAP * ONE_HUNDRED_PERCENT` must stay below `i128::MAX` so the
/// staking capacity can be derived without widening.
pub const MAX_REWARD_CAP: i128 = 1_000_000_000_000_000_000;

// ── Timing ──────────────────────────────────────────────────────────────────

/// One full staking period (365 days) in seconds.
pub const STAKING_PERIOD: u64 = 365 * 24 * 60 * 60;

/// Minimum gap between two deposits by the same account.
pub const COOLDOWN_PERIOD: u64 = 24 * 60 * 60;

// ── Early exit ──────────────────────────────────────────────────────────────

/// Share of the pending reward kept when unstaking before a full period.
pub const EARLY_EXIT_KEEP_PERCENT: i128 = 60;

// ── Storage TTL (in ledgers, ~5 s each) ─────────────────────────────────────

/// Entries are bumped once their remaining TTL drops below ~30 days.
pub const TTL_THRESHOLD: u32 = 518_400;
/// Bumped entries live for ~180 days.
pub const TTL_EXTEND_TO: u32 = 3_110_400;
