// Persistence
pub const STORAGE_KEY: &str = "gacha_app_state_v1";
pub const DATA_DIR_NAME: &str = ".gacha";
pub const LOG_FILE_NAME: &str = "gacha.log";

// Budget limits
pub const MIN_BUDGET: u32 = 1;
pub const MAX_BUDGET: u32 = 9999;
pub const LARGE_BUDGET_CONFIRM_THRESHOLD: u32 = 1000;
pub const DEFAULT_BUDGET_INPUT: &str = "10";
pub const MAX_BUDGET_INPUT_CHARS: usize = 4;

// Draw timing
pub const SPIN_DELAY_MS: u64 = 800;
pub const UI_POLL_INTERVAL_MS: u64 = 50;

// Reference weights (total 118)
pub const BASIC_WEIGHT: u32 = 50;
pub const RARE_WEIGHT: u32 = 35;
pub const EPIC_WEIGHT: u32 = 25;
pub const HIDDEN_WEIGHT: u32 = 8;

// Reference name pools
pub const BASIC_NAMES: [&str; 5] = [
    "Rusty Gear",
    "Common Pebble",
    "Old Ticket",
    "Wooden Charm",
    "Empty Bottle",
];
pub const RARE_NAMES: [&str; 5] = [
    "Silver Ring",
    "Polished Gem",
    "Ancient Coin",
    "Silk Scarf",
    "Crystal Vial",
];
pub const EPIC_NAMES: [&str; 5] = [
    "Golden Chalice",
    "Dragon Scale",
    "Phoenix Feather",
    "Emerald Tablet",
    "Void Essence",
];
pub const HIDDEN_NAMES: [&str; 5] = [
    "Cosmic Key",
    "Philosopher's Stone",
    "Time Fragment",
    "Eternal Flame",
    "Star Heart",
];

// Item images
pub const IMAGE_URL_BASE: &str = "https://picsum.photos/seed";
pub const IMAGE_SIZE_PX: u32 = 200;

// Simulator
pub const DEFAULT_SIM_DRAWS: u32 = 100_000;
