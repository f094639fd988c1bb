//! Analyzer constants and runtime configuration defaults

// Palette extraction settings
/// Sample 1 of every N pixels when bucketing dominant colors
pub const COLOR_SAMPLE_STRIDE: usize = 10;
/// Maximum number of dominant colors reported per analysis
pub const MAX_DOMINANT_COLORS: usize = 3;

// Curation rule thresholds
/// Brightness above which only timeless/luxury products are retained
pub const BRIGHT_THRESHOLD: f64 = 0.7;
/// Brightness below which only luxury/handcrafted products are retained
pub const DARK_THRESHOLD: f64 = 0.3;
/// Saturation above which only handcrafted/limited-edition products are retained
pub const SATURATION_THRESHOLD: f64 = 0.5;
/// Maximum number of products returned per recommendation
pub const MAX_RECOMMENDATIONS: usize = 6;

// Substitute analysis used when image decoding fails
/// Fallback dominant color swatches (warm brown, beige, slate)
pub const FALLBACK_DOMINANT_COLORS: [&str; 3] = ["#8B4513", "#F5F5DC", "#2F4F4F"];
/// Fallback brightness value
pub const FALLBACK_BRIGHTNESS: f64 = 0.6;
/// Fallback saturation value
pub const FALLBACK_SATURATION: f64 = 0.4;

// Persistence keys shared with the storefront
/// Store key for the persisted style profile
pub const STYLE_PROFILE_KEY: &str = "elanvir_style_profile";
/// Store key for the last daily spin date
pub const DAILY_SPIN_KEY: &str = "elanvir_daily_spin";
/// Store key for saved outfits
pub const OUTFITS_KEY: &str = "elanvir_outfits";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of reported stages per analyzed file
pub const ANALYSIS_STAGES: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible recommendation shuffles
pub const DEFAULT_SEED: u64 = 42;
/// Default preference store filename
pub const DEFAULT_STORE_FILE: &str = "elanvir_preferences.json";
