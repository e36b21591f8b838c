// Single source of truth for all default values.

// --- Network estimation ---
pub const DEFAULT_NETWORK_ALPHA: f64 = 0.01;
pub const MIN_NETWORK_NODES: usize = 2;

// --- Link classification ---
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.05;
pub const DEFAULT_REQUIRE_CONSISTENT_SIGN: bool = true;
pub const DEFAULT_MIN_OBSERVATIONS: usize = 10;

// --- GLM fitting ---
pub const DEFAULT_GLM_MAX_ITERATIONS: usize = 25;
pub const DEFAULT_GLM_TOLERANCE: f64 = 1e-8;

// --- Execution ---
pub const DEFAULT_PARALLEL: bool = false;

// --- Observability ---
pub const LOG_ENV_VAR: &str = "NETCOUPLER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "netcoupler=info";

// --- Environment overrides ---
pub const ENV_NETWORK_ALPHA: &str = "NETCOUPLER_NETWORK_ALPHA";
pub const ENV_SIGNIFICANCE: &str = "NETCOUPLER_SIGNIFICANCE";
pub const ENV_THREADS: &str = "NETCOUPLER_THREADS";
