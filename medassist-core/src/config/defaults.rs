// Single source of truth for all default values.

// --- Knowledge ---
pub const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge_base.json";

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_MIN_SCORE: f64 = 0.2;
pub const DEFAULT_SNIPPET_TITLE: &str = "Practice tip";
pub const DEFAULT_SNIPPET_SOURCE: &str = "Offline ruleset";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_ENABLED: bool = true;
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;
pub const DEFAULT_EMBEDDING_INTRA_THREADS: usize = 2;
pub const DEFAULT_TOKEN_TYPE_IDS: bool = true;
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 1_024;

// --- Translation ---
pub const DEFAULT_TRANSLATION_ENABLED: bool = true;
pub const DEFAULT_NUM_BEAMS: usize = 4;
pub const DEFAULT_MAX_NEW_TOKENS: usize = 128;
pub const DEFAULT_TRANSLATION_INTRA_THREADS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MAX_DEGRADATION_EVENTS: usize = 256;
