//! The list of environment variables used throughout the application.

// Metadata provider environment variables
pub const OMDB_API_KEY: &str = "OMDB_API_KEY";
pub const OMDB_BASE_URL: &str = "OMDB_BASE_URL";

// Storage environment variables
pub const STORAGE_BUCKET_NAME: &str = "TOP10MOVIESSTORAGE_BUCKET_NAME";
pub const STORAGE_OBJECT_KEY: &str = "TOP10MOVIESSTORAGE_OBJECT_KEY";

// Queue environment variables
pub const QUEUE_NAME: &str = "TOP10QUEUE_QUEUE_NAME";
pub const QUEUE_DEDUPLICATION_ID: &str = "TOP10QUEUE_DEDUPLICATION_ID";

// Top movie source environment variables
pub const MOVIES_SOURCE_URL: &str = "TOP10_MOVIES_SOURCE_URL";

// Miscellaneous
pub const LOG_FILTER: &str = "TOP10MOVIES_LOG_FILTER";
