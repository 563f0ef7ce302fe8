//! Fixed names and user-facing copy shared across the booking workflow.
//!
//! Storage keys and query keys form the contract between page loads, so
//! they live here rather than next to the code that happens to use them.

// Storage keys -------------------------------------------------------------
pub const LAST_CRITERIA_KEY: &str = "urlParams";
pub const SCHEDULE_DATA_KEY: &str = "scheduleData";

// Query keys ---------------------------------------------------------------
pub const QK_ID: &str = "id";
pub const QK_DEPARTURE_TERMINAL: &str = "departureTerminal";
pub const QK_ARRIVAL_TERMINAL: &str = "arrivalTerminal";
pub const QK_CARGO_READY_DATE: &str = "cargoReadyDate";
pub const QK_CARGO_PERIOD: &str = "cargoPeriod";
pub const QK_CONTAINER_NUMBER: &str = "containerNumber";
pub const QK_CONTAINER_TYPE: &str = "containerType";
pub const QK_DEPARTURE_DATE: &str = "departureDate";
pub const QK_TRANSIT_TIME: &str = "transitTime";
pub const QK_ETA: &str = "eta";
pub const QK_PRICE: &str = "price";

// Intake form --------------------------------------------------------------
pub const TERMINAL_PLACEHOLDER: &str = "Select a terminal";
pub const PERIOD_PLACEHOLDER: &str = "Select a period";
pub const CONTAINER_TYPE_PLACEHOLDER: &str = "Select a type";
pub const MIN_CONTAINERS: i64 = 1;
pub const MAX_CONTAINERS: i64 = 40;

// Schedule -----------------------------------------------------------------
pub const CAPACITY_NOTICE: &str = "Not enough space available for booking.";
pub const NOT_ENOUGH_SPACE_SUFFIX: &str = " (not enough space)";

// Patterns -----------------------------------------------------------------
pub const COMPANY_CODE_PATTERN: &str = r"^[A-Z]{2}[0-9]{4}$";
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]{2,3}$";
