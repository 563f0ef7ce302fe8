//! FreightDesk Core
//!
//! Platform-agnostic booking logic for the China-Europe rail freight desk:
//! intake validation, schedule generation and caching, booking handoff.
//! Nothing here touches the browser; pages supply a [`ScheduleStore`] and a
//! [`ViewSink`].

pub mod booking;
pub mod config;
pub mod constants;
pub mod criteria;
pub mod engine;
pub mod format;
pub mod generator;
pub mod intake;
pub mod numbers;
pub mod query;
pub mod render;
pub mod sailing;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use booking::{BookingError, BookingField, BookingForm, BookingSelection, select_sailing};
pub use config::{Bounds, PriceBand, ScheduleConfig, ScheduleConfigError, TerminalCatalog};
pub use criteria::{CargoPeriod, ContainerType, CriteriaFingerprint, SearchCriteria};
pub use engine::{PersistError, Reconciliation, ScheduleEngine, ScheduleOrigin};
pub use format::{format_date, format_price};
pub use generator::{generate, sample_departure_offsets, unit_price};
pub use intake::{IntakeField, IntakeForm, earliest_ready_date};
pub use query::{QueryError, decode_criteria, decode_selection, encode_criteria, encode_selection};
pub use render::{BookingSummary, ScheduleRow, ScheduleView, ViewSink, render_schedule};
pub use sailing::Sailing;
pub use store::{MemoryStore, ScheduleStore, StoreKey};
pub use validation::{FieldError, FormErrors, FormField, FormValues, Rule, validate_value};
