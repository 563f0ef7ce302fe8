pub mod form_field;
pub mod schedule_table;

pub use form_field::{InputField, SelectField};
pub use schedule_table::ScheduleTable;
