pub mod day_record;
pub mod employee;
pub mod event_kind;
pub mod holiday;
pub mod message;
pub mod raw_event;
pub mod status;
pub mod summary;
