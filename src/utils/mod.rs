pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::{is_date_label, is_time_slot_label, parse_date, parse_time_slot};
pub(crate) use timezone::Timezone;
