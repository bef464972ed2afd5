mod common;

mod academic;
mod assignments;
mod profiles;
mod submissions;
mod uploads;
