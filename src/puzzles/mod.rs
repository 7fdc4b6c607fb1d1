pub(crate) mod day1;
pub(crate) mod day2;
