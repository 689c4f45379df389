pub mod any_month_day;
