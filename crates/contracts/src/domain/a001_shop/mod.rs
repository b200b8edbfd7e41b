pub mod aggregate;
pub mod opening_hours;
pub mod query;
pub mod time_of_day;

pub use aggregate::{Shop, ShopDto, ShopId, ShopRef, ShopValidationError};
pub use opening_hours::{
    check_conflicts, day_label, is_conflict_free, OpeningHoursError, OpeningHoursSet,
    OpeningInterval,
};
pub use query::{ShopFilters, ShopListMode, ShopListQuery, ShopSort};
pub use time_of_day::{TimeOfDay, TimeOfDayError};
