pub mod measurements;
pub mod profile;

pub use measurements::{InputError, MeasurementField, MeasurementForm, Measurements, MEASUREMENT_FIELDS};
pub use profile::SavedProfile;
