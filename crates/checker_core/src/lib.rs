//! Checker core: pure result model, input parsing and report building.
mod export;
mod input;
mod property;
mod report;
mod result;

pub use export::{render_csv, CSV_HEADER, UTF8_BOM};
pub use input::{parse_url_block, parse_url_csv, InputError, URL_COLUMN};
pub use property::{validate_property, PropertyError, DOMAIN_PROPERTY_PREFIX};
pub use report::{RunReport, Summary};
pub use result::{
    InspectionResult, FIELD_PLACEHOLDER, NO_DATA_MESSAGE, PASS_VERDICT, UNKNOWN_COVERAGE,
};
