pub mod assets;
pub mod dump;
pub mod find;
pub mod reports;
pub mod rezip;

pub use assets::DumpAssets;
pub use dump::{DumpRequest, run_dump};
pub use find::{FindPlan, run_find, write_found};
pub use rezip::rezip_all;
