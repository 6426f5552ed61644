pub mod complex;
pub mod conserve;
pub mod convert;
pub mod error;
pub mod idmap;
pub mod io;
pub mod ortholog;
pub mod pipeline;
pub mod report;

pub use error::CplxError;
