//! Per-brand extractors.
//!
//! Each extractor is a unit struct implementing
//! [`BrandExtractor`](crate::traits::BrandExtractor). The order they run in
//! is defined by [`ExtractionPipeline`](crate::extract::ExtractionPipeline).

pub mod bmw;
pub mod bosch;
pub mod continental;
pub mod delco;
pub mod delphi;
pub mod ford;
pub mod generic;
pub mod mercedes;
pub mod transtron;

pub use bmw::BmwExtractor;
pub use bosch::BoschExtractor;
pub use continental::ContinentalExtractor;
pub use delco::DelcoExtractor;
pub use delphi::DelphiExtractor;
pub use ford::FordExtractor;
pub use generic::{GenericExtractor, OemMatch};
pub use mercedes::MercedesExtractor;
pub use transtron::TranstronExtractor;
