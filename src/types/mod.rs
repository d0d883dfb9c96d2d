pub mod recommendation;
pub mod records;
pub mod response;

pub use recommendation::{PositiveSignals, RecommendationPayload};
pub use records::{JobRecord, UserRecord};
pub use response::DataPage;
