//! Business logic services
//!
//! Services validate request input and call into the shared nutrition core.

pub mod nutrition;
pub mod recommendations;

pub use nutrition::NutritionService;
pub use recommendations::RecommendationService;
