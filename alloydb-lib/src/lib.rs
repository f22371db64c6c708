pub mod composition;
pub mod compparser;
pub mod config;
#[cfg(feature = "debounce")]
pub mod debounce;
pub mod derived;
pub(crate) mod elements_db;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod heuristics;
pub mod intermetallic;
pub mod mixing;
pub mod prediction;
pub mod presets;
pub mod recommend;
pub mod requirements;
pub mod scoring;
pub mod table;

pub use composition::{CompositionElement, NormalizedComposition, normalize};
pub use compparser::{parse_composition, validate_composition};
#[cfg(feature = "debounce")]
pub use config::DebounceConfig;
pub use config::EngineConfig;
#[cfg(feature = "debounce")]
pub use debounce::{Debouncer, Published};
pub use engine::{Engine, Explanation, Stage, predict};
pub use error::{AlloyDbError, Result};
pub use heuristics::AlloyFamily;
pub use prediction::{PredictedProperties, PredictionResult, Scores};
pub use presets::{find_preset, preset_names};
pub use recommend::{Recommendation, Recommendations, SimilarPreset};
pub use requirements::{RequirementMatch, Requirements};
pub use table::ElementTable;
pub use alloydb_data;
