pub mod energy;
pub mod equivalence;
pub mod model_info;

pub use energy::EnergyResult;
pub use equivalence::{EquivalenceBasis, EquivalenceDefinition, EquivalenceResult, EquivalenceUnit};
pub use model_info::{ModelInfo, ModelType};
