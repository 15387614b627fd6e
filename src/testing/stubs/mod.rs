mod constant_classifier;
mod in_memory_source;
mod memory_model_store;
mod scripted_driver;

pub use constant_classifier::ConstantClassifier;
pub use in_memory_source::InMemorySource;
pub use memory_model_store::MemoryModelStore;
pub use scripted_driver::ScriptedDriver;
