pub mod account;
pub mod entries;
pub mod enums;
pub mod exercises;
pub mod muscle_groups;
pub mod sets;
pub mod training_exercises;
pub mod trainings;
pub mod user_weights;
