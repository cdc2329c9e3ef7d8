pub mod data_input;
pub mod sociogram;
