pub mod modality;
pub mod plan;
pub mod record;
pub mod vector;
