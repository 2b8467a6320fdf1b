pub mod audio;
pub mod technique;
pub mod voice;
