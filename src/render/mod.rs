pub mod banner;
pub mod blur;
pub mod cpu;
pub mod frame;
pub mod pipeline;
pub mod recording;
pub mod surface;
pub mod text;
