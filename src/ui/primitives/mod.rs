pub mod border;
pub mod icon;
pub mod line;
pub mod text;
