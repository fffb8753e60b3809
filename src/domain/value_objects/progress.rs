//! Loading progress percentage

use std::fmt;

use serde::Serialize;

/// Upper bound of the loading progress.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Integer percentage in `0..=100`.
///
/// Only ever grows: [`LoadingProgress::advance`] saturates at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct LoadingProgress(u8);

impl LoadingProgress {
    pub fn new(value: u8) -> Self {
        Self(value.min(PROGRESS_COMPLETE))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Add `step`, clamping to 100.
    pub fn advance(self, step: u8) -> Self {
        Self(self.0.saturating_add(step).min(PROGRESS_COMPLETE))
    }

    pub fn is_complete(self) -> bool {
        self.0 >= PROGRESS_COMPLETE
    }

    /// Splash caption for the current percentage.
    pub fn message(self) -> &'static str {
        match self.0 {
            0..=19 => "Inicializando sistema...",
            20..=39 => "Cargando componentes...",
            40..=59 => "Preparando experiencia...",
            60..=79 => "Compilando código...",
            _ => "Sistema listo!",
        }
    }
}

impl fmt::Display for LoadingProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
