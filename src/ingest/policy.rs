use serde::Deserialize;

/// Governs the adaptive re-encoding loop, so the algorithm can be tuned and
/// tested independently of image-library specifics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OptimizePolicy {
    /// Total encode attempts before the file fails with `OptimizationFailed`.
    pub max_attempts: u32,
    /// JPEG quality of the first attempt.
    pub initial_quality: u8,
    /// Quality decrement applied after an over-budget attempt.
    pub quality_step: u8,
    /// Maximum byte size of the encoded output.
    pub size_budget: u64,
    /// Neither output dimension may exceed this. Aspect ratio is preserved
    /// and images are never upscaled.
    pub max_dimension: u32,
}

impl Default for OptimizePolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_quality: 80,
            quality_step: 20,
            size_budget: 6 * 1024 * 1024,
            max_dimension: 1600,
        }
    }
}
