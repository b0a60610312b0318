use std::fmt;

/// Terminal failure of the window + GPU initialization sequence.
///
/// None of these are retried. Details are reported through the
/// [`Logger`](crate::logging::Logger) at the point of failure; the error value
/// itself only says which stage failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InitError {
    /// The windowing system (event loop) could not be initialized.
    WindowingInit,
    /// The window, or on the web the target canvas, could not be created.
    WindowCreation,
    /// The adapter refused to create a device.
    DeviceCreation,
    /// No enumerated adapter matched the adapter preference.
    NoSuitableAdapter,
    /// The surface could not be created, or supports no formats.
    SurfaceCreation,
}

impl InitError {
    /// Stable identifier, suitable for exit messages and scripts.
    pub fn name(self) -> &'static str {
        match self {
            InitError::WindowingInit => "WindowingInitError",
            InitError::WindowCreation => "WindowCreationError",
            InitError::DeviceCreation => "GpuDeviceCreationFailed",
            InitError::NoSuitableAdapter => "GpuNoSuitableAdapters",
            InitError::SurfaceCreation => "GpuSurfaceCreateFailed",
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for InitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct() {
        let all = [
            InitError::WindowingInit,
            InitError::WindowCreation,
            InitError::DeviceCreation,
            InitError::NoSuitableAdapter,
            InitError::SurfaceCreation,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn display_is_the_name() {
        assert_eq!(InitError::NoSuitableAdapter.to_string(), "GpuNoSuitableAdapters");
        assert_eq!(InitError::WindowCreation.to_string(), "WindowCreationError");
    }
}
