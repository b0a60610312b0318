use winit::dpi::PhysicalSize;

/// Standard window sizes, largest first, each paired with the monitor area
/// it needs.
const STEPS: [(u32, u32); 3] = [(1920, 1080), (1280, 720), (640, 480)];

const SMALLEST: PhysicalSize<u32> = PhysicalSize::new(320, 200);

/// Used when the platform cannot report a monitor.
const NO_MONITOR: PhysicalSize<u32> = PhysicalSize::new(1280, 720);

/// Largest standard size that fits on `monitor`.
///
/// The full-HD step requires a monitor strictly wider than 1920 so the window
/// does not cover the whole screen; the smaller steps only need to fit.
pub fn default_window_size(monitor: Option<PhysicalSize<u32>>) -> PhysicalSize<u32> {
    let Some(monitor) = monitor else {
        return NO_MONITOR;
    };

    for (i, &(width, height)) in STEPS.iter().enumerate() {
        let wide_enough = if i == 0 {
            monitor.width > width
        } else {
            monitor.width >= width
        };
        if wide_enough && monitor.height >= height {
            return PhysicalSize::new(width, height);
        }
    }

    SMALLEST
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(w: u32, h: u32) -> (u32, u32) {
        let s = default_window_size(Some(PhysicalSize::new(w, h)));
        (s.width, s.height)
    }

    #[test]
    fn large_monitor_gets_full_hd() {
        assert_eq!(pick(2560, 1440), (1920, 1080));
    }

    #[test]
    fn exactly_full_hd_monitor_steps_down() {
        assert_eq!(pick(1920, 1080), (1280, 720));
    }

    #[test]
    fn mid_monitor_gets_hd() {
        assert_eq!(pick(1366, 768), (1280, 720));
        assert_eq!(pick(1280, 720), (1280, 720));
    }

    #[test]
    fn small_monitor_gets_vga() {
        assert_eq!(pick(1024, 600), (640, 480));
    }

    #[test]
    fn tiny_monitor_gets_smallest() {
        assert_eq!(pick(600, 400), (320, 200));
        assert_eq!(pick(0, 0), (320, 200));
    }

    #[test]
    fn height_is_checked_too() {
        assert_eq!(pick(3000, 700), (640, 480));
    }

    #[test]
    fn missing_monitor_uses_hd() {
        assert_eq!(default_window_size(None), PhysicalSize::new(1280, 720));
    }
}
