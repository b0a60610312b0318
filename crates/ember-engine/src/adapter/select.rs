use wgpu::{Backend, DeviceType};

use super::AdapterPreference;

/// The two attributes adapter selection looks at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdapterDescriptor {
    pub device_type: DeviceType,
    pub backend: Backend,
}

impl AdapterDescriptor {
    pub const fn new(device_type: DeviceType, backend: Backend) -> Self {
        Self { device_type, backend }
    }
}

/// Anything that can be ranked by [`select_adapter`].
pub trait AdapterCandidate {
    fn descriptor(&self) -> AdapterDescriptor;
}

impl AdapterCandidate for AdapterDescriptor {
    fn descriptor(&self) -> AdapterDescriptor {
        *self
    }
}

impl AdapterCandidate for wgpu::AdapterInfo {
    fn descriptor(&self) -> AdapterDescriptor {
        AdapterDescriptor::new(self.device_type, self.backend)
    }
}

impl AdapterCandidate for wgpu::Adapter {
    fn descriptor(&self) -> AdapterDescriptor {
        self.get_info().descriptor()
    }
}

/// Picks the best adapter according to `preference`.
///
/// Scans device types (most preferred first), then candidates in input order,
/// then backends (most preferred first), and returns the first match.
/// Consequences:
/// - a discrete adapter on the last listed backend beats an integrated adapter
///   on the first listed backend
/// - within one device type, the earliest candidate on any listed backend wins;
///   backend order only ranks the backends a single candidate could match
/// - among identical (device type, backend) pairs the earliest candidate wins
///
/// Returns `None` for an empty input or when no candidate falls inside the
/// preference space.
pub fn select_adapter<'a, A>(candidates: &'a [A], preference: &AdapterPreference) -> Option<&'a A>
where
    A: AdapterCandidate,
{
    // `wgpu::Adapter::get_info` allocates; describe each candidate once.
    let descriptors: Vec<AdapterDescriptor> =
        candidates.iter().map(AdapterCandidate::descriptor).collect();

    for &device_type in preference.device_types() {
        for (candidate, descriptor) in candidates.iter().zip(&descriptors) {
            for &backend in preference.backends() {
                if *descriptor == AdapterDescriptor::new(device_type, backend) {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::DEFAULT_DEVICE_TYPES;

    fn d(device_type: DeviceType, backend: Backend) -> AdapterDescriptor {
        AdapterDescriptor::new(device_type, backend)
    }

    fn dx12_then_vulkan() -> AdapterPreference {
        AdapterPreference::new(DEFAULT_DEVICE_TYPES, [Backend::Dx12, Backend::Vulkan])
    }

    /// Tags a descriptor with its input position so identical pairs can be told apart.
    #[derive(Debug)]
    struct Tagged(usize, AdapterDescriptor);

    impl AdapterCandidate for Tagged {
        fn descriptor(&self) -> AdapterDescriptor {
            self.1
        }
    }

    // ── empty / no match ──────────────────────────────────────────────────

    #[test]
    fn empty_input_finds_nothing() {
        let none: [AdapterDescriptor; 0] = [];
        assert_eq!(select_adapter(&none, &dx12_then_vulkan()), None);
    }

    #[test]
    fn unlisted_device_types_find_nothing() {
        let adapters = [
            d(DeviceType::Other, Backend::Vulkan),
            d(DeviceType::VirtualGpu, Backend::Dx12),
        ];
        assert_eq!(select_adapter(&adapters, &dx12_then_vulkan()), None);
    }

    #[test]
    fn unlisted_backends_find_nothing() {
        let adapters = [
            d(DeviceType::DiscreteGpu, Backend::Gl),
            d(DeviceType::IntegratedGpu, Backend::Metal),
        ];
        assert_eq!(select_adapter(&adapters, &dx12_then_vulkan()), None);
    }

    #[test]
    fn empty_preference_finds_nothing() {
        let adapters = [d(DeviceType::DiscreteGpu, Backend::Vulkan)];
        let pref = AdapterPreference::new(Vec::<DeviceType>::new(), Vec::<Backend>::new());
        assert_eq!(select_adapter(&adapters, &pref), None);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn mixed_input_picks_discrete_vulkan() {
        let adapters = [
            d(DeviceType::Cpu, Backend::Vulkan),
            d(DeviceType::DiscreteGpu, Backend::Vulkan),
            d(DeviceType::IntegratedGpu, Backend::Dx12),
        ];
        assert_eq!(
            select_adapter(&adapters, &dx12_then_vulkan()),
            Some(&d(DeviceType::DiscreteGpu, Backend::Vulkan))
        );
    }

    #[test]
    fn device_type_dominates_backend() {
        let adapters = [
            d(DeviceType::IntegratedGpu, Backend::Dx12),
            d(DeviceType::DiscreteGpu, Backend::Vulkan),
        ];
        assert_eq!(
            select_adapter(&adapters, &dx12_then_vulkan()),
            Some(&d(DeviceType::DiscreteGpu, Backend::Vulkan))
        );
    }

    #[test]
    fn input_order_wins_within_device_type() {
        let adapters = [
            Tagged(0, d(DeviceType::DiscreteGpu, Backend::Vulkan)),
            Tagged(1, d(DeviceType::DiscreteGpu, Backend::Dx12)),
        ];
        let chosen = select_adapter(&adapters, &dx12_then_vulkan()).unwrap();
        assert_eq!(chosen.0, 0);
        assert_eq!(chosen.1.backend, Backend::Vulkan);
    }

    #[test]
    fn unlisted_backend_does_not_block_a_later_candidate() {
        let adapters = [
            Tagged(0, d(DeviceType::DiscreteGpu, Backend::Gl)),
            Tagged(1, d(DeviceType::DiscreteGpu, Backend::Dx12)),
        ];
        let chosen = select_adapter(&adapters, &dx12_then_vulkan()).unwrap();
        assert_eq!(chosen.0, 1);
    }

    #[test]
    fn falls_through_to_cpu() {
        let adapters = [
            d(DeviceType::Other, Backend::Dx12),
            d(DeviceType::Cpu, Backend::Vulkan),
        ];
        assert_eq!(
            select_adapter(&adapters, &dx12_then_vulkan()),
            Some(&d(DeviceType::Cpu, Backend::Vulkan))
        );
    }

    #[test]
    fn identical_pairs_pick_earliest() {
        let pair = d(DeviceType::IntegratedGpu, Backend::Vulkan);
        let adapters = [
            Tagged(0, d(DeviceType::Cpu, Backend::Dx12)),
            Tagged(1, pair),
            Tagged(2, pair),
        ];
        let chosen = select_adapter(&adapters, &dx12_then_vulkan()).unwrap();
        assert_eq!(chosen.0, 1);
    }

    #[test]
    fn fallback_backend_widens_the_match() {
        let gl_only = [d(DeviceType::IntegratedGpu, Backend::Gl)];
        assert_eq!(select_adapter(&gl_only, &dx12_then_vulkan()), None);

        let pref = dx12_then_vulkan().with_fallback_backend(Backend::Gl);
        assert_eq!(select_adapter(&gl_only, &pref), Some(&gl_only[0]));
    }

    #[test]
    fn fallback_backend_does_not_outrank_device_type() {
        let pref = dx12_then_vulkan().with_fallback_backend(Backend::Gl);
        let adapters = [
            d(DeviceType::IntegratedGpu, Backend::Dx12),
            d(DeviceType::DiscreteGpu, Backend::Gl),
        ];
        assert_eq!(select_adapter(&adapters, &pref), Some(&adapters[1]));
    }

    // ── properties ────────────────────────────────────────────────────────

    #[test]
    fn any_pair_in_preference_space_is_found() {
        let pref = dx12_then_vulkan();
        for &device_type in pref.device_types() {
            for &backend in pref.backends() {
                let adapters = [
                    d(DeviceType::Other, Backend::Gl),
                    d(device_type, backend),
                    d(DeviceType::VirtualGpu, Backend::Metal),
                ];
                assert_eq!(
                    select_adapter(&adapters, &pref),
                    Some(&adapters[1]),
                    "{device_type:?}/{backend:?} should be selectable"
                );
            }
        }
    }

    #[test]
    fn selection_is_idempotent() {
        let adapters = [
            Tagged(0, d(DeviceType::IntegratedGpu, Backend::Vulkan)),
            Tagged(1, d(DeviceType::DiscreteGpu, Backend::Vulkan)),
            Tagged(2, d(DeviceType::DiscreteGpu, Backend::Vulkan)),
        ];
        let pref = dx12_then_vulkan();
        let first = select_adapter(&adapters, &pref).map(|t| t.0);
        let second = select_adapter(&adapters, &pref).map(|t| t.0);
        assert_eq!(first, Some(1));
        assert_eq!(first, second);
    }
}
