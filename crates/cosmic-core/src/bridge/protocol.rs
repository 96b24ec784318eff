/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 8 floats]
/// [Particles: max_particles × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::config::EngineConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_PARTICLES: usize = 4;
pub const HEADER_PARTICLE_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_WORLD_WIDTH: usize = 8;
pub const HEADER_WORLD_HEIGHT: usize = 9;
/// 1.0 while the loop is paused; the canvas layer paints the overlay.
pub const HEADER_PAUSED: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per particle: x, y, size, alpha, color, pad (wire format — never
/// changes).
pub const PARTICLE_FLOATS: usize = 6;

/// Floats per combat event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum particles.
    pub max_particles: usize,
    /// Maximum combat events per frame.
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of particle data section in floats.
    pub particle_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where particle data begins.
    pub particle_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_particles: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let particle_data_floats = max_particles * PARTICLE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let particle_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = particle_data_offset + particle_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_particles,
            max_events,
            instance_data_floats,
            particle_data_floats,
            event_data_floats,
            instance_data_offset,
            particle_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an EngineConfig.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_instances, config.max_particles, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&EngineConfig::default());

        assert_eq!(layout.max_instances, 512);
        assert_eq!(layout.max_particles, 150);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.instance_data_floats, 512 * 8);
        assert_eq!(layout.particle_data_floats, 150 * 6);
        assert_eq!(layout.event_data_floats, 32 * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 200, 10);

        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.particle_data_offset,
            layout.instance_data_offset + layout.instance_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.particle_data_offset + layout.particle_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn wire_strides_match_the_pod_structs() {
        use crate::api::events::WireEvent;
        use crate::renderer::instance::{ParticleInstance, RenderInstance};

        assert_eq!(INSTANCE_FLOATS, RenderInstance::FLOATS);
        assert_eq!(PARTICLE_FLOATS, ParticleInstance::FLOATS);
        assert_eq!(EVENT_FLOATS, WireEvent::FLOATS);
    }
}
