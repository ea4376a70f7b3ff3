#![no_main]

use crossed_lines::core::MAX_SATURATION;
use crossed_lines::SegmentNetwork;
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut network = SegmentNetwork::new();

    // je 16 Bytes: Start (x, y) und Ende (x, y) als f32
    for chunk in data.chunks_exact(16) {
        let mut coords = [0.0f32; 4];
        for (value, bytes) in coords.iter_mut().zip(chunk.chunks_exact(4)) {
            *value = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        if !coords.iter().all(|c| c.is_finite()) {
            continue;
        }

        let start = Vec2::new(coords[0], coords[1]);
        let end = Vec2::new(coords[2], coords[3]);
        let admitted = network.can_admit(start, end);
        let inserted = network.try_insert(start, end).is_some();
        assert_eq!(admitted, inserted);

        assert!(network.iter().all(|s| s.saturation() <= MAX_SATURATION));
    }

    assert!(network.accounting_mismatches().is_empty());
});
