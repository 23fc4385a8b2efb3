use morpheuz_types::{Marker, MarkerKind, Sample};

pub struct IgnoreMarker;

impl IgnoreMarker {
    /// One marker per ignored sample, consecutive ones are not merged.
    pub fn markers(samples: &[Sample]) -> Vec<Marker> {
        samples
            .iter()
            .filter(|s| s.reading.is_ignored())
            .map(|s| Marker::new(MarkerKind::Ignore, s.time))
            .collect()
    }
}
