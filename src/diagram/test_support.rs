use crate::models::{LaidOutStop, SegmentEntry, SegmentKind, Stop, StopFeatures};

pub fn stop_with(id: &str, kinds: &[SegmentKind]) -> LaidOutStop {
    LaidOutStop::new(
        Stop {
            id: id.to_string(),
            name: id.to_string(),
            branch: None,
            is_terminus: false,
            is_beginning: false,
            zone: None,
            features: StopFeatures::empty(),
            coordinates: None,
        },
        kinds.iter().copied().map(SegmentEntry::new).collect(),
    )
}

pub fn branch_stop(id: &str, branch: &str, kinds: &[SegmentKind], is_terminus: bool) -> LaidOutStop {
    let mut stop = stop_with(id, kinds);
    stop.stop.branch = Some(branch.to_string());
    stop.stop.is_terminus = is_terminus;
    stop
}
