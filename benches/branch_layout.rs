use criterion::{black_box, criterion_group, criterion_main, Criterion};
use line_diagram::diagram::{group_stops, lay_out, resolve_direction};
use line_diagram::models::{
    DirectionId, LaidOutStop, Route, RouteType, SegmentEntry, SegmentKind, Stop, StopFeatures,
};
use line_diagram::{DiagramSettings, LineDiagram};

const TRUNK_STOPS: usize = 200;
const BRANCH_STOPS: usize = 150;

fn stop(id: String, branch: Option<&str>, kinds: &[SegmentKind], is_terminus: bool) -> LaidOutStop {
    LaidOutStop::new(
        Stop {
            name: id.clone(),
            id,
            branch: branch.map(str::to_string),
            is_terminus,
            is_beginning: false,
            zone: None,
            features: StopFeatures::empty(),
            coordinates: None,
        },
        kinds.iter().copied().map(SegmentEntry::new).collect(),
    )
}

/// A long trunk that splits into two interleaved branches
fn synthetic_route() -> Vec<LaidOutStop> {
    let mut stops = vec![stop("trunk-0".to_string(), None, &[SegmentKind::Terminus], true)];
    stops.extend((1..TRUNK_STOPS).map(|i| stop(format!("trunk-{i}"), None, &[SegmentKind::Stop], false)));
    stops.push(stop("merge".to_string(), None, &[SegmentKind::Merge, SegmentKind::Stop], false));

    for i in 0..BRANCH_STOPS {
        let (branch, kinds): (&str, &[SegmentKind]) = if i % 2 == 0 {
            ("A", &[SegmentKind::Stop, SegmentKind::Line])
        } else {
            ("B", &[SegmentKind::Line, SegmentKind::Stop])
        };
        stops.push(stop(format!("{branch}-{i}"), Some(branch), kinds, false));
    }
    stops.push(stop("A-end".to_string(), Some("A"), &[SegmentKind::Terminus, SegmentKind::Line], true));
    stops.push(stop("B-end".to_string(), Some("B"), &[SegmentKind::Terminus], true));
    stops
}

fn benchmark_branch_layout(c: &mut Criterion) {
    let stops = lay_out(&synthetic_route()).unwrap_or_default();
    let direction = resolve_direction(&stops);
    let settings = DiagramSettings::default();
    let route = Route {
        id: "synthetic".to_string(),
        name: "Synthetic Line".to_string(),
        route_type: RouteType::Subway,
        color: None,
        direction_names: ["Outbound".to_string(), "Inbound".to_string()],
        direction_destinations: ["Branches".to_string(), "Downtown".to_string()],
    };

    c.bench_function("resolve_direction", |b| {
        b.iter(|| resolve_direction(black_box(&stops)));
    });

    c.bench_function("group_stops", |b| {
        b.iter(|| group_stops(black_box(&stops), black_box(direction), settings.expanded_group_max));
    });

    // Full rebuild, as done on every input change
    c.bench_function("line_diagram_build", |b| {
        b.iter(|| LineDiagram::build(black_box(&route), DirectionId::Zero, black_box(&stops), "", &settings));
    });
}

criterion_group!(benches, benchmark_branch_layout);
criterion_main!(benches);
