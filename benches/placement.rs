use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use floatip::scene::{Scene, SceneElement};
use floatip::{
    ElementId, Overflow, PlacementConfig, Point, Rect, Size, compute_placement,
    find_scroll_container, place,
};

/// A chain of nested wrappers with one scrollable panel in the middle,
/// ending in the reference element. Depth drives the ancestor walk cost.
fn nested_scene(depth: u64) -> Scene {
    let mut scene = Scene::new();
    scene.insert(SceneElement {
        id: 0,
        rect: Rect::new(0.0, 0.0, 1920.0, 1080.0),
        parent: None,
        overflow: Overflow::Visible,
        overflow_x: Overflow::Visible,
        overflow_y: Overflow::Visible,
        scroll: Point::default(),
    });
    for i in 1..=depth {
        let scrollable = i == depth / 2;
        scene.insert(SceneElement {
            id: i,
            rect: Rect::new(10.0, 10.0, 1600.0, 900.0),
            parent: Some(i - 1),
            overflow: Overflow::Visible,
            overflow_x: Overflow::Visible,
            overflow_y: if scrollable {
                Overflow::Auto
            } else {
                Overflow::Visible
            },
            scroll: Point::default(),
        });
    }
    // Reference and overlay hang off the deepest wrapper.
    scene.insert(SceneElement {
        id: depth + 1,
        rect: Rect::new(400.0, 300.0, 120.0, 32.0),
        parent: Some(depth),
        overflow: Overflow::Visible,
        overflow_x: Overflow::Visible,
        overflow_y: Overflow::Visible,
        scroll: Point::default(),
    });
    scene.insert(SceneElement {
        id: depth + 2,
        rect: Rect::new(0.0, 0.0, 180.0, 60.0),
        parent: Some(0),
        overflow: Overflow::Visible,
        overflow_x: Overflow::Visible,
        overflow_y: Overflow::Visible,
        scroll: Point::default(),
    });
    scene
}

fn bench_place(c: &mut Criterion) {
    let config = PlacementConfig::default();
    let reference = Rect::new(400.0, 300.0, 120.0, 32.0);
    let container = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let overlay = Size::new(180.0, 60.0);

    c.bench_function("place_ample", |b| {
        b.iter(|| {
            place(
                black_box(reference),
                black_box(container),
                black_box(overlay),
                &config,
            )
        })
    });

    // Cramped container: forces the edge strategy and the fallback scan.
    let cramped = Rect::new(380.0, 290.0, 200.0, 60.0);
    c.bench_function("place_cramped", |b| {
        b.iter(|| {
            place(
                black_box(reference),
                black_box(cramped),
                black_box(overlay),
                &config,
            )
        })
    });
}

fn bench_provider_pipeline(c: &mut Criterion) {
    let config = PlacementConfig::default();
    let mut group = c.benchmark_group("compute_placement");
    for depth in [4u64, 16, 64] {
        let scene = nested_scene(depth);
        let reference = ElementId(depth + 1);
        let overlay = ElementId(depth + 2);
        let root = ElementId(0);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                let container = find_scroll_container(&scene, black_box(reference), root);
                compute_placement(&scene, reference, container, overlay, &config)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_place, bench_provider_pipeline);
criterion_main!(benches);
