use common::shapes::Rect;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loose_quadtree::{BroadPhase, Config, QuadTree};
use rand::prelude::*;

const WORLD: Rect = Rect {
    left: 0,
    top: 0,
    right: 4096,
    bottom: 4096,
};

fn config() -> Config {
    Config {
        max_elements: 8,
        max_depth: 8,
        pool_size: 4000,
    }
}

fn populated(rng: &mut StdRng, count: i32) -> (QuadTree, Vec<Rect>) {
    let mut quadtree = QuadTree::new_with_config(WORLD, config()).unwrap();
    let mut rects = Vec::new();
    for id in 0..count {
        let rect = WORLD.random_inside(rng, 40, 40);
        quadtree.insert(id, rect);
        rects.push(rect);
    }
    (quadtree, rects)
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quadtree = QuadTree::new_with_config(WORLD, config()).unwrap();

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            let rect = WORLD.random_inside(&mut rng, 40, 40);
            quadtree.insert(black_box(rng.gen()), rect);
        })
    });
}

fn insert_remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut quadtree, _) = populated(&mut rng, 2000);

    c.bench_function("quadtree_insert_remove", |b| {
        b.iter(|| {
            let rect = WORLD.random_inside(&mut rng, 40, 40);
            let element = quadtree.insert(black_box(7), rect);
            quadtree.remove(element);
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (quadtree, _) = populated(&mut rng, 2000);
    let mut ids = Vec::new();

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            let query = WORLD.random_inside(&mut rng, 200, 200);
            quadtree.query_into(black_box(query), &mut ids);
        })
    });
}

fn frame_rebuild_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let boxes: Vec<(u32, i32, Rect)> = (0..1000)
        .map(|key| (key, key as i32, WORLD.random_inside(&mut rng, 40, 40)))
        .collect();
    let projectiles: Vec<Rect> = (0..200)
        .map(|_| WORLD.random_inside(&mut rng, 8, 8))
        .collect();
    let mut broad_phase = BroadPhase::new(WORLD, config()).unwrap();
    let mut ids = Vec::new();

    c.bench_function("broad_phase_frame", |b| {
        b.iter(|| {
            broad_phase.rebuild(boxes.iter().copied());
            for projectile in &projectiles {
                broad_phase.candidates_into(*projectile, &mut ids);
                black_box(ids.len());
            }
            broad_phase.maintain();
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    insert_remove_benchmark,
    query_benchmark,
    frame_rebuild_benchmark
);
criterion_main!(quadtree_benchmarks);
