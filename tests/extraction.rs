#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use cheeseboard::error::SelectionError;
use cheeseboard::grid::{is_connected, partition};
use cheeseboard::math::{Point2, Vector2};
use cheeseboard::operations::{ExtractCheese, ExtractParams, ExtractPlatter};
use cheeseboard::{Cell, CheeseError, Platter};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic pseudo-random cell sets inside a `size` x `size` box.
fn scattered_cells(seed: u64, size: i32, fill_percent: u64) -> Vec<Cell> {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut cells = Vec::new();
    for x in 0..size {
        for y in 0..size {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            if (state >> 33) % 100 < fill_percent {
                cells.push(Cell::new(x - size / 2, y - size / 2));
            }
        }
    }
    cells
}

fn cells(cells: &[(i32, i32)]) -> Vec<Cell> {
    cells.iter().copied().map(Cell::from).collect()
}

#[test]
fn area_matches_cell_count() {
    init_tracing();
    let cell_size = Vector2::new(3.0, 0.5);
    for seed in 0..40 {
        let input = scattered_cells(seed, 10, 65);
        let set: BTreeSet<Cell> = input.iter().copied().collect();
        let platter = ExtractPlatter::new(input)
            .with_params(ExtractParams::new(cell_size))
            .execute()
            .unwrap();

        let components = partition(&set);
        assert_eq!(platter.len(), components.len(), "seed {seed}");
        for (cheese, component) in platter.iter().zip(&components) {
            #[allow(clippy::cast_precision_loss)]
            let expected = component.len() as f64 * cell_size.x * cell_size.y;
            assert_relative_eq!(cheese.area(), expected, epsilon = 1e-9);
        }
        assert_eq!(components.iter().map(BTreeSet::len).sum::<usize>(), set.len());
    }
}

#[test]
fn strict_matches_platter_per_component() {
    for seed in 100..120 {
        let set: BTreeSet<Cell> = scattered_cells(seed, 8, 70).into_iter().collect();
        let platter = Platter::from_chunks(set.iter().copied()).unwrap();
        for (cheese, component) in platter.iter().zip(partition(&set)) {
            assert!(is_connected(&component));
            let strict = ExtractCheese::new(component).execute().unwrap();
            assert_eq!(&strict, cheese);
        }
    }
}

#[test]
fn input_order_does_not_matter() {
    for seed in 200..220 {
        let forward = scattered_cells(seed, 9, 55);
        let mut backward = forward.clone();
        backward.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(forward.len() / 3);

        let a = Platter::from_chunks(forward).unwrap();
        let b = Platter::from_chunks(backward).unwrap();
        let c = Platter::from_chunks(rotated).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn outer_rings_wind_counter_clockwise_and_holes_clockwise() {
    for seed in 300..330 {
        let platter = Platter::from_chunks(scattered_cells(seed, 10, 75)).unwrap();
        for cheese in &platter {
            assert!(cheese.outer().signed_area() > 0.0);
            for hole in cheese.holes() {
                assert!(hole.signed_area() < 0.0);
            }
        }
    }
}

#[test]
fn l_shape_outline() {
    let cheese = ExtractCheese::new(cells(&[(-1, 0), (0, 0), (-1, 1)]))
        .execute()
        .unwrap();
    assert!(cheese.holes().is_empty());
    assert_eq!(
        cheese.outer().points(),
        &[
            Point2::new(16.0, 0.0),
            Point2::new(16.0, 16.0),
            Point2::new(0.0, 16.0),
            Point2::new(0.0, 32.0),
            Point2::new(-16.0, 32.0),
            Point2::new(-16.0, 0.0),
        ]
    );
}

#[test]
fn nested_ring_inside_hole_is_its_own_cheese() {
    // 5x5 frame, empty 3x3 middle, with a single cell in the very centre.
    let mut input = Vec::new();
    for x in 0..5 {
        for y in 0..5 {
            if x == 0 || y == 0 || x == 4 || y == 4 {
                input.push(Cell::new(x, y));
            }
        }
    }
    input.push(Cell::new(2, 2));

    let err = ExtractCheese::new(input.clone()).execute().unwrap_err();
    assert!(matches!(
        err,
        CheeseError::Selection(SelectionError::NotConnected { components: 2 })
    ));

    let platter = ExtractPlatter::new(input)
        .with_params(ExtractParams::chunks().with_cell_size(1.0, 1.0))
        .execute()
        .unwrap();
    assert_eq!(platter.len(), 2);
    let frame = &platter.cheeses()[0];
    assert_eq!(frame.holes().len(), 1);
    assert_relative_eq!(frame.area(), 16.0);
    let centre = &platter.cheeses()[1];
    assert!(centre.holes().is_empty());
    assert_eq!(centre.outer().min(), Some(Point2::new(2.0, 2.0)));
}

#[test]
fn single_row_and_column() {
    let row = ExtractCheese::new((0..50).map(|x| Cell::new(x, 7)))
        .execute()
        .unwrap();
    assert_eq!(row.outer().len(), 4);

    let column = ExtractCheese::new((-20..20).map(|y| Cell::new(-3, y)))
        .execute()
        .unwrap();
    assert_eq!(column.outer().len(), 4);
    assert_relative_eq!(column.area(), 40.0 * 256.0);
}

#[test]
fn cells_at_both_ends_of_the_range() {
    init_tracing();
    let input = cells(&[
        (i32::MIN, i32::MIN),
        (i32::MIN, i32::MIN + 1),
        (i32::MAX, i32::MAX),
        (i32::MAX - 1, i32::MAX),
    ]);
    let platter = ExtractPlatter::new(input)
        .with_cell_size(1.0, 1.0)
        .execute()
        .unwrap();
    assert_eq!(platter.len(), 2);
    for cheese in &platter {
        assert_eq!(cheese.outer().len(), 4);
        assert!(cheese.holes().is_empty());
        assert_relative_eq!(cheese.area(), 2.0);
    }
    let top = f64::from(i32::MAX) + 1.0;
    assert_eq!(platter.cheeses()[1].outer().max(), Some(Point2::new(top, top)));
    let bottom = f64::from(i32::MIN);
    assert_eq!(
        platter.cheeses()[0].outer().min(),
        Some(Point2::new(bottom, bottom))
    );
}
