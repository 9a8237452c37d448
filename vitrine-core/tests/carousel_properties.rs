use std::time::Duration;

use vitrine_core::{CarouselController, CarouselError, CarouselKey};

fn letters(n: usize) -> Vec<char> {
    ('A'..='Z').take(n).collect()
}

fn carousel(n: usize, group: usize) -> CarouselController<char> {
    CarouselController::try_new(
        CarouselKey::Custom("props"),
        letters(n),
        group,
        0,
    )
    .expect("valid settings")
}

#[test]
fn page_count_is_ceiling_division() {
    for n in 1..=12 {
        for g in 1..=5 {
            let c = carousel(n, g);
            assert_eq!(c.page_count(), n.div_ceil(g), "n={n} g={g}");
        }
    }
}

#[test]
fn full_cycle_of_next_returns_to_start() {
    for n in 1..=9 {
        for g in 1..=4 {
            let mut c = carousel(n, g);
            for start in 0..c.page_count() {
                c.go_to(start).unwrap();
                for _ in 0..c.page_count() {
                    c.next();
                }
                assert_eq!(c.current_index(), start, "n={n} g={g}");
            }
        }
    }
}

#[test]
fn prev_undoes_next() {
    for n in 1..=9 {
        for g in 1..=4 {
            let mut c = carousel(n, g);
            for start in 0..c.page_count() {
                c.go_to(start).unwrap();
                c.next();
                c.prev();
                assert_eq!(c.current_index(), start);
                c.prev();
                c.next();
                assert_eq!(c.current_index(), start);
            }
        }
    }
}

#[test]
fn go_to_rejects_out_of_range_without_moving() {
    let mut c = carousel(5, 2);
    c.go_to(1).unwrap();
    for bad in [3, 4, 100, usize::MAX] {
        let err = c.go_to(bad).unwrap_err();
        assert_eq!(
            err,
            CarouselError::OutOfRange {
                index: bad,
                page_count: 3
            }
        );
        assert_eq!(c.current_index(), 1);
    }
}

#[test]
fn regrouping_always_clamps_the_index() {
    for n in 1..=9 {
        for from in 1..=4 {
            for to in 1..=4 {
                let mut c = carousel(n, from);
                c.go_to(c.page_count() - 1).unwrap();
                c.set_group_size(to).unwrap();
                assert!(c.current_index() < c.page_count());
            }
        }
    }
}

#[test]
fn current_page_is_never_empty_for_non_empty_items() {
    for n in 1..=9 {
        for g in 1..=4 {
            let mut c = carousel(n, g);
            for _ in 0..c.page_count() {
                assert!(!c.current_page().is_empty());
                c.next();
            }
        }
    }
}

#[test]
fn four_items_wrap_from_last_to_first() {
    let mut c = carousel(4, 1);
    assert_eq!(c.page_count(), 4);
    c.go_to(3).unwrap();
    c.next();
    assert_eq!(c.current_index(), 0);
}

#[test]
fn five_items_in_pairs_wrap_backwards_to_the_short_page() {
    let mut c = carousel(5, 2);
    assert_eq!(c.page_count(), 3);
    assert_eq!(c.page(0), &['A', 'B']);
    assert_eq!(c.page(1), &['C', 'D']);
    c.prev();
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.current_page(), &['E']);
}

#[test]
fn hover_blocks_autoplay_until_released() {
    let mut c =
        CarouselController::try_new(CarouselKey::Hero, letters(3), 1, 5_000)
            .unwrap();
    c.advance(Duration::from_millis(5_000));
    assert_eq!(c.current_index(), 1);

    c.set_hovered(true);
    for _ in 0..10 {
        c.advance(Duration::from_millis(5_000));
    }
    assert_eq!(c.current_index(), 1);

    c.set_hovered(false);
    c.advance(Duration::from_millis(5_000));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c: CarouselController<char> = carousel(0, 1);
    assert_eq!(c.page_count(), 0);
    assert_eq!(c.next(), None);
    assert_eq!(c.prev(), None);
    assert!(c.current_page().is_empty());
    assert!(c.go_to(0).is_err());
    assert!(c.dots().is_empty());
}

#[test]
fn malformed_settings_fail_fast() {
    assert!(matches!(
        CarouselController::try_new(CarouselKey::Hero, letters(3), 0, 5_000),
        Err(CarouselError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        CarouselController::try_new(CarouselKey::Hero, letters(3), 1, -1),
        Err(CarouselError::InvalidConfiguration(_))
    ));
}
