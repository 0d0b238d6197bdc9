// File: crates/chart-core/tests/layout.rs
// Purpose: Plot-area planning from canvas size and margins.

use chart_core::{ChartError, Layout, Margin};

#[test]
fn default_margins_on_900x600() {
    let layout = Layout::plan(900, 600, &Margin::default()).expect("valid layout");
    assert_eq!(layout.inner_width, 710.0);
    assert_eq!(layout.inner_height, 392.0);
}

#[test]
fn positive_whenever_canvas_exceeds_margins() {
    let margins = [
        Margin::default(),
        Margin::new(0, 0, 0, 0),
        Margin::new(5, 17, 3, 60),
        Margin::new(300, 1, 299, 1),
    ];
    for m in &margins {
        for dw in [1u32, 2, 37, 1000] {
            for dh in [1u32, 9, 480] {
                let w = m.hsum() as u32 + dw;
                let h = m.vsum() as u32 + dh;
                let l = Layout::plan(w, h, m).expect("canvas larger than margins");
                assert_eq!(l.inner_width, dw as f64);
                assert_eq!(l.inner_height, dh as f64);
                assert!(l.inner_width > 0.0 && l.inner_height > 0.0);
            }
        }
    }
}

#[test]
fn zero_width_plot_is_rejected() {
    let m = Margin::default();
    let err = Layout::plan(190, 600, &m).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateLayout { inner_width: 0, inner_height: 392 }));
}

#[test]
fn margins_larger_than_canvas_do_not_underflow() {
    let err = Layout::plan(100, 50, &Margin::default()).unwrap_err();
    match err {
        ChartError::DegenerateLayout { inner_width, inner_height } => {
            assert_eq!(inner_width, -90);
            assert_eq!(inner_height, -158);
        }
        other => panic!("unexpected error: {other}"),
    }
}
