//! End-to-end drag scenarios through `GestureController`.

use std::cell::RefCell;
use std::rc::Rc;

use dragview_core::{
    DirectionRegistry, Disposition, DragConfig, GestureController, NavTarget, Navigator,
    PointerSample, Release, Side, Size, Surface, TransitionDirection, TransitionMarker,
    TransitionSink, Vec2,
};
use web_time::{Duration, Instant};

const LEAVE: Duration = Duration::from_millis(400);
const RETURN: Duration = Duration::from_millis(400);

#[derive(Debug, Default)]
struct Panel {
    size: Size,
    position: Vec2,
    last_duration: Duration,
    measured: usize,
}

impl Surface for Panel {
    fn size(&self) -> Size {
        self.size
    }

    fn translate(&mut self, offset: Vec2, duration: Duration) {
        self.position = offset;
        self.last_duration = duration;
    }
}

/// Counts layout reads so tests can check the surface is measured once per gesture.
struct MeasuredPanel(Rc<RefCell<Panel>>);

impl Surface for MeasuredPanel {
    fn size(&self) -> Size {
        let mut panel = self.0.borrow_mut();
        panel.measured += 1;
        panel.size
    }

    fn translate(&mut self, offset: Vec2, duration: Duration) {
        self.0.borrow_mut().translate(offset, duration);
    }
}

#[derive(Clone, Default)]
struct Router(Rc<RefCell<Vec<String>>>);

impl Navigator for Router {
    fn navigate(&mut self, target: &NavTarget) {
        self.0.borrow_mut().push(target.name.clone());
    }
}

fn controller(width: f64, height: f64, sides: &[Side]) -> (GestureController<Panel, Router>, Router) {
    let router = Router::default();
    let mut registry = DirectionRegistry::new(router.clone());
    for &side in sides {
        registry.set(side, Some(NavTarget::new(side.as_str())));
    }
    let panel = Panel {
        size: Size::new(width, height),
        ..Panel::default()
    };
    (
        GestureController::new(panel, registry, DragConfig::default()),
        router,
    )
}

/// Drag horizontally from `x0` in `steps` equal steps of `step` px, 100 ms apart.
fn drag_x<S: Surface, N: Navigator, M: TransitionSink>(
    drag: &mut GestureController<S, N, M>,
    t: Instant,
    x0: f64,
    steps: u32,
    step: f64,
) {
    drag.start(PointerSample::new(x0, 50.0, t));
    for i in 1..=steps {
        let ts = t + Duration::from_millis(u64::from(i) * 100);
        drag.move_to(PointerSample::new(x0 + step * f64::from(i), 50.0, ts));
    }
}

#[test]
fn ratio_threshold_commits_forward() {
    let (mut drag, router) = controller(300.0, 500.0, &[Side::Right]);
    let t = Instant::now();
    drag_x(&mut drag, t, 300.0, 15, -10.0);

    assert_eq!(drag.state().offset().x, -150.0);
    assert!((drag.state().velocity().x + 0.1).abs() < 1e-9);

    let release = drag.end();
    assert_eq!(
        release,
        Release::Committed {
            side: Side::Right,
            direction: TransitionDirection::Forward,
        }
    );
    assert_eq!(drag.marker().direction(), TransitionDirection::Forward);
    assert_eq!(*router.0.borrow(), vec!["right".to_string()]);
    assert_eq!(drag.surface().position, Vec2::new(-300.0, 0.0));
    assert_eq!(drag.surface().last_duration, LEAVE);
}

#[test]
fn short_drag_returns_to_rest() {
    let (mut drag, router) = controller(300.0, 500.0, &[Side::Right]);
    let t = Instant::now();
    drag_x(&mut drag, t, 300.0, 4, -10.0);
    assert_eq!(drag.state().offset().x, -40.0);

    assert_eq!(drag.end(), Release::Cancelled);
    assert!(router.0.borrow().is_empty());
    assert_eq!(drag.state().offset(), Vec2::ZERO);
    assert_eq!(drag.surface().position, Vec2::ZERO);
    assert_eq!(drag.surface().last_duration, RETURN);
}

#[test]
fn drag_out_and_back_never_navigates() {
    let (mut drag, router) = controller(300.0, 500.0, &Side::ALL);
    let t = Instant::now();
    drag.start(PointerSample::new(100.0, 100.0, t));
    for (i, x) in [120.0, 140.0, 150.0, 130.0, 110.0, 100.0].into_iter().enumerate() {
        let ts = t + Duration::from_millis(50 * (i as u64 + 1));
        drag.move_to(PointerSample::new(x, 100.0, ts));
    }
    assert_eq!(drag.state().offset(), Vec2::ZERO);

    assert_eq!(drag.end(), Release::Cancelled);
    assert!(router.0.borrow().is_empty());
    assert_eq!(drag.state().offset(), Vec2::ZERO);
}

#[test]
fn pull_against_missing_side_is_resisted_and_snaps_back() {
    // Only "right" exists; dragging towards +x exposes the missing left side.
    let (mut drag, router) = controller(300.0, 500.0, &[Side::Right]);
    let t = Instant::now();
    drag_x(&mut drag, t, 0.0, 11, 10.0);

    // First step free (offset was 0), the next ten at 0.3 each.
    assert!((drag.state().offset().x - 40.0).abs() < 1e-9);
    assert_eq!(drag.end(), Release::Cancelled);
    assert!(router.0.borrow().is_empty());
}

#[test]
fn moves_are_consumed_once_axis_locks() {
    let (mut drag, _) = controller(300.0, 500.0, &[]);
    let t = Instant::now();
    drag.start(PointerSample::new(0.0, 0.0, t));
    for i in 1..=5u64 {
        let sample = PointerSample::new(0.0, 3.0 * i as f64, t + Duration::from_millis(i * 16));
        assert_eq!(drag.move_to(sample), Disposition::Consumed);
    }
}

#[test]
fn surface_measured_once_per_gesture() {
    let panel = Rc::new(RefCell::new(Panel {
        size: Size::new(320.0, 480.0),
        ..Panel::default()
    }));
    let mut drag = GestureController::new(
        MeasuredPanel(Rc::clone(&panel)),
        DirectionRegistry::default(),
        DragConfig::default(),
    );
    let t = Instant::now();
    drag_x(&mut drag, t, 0.0, 8, -5.0);
    assert_eq!(panel.borrow().measured, 1);
    drag.end();

    drag_x(&mut drag, t + Duration::from_secs(2), 0.0, 3, -5.0);
    assert_eq!(panel.borrow().measured, 2);
}

#[test]
fn vertical_checked_before_horizontal_across_gestures() {
    let (mut drag, router) = controller(300.0, 600.0, &Side::ALL);
    let t = Instant::now();

    // Commit right: surface stays at x = -300.
    drag_x(&mut drag, t, 300.0, 20, -10.0);
    assert!(drag.end().is_committed());
    assert_eq!(drag.state().offset().x, -300.0);

    // Next gesture drags vertically; both ratios now exceed the threshold.
    let t2 = t + Duration::from_secs(5);
    drag.start(PointerSample::new(0.0, 0.0, t2));
    drag.move_to(PointerSample::new(0.0, -250.0, t2 + Duration::from_millis(400)));
    let release = drag.end();

    assert_eq!(
        release,
        Release::Committed {
            side: Side::Down,
            direction: TransitionDirection::Down,
        }
    );
    assert_eq!(*router.0.borrow(), vec!["right".to_string(), "down".to_string()]);
    assert_eq!(drag.marker().direction(), TransitionDirection::Down);
}

#[test]
fn hold_fires_once_while_pushed() {
    let (mut drag, _) = controller(300.0, 500.0, &[Side::Left]);
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    drag.on_hold(move |event| sink.borrow_mut().push(event.side));

    let t = Instant::now();
    drag.start(PointerSample::new(0.0, 0.0, t));
    drag.move_to(PointerSample::new(40.0, 0.0, t + Duration::from_millis(10)));
    drag.move_to(PointerSample::new(80.0, 0.0, t + Duration::from_millis(20)));

    for ms in (0..2000).step_by(50) {
        drag.tick(t + Duration::from_millis(ms));
    }
    assert_eq!(*fired.borrow(), vec![Some(Side::Left)]);
}

#[test]
fn new_gesture_after_reset_starts_clean() {
    let (mut drag, router) = controller(300.0, 500.0, &[Side::Left]);
    let t = Instant::now();
    drag_x(&mut drag, t, 0.0, 10, 20.0);
    assert!(drag.end().is_committed());
    drag.reset();

    drag_x(&mut drag, t + Duration::from_secs(3), 0.0, 3, 10.0);
    assert_eq!(drag.state().offset().x, 30.0);
    assert_eq!(drag.end(), Release::Cancelled);
    assert_eq!(router.0.borrow().len(), 1);
}

#[test]
fn surfaces_share_one_transition_marker() {
    let marker = Rc::new(RefCell::new(TransitionMarker::new()));
    let (pager, _) = controller(300.0, 500.0, &[Side::Left]);
    let (feed, _) = controller(300.0, 500.0, &[Side::Down]);
    let mut pager = pager.with_marker(Rc::clone(&marker));
    let mut feed = feed.with_marker(Rc::clone(&marker));

    let t = Instant::now();
    drag_x(&mut pager, t, 0.0, 10, 20.0);
    assert!(pager.end().is_committed());
    assert_eq!(marker.borrow().direction(), TransitionDirection::Back);

    let t2 = t + Duration::from_secs(2);
    feed.start(PointerSample::new(0.0, 400.0, t2));
    feed.move_to(PointerSample::new(0.0, 200.0, t2 + Duration::from_millis(300)));
    assert!(feed.end().is_committed());
    assert_eq!(marker.borrow().direction(), TransitionDirection::Down);
    assert_eq!(pager.marker().borrow().direction(), TransitionDirection::Down);
}
