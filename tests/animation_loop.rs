#![cfg(target_arch = "wasm32")]

use brent_event_dashboard::domain::animation::AnimatorState;
use brent_event_dashboard::infrastructure::rendering::AnimationLoop;
use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_starts_nothing() {
    assert!(AnimationLoop::start(None).is_none());
}

#[wasm_bindgen_test]
fn start_sizes_canvas_and_paints_first_frame() {
    let canvas = make_canvas();
    let animation = AnimationLoop::start(Some(canvas.clone())).unwrap();

    let window = web_sys::window().unwrap();
    let inner_width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), inner_width);
    assert_eq!(animation.state(), AnimatorState::Running);
    assert_eq!(animation.frames_rendered(), 1);
    animation.stop();
}

#[wasm_bindgen_test]
async fn no_frames_after_stop() {
    let canvas = make_canvas();
    let animation = AnimationLoop::start(Some(canvas.clone())).unwrap();
    sleep(Duration::from_millis(100)).await;

    animation.stop();
    let painted = animation.frames_rendered();
    assert!(painted >= 1);
    assert_eq!(animation.state(), AnimatorState::Stopped);
    assert_eq!(canvas.width(), 0);

    sleep(Duration::from_millis(100)).await;
    assert_eq!(animation.frames_rendered(), painted);
}

#[wasm_bindgen_test]
fn stopping_twice_is_harmless() {
    let animation = AnimationLoop::start(Some(make_canvas())).unwrap();
    animation.stop();
    animation.stop();
    assert_eq!(animation.state(), AnimatorState::Stopped);
}

#[wasm_bindgen_test]
fn dropping_the_handle_releases_the_canvas() {
    let canvas = make_canvas();
    drop(AnimationLoop::start(Some(canvas.clone())).unwrap());
    assert_eq!(canvas.width(), 0);
    assert_eq!(canvas.height(), 0);
}
