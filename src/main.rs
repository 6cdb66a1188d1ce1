//! Demo loop logging tracked input events

use std::time::{Duration, Instant};

use input_tracker::prelude::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Window app that ticks the tracker once per redraw and logs what it sees
struct DemoApp {
    window: Option<Window>,
    source: WinitSource,
    tracker: InputTracker,
    last_tick: Instant,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            window: None,
            source: WinitSource::new(),
            tracker: InputTracker::new(),
            last_tick: Instant::now(),
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;

        self.tracker.update(&mut self.source, elapsed);

        if self.tracker.key_was_pressed(KeyCode::Escape) {
            log::info!("Escape pressed, exiting");
            event_loop.exit();
            return;
        }

        if self
            .tracker
            .key_was_pressed_with_modifiers(KeyCode::KeyS, &[KeyCode::ControlLeft])
        {
            log::info!("Ctrl+S chord");
        } else if self.tracker.key_was_pressed(KeyCode::Space) {
            log::info!("Space pressed");
        }
        if self.tracker.key_was_released(KeyCode::Space) {
            log::info!("Space released");
        }
        if self
            .tracker
            .key_was_pressed_for(KeyCode::Space, Duration::from_secs(1))
        {
            log::trace!(
                "Space held for {:?}",
                self.tracker.key_held_time(KeyCode::Space)
            );
        }

        if self
            .tracker
            .button_was_clicked_with_modifiers(MouseButton::Left, &[KeyCode::ShiftLeft])
        {
            log::info!("Shift+click at {}", self.tracker.cursor_position());
        } else if self.tracker.button_was_clicked(MouseButton::Left) {
            log::info!("Click at {}", self.tracker.cursor_position());
        }

        let scrolled = self.tracker.scroll_distance();
        if scrolled != 0 {
            let direction = if self.tracker.is_scrolling_up() {
                "up"
            } else {
                "down"
            };
            log::info!("Scrolled {direction} ({scrolled} units)");
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("input-tracker demo")
            .with_inner_size(PhysicalSize::new(640, 480));

        let window = event_loop
            .create_window(window_attrs)
            .expect("Failed to create window");

        self.tracker.initialize(&mut self.source);
        self.last_tick = Instant::now();
        self.window = Some(window);

        log::info!("Demo started; type, click, and scroll in the window");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key_code) = event.physical_key {
                    self.source.process_keyboard(key_code, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.source.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.source
                    .process_cursor(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.source.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                self.tick(event_loop);

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Starting input-tracker demo");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut DemoApp::new())?;

    Ok(())
}
