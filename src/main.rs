// src/main.rs

pub mod app;
pub mod engine_lib;
pub mod rendering_lib;
pub mod ui;

use std::sync::Arc;

use log::{error, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use app::{AppError, StarApp};

const MIN_FRAME_TIME: std::time::Duration = std::time::Duration::from_millis(8);

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if let Err(e) = console_log::init_with_level(log::Level::Warn) {
                web_sys::console::error_1(&format!("Couldn't initialize logger: {e}").into());
            }
        } else {
            env_logger::init();
        }
    }

    if let Err(e) = run_app().await {
        error!("Star Generator failed: {e}");
    }
}

async fn run_app() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Star Generator")
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768))
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        let appended = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            });
        if appended.is_none() {
            warn!("Couldn't append canvas to document body.");
        }
    }

    let mut app_state = StarApp::new(window.clone()).await?;

    let mut last_frame = std::time::Instant::now();

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => { /* In AboutToWait */ }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                let now = std::time::Instant::now();
                if now - last_frame < MIN_FRAME_TIME {
                    return;
                }
                last_frame = now;

                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("WGPU Out Of Memory! Exiting.");
                        target.exit();
                    }
                    Err(e) => warn!("Surface error: {:?}", e),
                }
            }
            Event::LoopExiting => {}
            _ => {}
        }
    })?;
    Ok(())
}

#[tokio::main]
async fn main() {
    run().await;
}
