mod display;

use log::{debug, error, warn};
use winit::{
    dpi::PhysicalSize,
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use mandelbrot_explorer::{controls::Controls, Config, Explorer};

use crate::display::Display;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let frame = config.frame();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("mandelbrot")
        .with_inner_size(PhysicalSize::new(frame.width, frame.height))
        .build(&event_loop)?;

    let mut display = Display::new(&window, frame)?;
    let mut controls = Controls::new();
    let mut explorer = Explorer::new(&config);

    display.upload(explorer.render());
    window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => {
                // Frames only change on input, so sleep between events.
                control_flow.set_wait();
            }
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    display.resize(size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    display.resize(*new_inner_size);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    controls.keyboard_input(&input);
                }
                WindowEvent::Focused(false) => {
                    controls.release_all();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // Input that arrives while this renders waits for the next cycle.
                let navigation = controls.take();
                if !navigation.is_empty() {
                    debug!("navigating {:?}", navigation);
                    display.upload(explorer.update(navigation));
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match display.present() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        display.reconfigure();
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("out of memory presenting frame");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                    Err(err) => {
                        warn!("skipping frame: {}", err);
                    }
                }
            }
            _ => {}
        }
    })
}
